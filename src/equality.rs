//! Structural equality and containment.
//!
//! Both walks advance along the rest slots in a loop and only recurse into
//! heads, so arbitrarily long lists compare in constant stack.

use std::sync::Arc;

use crate::language::Value;

impl Value {
    /// Structural equality.
    ///
    /// Pairs compare element by element; `Nil` equals only `Nil`; an atom
    /// never equals a pair or `Nil`, and two atoms defer to [`Atom::atom_eq`].
    ///
    /// [`Atom::atom_eq`]: crate::Atom::atom_eq
    pub fn equals(&self, other: &Value) -> bool {
        let mut left = self;
        let mut right = other;
        loop {
            match (left, right) {
                (Value::Cons(a), Value::Cons(b)) => {
                    if Arc::ptr_eq(a, b) {
                        return true;
                    }
                    if !a.head().equals(b.head()) {
                        return false;
                    }
                    left = a.rest();
                    right = b.rest();
                }
                (Value::Nil, Value::Nil) => return true,
                (Value::Atom(a), Value::Atom(b)) => {
                    return Arc::ptr_eq(a, b) || a.atom_eq(&**b);
                }
                _ => return false,
            }
        }
    }

    /// True if `needle` is this value or appears anywhere beneath it.
    ///
    /// The test is self-inclusive: every value contains itself, and every
    /// proper list contains the `Nil` that terminates it.
    pub fn contains(&self, needle: &Value) -> bool {
        let mut current = self;
        loop {
            if current.equals(needle) {
                return true;
            }
            match current {
                Value::Cons(cell) => {
                    if cell.head().contains(needle) {
                        return true;
                    }
                    current = cell.rest();
                }
                _ => return false,
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Value {}
