use std::any::Any;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::error::{Result, TreeError};

// ============================================================================
// Source Positions
// ============================================================================

/// Half-open source range `[pos, end)` attached to nodes read from text.
///
/// Purely informational: equality, containment and navigation never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub pos: usize,
    pub end: usize,
}

impl Span {
    pub fn new(pos: usize, end: usize) -> Self {
        Span { pos, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Core Type System
// ============================================================================

/// Capabilities every atom kind brings to a tree.
///
/// Atoms are the leaves of an expression; the tree itself only knows how to
/// ask them for a name, compare them against other atoms and read their
/// optional source span. Comparisons against pairs and `Nil` are answered by
/// [`Value`] before an atom is ever consulted.
pub trait Atom: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Stable tag naming the concrete kind, e.g. `"Symbol"`.
    fn type_name(&self) -> &'static str;

    /// Structural equality against another atom, of any kind.
    fn atom_eq(&self, other: &dyn Atom) -> bool;

    fn span(&self) -> Option<Span> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// A pair node. Both slots are fixed at construction and the rest slot is
/// always list-shaped (`Nil` or another pair).
pub struct ConsCell {
    car: Value,
    cdr: Value,
    span: Option<Span>,
}

/// An expression handle: the empty list, a pair, or an atom.
///
/// Cloning is cheap; subtrees are shared through `Arc` and freed by their
/// last owner.
#[derive(Clone, Default)]
pub enum Value {
    /// The canonical empty list.
    #[default]
    Nil,
    Cons(Arc<ConsCell>),
    Atom(Arc<dyn Atom>),
}

/// The process-wide empty marker, for accessors that hand out borrows.
pub static NIL: Value = Value::Nil;

impl ConsCell {
    pub fn head(&self) -> &Value {
        &self.car
    }

    pub fn rest(&self) -> &Value {
        &self.cdr
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }
}

// Long chains would otherwise drop one stack frame per element.
impl Drop for ConsCell {
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.cdr);
        while let Value::Cons(cell) = next {
            match Arc::into_inner(cell) {
                Some(mut owned) => next = std::mem::take(&mut owned.cdr),
                None => break,
            }
        }
    }
}

impl Value {
    pub fn nil() -> &'static Value {
        &NIL
    }

    /// Wrap an atom implementation in a handle.
    pub fn atom<A: Atom>(atom: A) -> Value {
        Value::Atom(Arc::new(atom))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Cons(_) => "Cons",
            Value::Atom(atom) => atom.type_name(),
        }
    }

    /// True for a non-empty pair.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Cons(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// True for values allowed in the rest slot of a pair.
    pub fn is_list_shaped(&self) -> bool {
        !matches!(self, Value::Atom(_))
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Value::Nil => None,
            Value::Cons(cell) => cell.span,
            Value::Atom(atom) => atom.span(),
        }
    }

    /// The head slot, or `Nil` when there is no pair.
    pub fn head(&self) -> &Value {
        match self {
            Value::Cons(cell) => &cell.car,
            _ => &NIL,
        }
    }

    /// The rest slot, or `Nil` when there is no pair.
    pub fn rest(&self) -> &Value {
        match self {
            Value::Cons(cell) => &cell.cdr,
            _ => &NIL,
        }
    }

    pub fn as_cons(&self) -> Option<&ConsCell> {
        match self {
            Value::Cons(cell) => Some(cell),
            _ => None,
        }
    }

    /// Downcast an atom handle to its concrete kind.
    pub fn as_atom<T: Atom>(&self) -> Option<&T> {
        match self {
            Value::Atom(atom) => atom.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Reference identity: the same allocation, or both `Nil`.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Cons(a), Value::Cons(b)) => Arc::ptr_eq(a, b),
            (Value::Atom(a), Value::Atom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

fn pair(car: Value, cdr: Value, span: Option<Span>) -> Value {
    Value::Cons(Arc::new(ConsCell { car, cdr, span }))
}

/// Build a pair. `rest` must be list-shaped.
pub fn cons(head: Value, rest: Value) -> Result<Value> {
    cons_with_span(head, rest, None)
}

/// Build a pair that remembers where it came from in the source text.
pub fn cons_with_span(head: Value, rest: Value, span: Option<Span>) -> Result<Value> {
    if !rest.is_list_shaped() {
        debug!("cons: rejecting {} in rest slot", rest.type_name());
        return Err(TreeError::Shape {
            found: rest.type_name().to_string(),
        });
    }
    Ok(pair(head, rest, span))
}

/// Build a `Nil`-terminated chain holding `items` in order.
///
/// Folds from the back so every intermediate rest is already a list.
pub fn build_list<I>(items: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let items: Vec<Value> = items.into_iter().collect();
    items
        .into_iter()
        .rev()
        .fold(Value::Nil, |rest, head| pair(head, rest, None))
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        build_list(iter)
    }
}

/// `list![a, b, c]` builds the chain `(a (b (c ())))`.
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::Nil
    };
    ($($item:expr),+ $(,)?) => {
        $crate::build_list([$($item),+])
    };
}

// ============================================================================
// Display Implementation
// ============================================================================

// Pairs render fully nested: `(a (b ()))`. The walk along rest is iterative;
// only heads recurse.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "()"),
            Value::Atom(atom) => write!(f, "{atom}"),
            Value::Cons(_) => {
                let mut depth = 0usize;
                let mut current = self;
                while let Value::Cons(cell) = current {
                    write!(f, "({} ", cell.car)?;
                    depth += 1;
                    current = &cell.cdr;
                }
                write!(f, "{current}")?;
                for _ in 0..depth {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Atom(atom) => write!(f, "{atom:?}"),
            Value::Cons(_) => write!(f, "Cons{self}"),
        }
    }
}

impl fmt::Debug for ConsCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsCell")
            .field("car", &self.car)
            .field("cdr", &self.cdr)
            .field("span", &self.span)
            .finish()
    }
}
