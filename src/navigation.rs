//! List-style navigation over pair chains.
//!
//! Every walk stops at the first value that is not a pair, so atoms behave
//! like the empty list here: length 0, no items, nothing to iterate.

use log::debug;

use crate::error::{Result, TreeError};
use crate::language::{NIL, Value, build_list};

impl Value {
    /// Number of elements along the rest chain.
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Zero-based positional access. Negative or past-the-end indices fail.
    pub fn item(&self, index: isize) -> Result<&Value> {
        let found = usize::try_from(index).ok().and_then(|i| self.get(i));
        found.ok_or_else(|| {
            let len = self.length();
            debug!("item: index {index} out of bounds for length {len}");
            TreeError::Index { index, len }
        })
    }

    /// Non-failing positional access.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.iter().nth(index)
    }

    /// Every element but the first, in order. Handles are shared, not copied.
    pub fn tail(&self) -> Result<Vec<Value>> {
        match self {
            Value::Cons(cell) => Ok(cell.rest().to_vec()),
            _ => {
                debug!("tail: called on {}", self.type_name());
                Err(TreeError::EmptyList { operation: "tail" })
            }
        }
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    /// The final element, or `Nil` for an empty chain.
    pub fn last(&self) -> &Value {
        self.iter().last().unwrap_or(&NIL)
    }

    // Positional sugar for operator/operand trees such as `(* a b)` or `(^ x 2)`.

    pub fn arg_list(&self) -> &Value {
        self.rest()
    }

    pub fn operator(&self) -> Result<&Value> {
        self.item(0)
    }

    pub fn operand(&self) -> Result<&Value> {
        self.item(1)
    }

    pub fn left_operand(&self) -> Result<&Value> {
        self.item(1)
    }

    pub fn right_operand(&self) -> Result<&Value> {
        self.item(2)
    }

    pub fn base(&self) -> Result<&Value> {
        self.item(1)
    }

    pub fn exponent(&self) -> Result<&Value> {
        self.item(2)
    }

    /// Apply `f` to every head, producing a fresh chain of the same shape.
    ///
    /// `Nil` maps to itself and a non-pair value is returned unchanged.
    pub fn map<F>(&self, f: F) -> Value
    where
        F: FnMut(&Value) -> Value,
    {
        match self {
            Value::Cons(_) => build_list(self.iter().map(f)),
            _ => self.clone(),
        }
    }

    /// A fresh cursor over the heads of this chain.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self }
    }
}

/// Borrowing cursor over a chain, yielding each head until it reaches a
/// non-pair.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: &'a Value,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next {
            Value::Cons(cell) => {
                self.next = cell.rest();
                Some(cell.head())
            }
            _ => None,
        }
    }
}

impl std::iter::FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Value {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{TreeError, Value, list};

    fn sym(name: &str) -> Value {
        Value::symbol(name)
    }

    #[test]
    fn test_length_walks_rest() {
        assert_eq!(Value::Nil.length(), 0);
        assert_eq!(list![sym("a"), sym("b"), sym("c")].length(), 3);
        assert_eq!(list![list![sym("a"), sym("b")]].length(), 1);
        assert_eq!(sym("a").length(), 0);
    }

    #[test]
    fn test_item_bounds() {
        let list = list![sym("a"), sym("b")];
        assert_eq!(list.item(0).unwrap(), &sym("a"));
        assert_eq!(list.item(1).unwrap(), &sym("b"));
        assert_eq!(
            list.item(2).unwrap_err(),
            TreeError::Index { index: 2, len: 2 }
        );
        assert_eq!(
            list.item(-1).unwrap_err(),
            TreeError::Index { index: -1, len: 2 }
        );
        assert!(list.get(2).is_none());
    }

    #[test]
    fn test_tail_shares_elements() {
        let b = sym("b");
        let list = list![sym("a"), b.clone()];
        let tail = list.tail().unwrap();
        assert_eq!(tail.len(), 1);
        assert!(tail[0].ptr_eq(&b));
        assert_eq!(
            Value::Nil.tail().unwrap_err(),
            TreeError::EmptyList { operation: "tail" }
        );
    }

    #[test]
    fn test_algebraic_positions() {
        // x ^ 2
        let power = list![sym("^"), sym("x"), Value::integer(2)];
        assert_eq!(power.operator().unwrap(), &sym("^"));
        assert_eq!(power.base().unwrap(), &sym("x"));
        assert_eq!(power.exponent().unwrap(), &Value::integer(2));
        assert_eq!(power.arg_list(), &list![sym("x"), Value::integer(2)]);

        // -y
        let negate = list![sym("-"), sym("y")];
        assert_eq!(negate.operand().unwrap(), &sym("y"));
        assert!(negate.right_operand().is_err());
    }

    #[test]
    fn test_map_preserves_shape() {
        let list = list![Value::integer(1), Value::integer(2)];
        let wrapped = list.map(|v| list![v.clone()]);
        assert_eq!(wrapped.to_string(), "((1 ()) ((2 ()) ()))");
        assert!(Value::Nil.map(|v| v.clone()).ptr_eq(Value::nil()));
    }

    #[test]
    fn test_iter_is_restartable() {
        let list = list![sym("a"), sym("b")];
        let mut first = list.iter();
        first.next();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(second.len(), 2);
        assert_eq!(first.next(), Some(&sym("b")));
        assert_eq!(first.next(), None);
        assert_eq!(first.next(), None);
    }

    #[test]
    fn test_last() {
        assert_eq!(list![sym("a"), sym("z")].last(), &sym("z"));
        assert!(Value::Nil.last().is_empty());
    }
}
