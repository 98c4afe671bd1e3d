//! Fixed-arity views over operator applications.
//!
//! An application `(op a b)` is an ordinary chain whose first element is the
//! operator. These views check the arity once and then hand out the parts
//! without further bounds checks.

use crate::language::Value;

/// `(operator operand)`
#[derive(Debug, Clone, Copy)]
pub struct Unary<'a> {
    pub operator: &'a Value,
    pub operand: &'a Value,
}

/// `(operator left right)`
#[derive(Debug, Clone, Copy)]
pub struct Binary<'a> {
    pub operator: &'a Value,
    pub left: &'a Value,
    pub right: &'a Value,
}

impl Value {
    /// Operand count of an application; `None` for `Nil` and atoms.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Value::Cons(cell) => Some(cell.rest().length()),
            _ => None,
        }
    }

    pub fn as_unary(&self) -> Option<Unary<'_>> {
        let mut items = self.iter();
        match (items.next(), items.next(), items.next()) {
            (Some(operator), Some(operand), None) => Some(Unary { operator, operand }),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<Binary<'_>> {
        let mut items = self.iter();
        match (items.next(), items.next(), items.next(), items.next()) {
            (Some(operator), Some(left), Some(right), None) => Some(Binary {
                operator,
                left,
                right,
            }),
            _ => None,
        }
    }
}
