//! Forgiving list primitives.
//!
//! Unlike the methods on [`Value`], these accept an absent reference
//! (`None`) as well as any handle, and never fail.

use crate::language::{NIL, Value};

/// Head of a pair; `Nil` for anything else.
pub fn car<'a>(value: impl Into<Option<&'a Value>>) -> &'a Value {
    match value.into() {
        Some(Value::Cons(cell)) => cell.head(),
        _ => &NIL,
    }
}

/// Rest of a pair; `Nil` for anything else.
pub fn cdr<'a>(value: impl Into<Option<&'a Value>>) -> &'a Value {
    match value.into() {
        Some(Value::Cons(cell)) => cell.rest(),
        _ => &NIL,
    }
}

/// True for atoms only. Pairs, `Nil` and absent references are not atoms.
pub fn is_atom<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Atom(_)))
}

/// True for a present, non-empty pair.
pub fn is_pair<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    matches!(value.into(), Some(Value::Cons(_)))
}

pub fn is_empty<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    value.into().is_some_and(|v| v.equals(&NIL))
}

/// True for a pair with exactly one element.
pub fn is_singleton<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    match value.into() {
        Some(Value::Cons(cell)) => cell.rest().is_empty(),
        _ => false,
    }
}
