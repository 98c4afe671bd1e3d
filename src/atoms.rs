//! Reference atom kinds: interned symbols and exact rational numbers.

use std::any::Any;
use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::{Result, TreeError};
use crate::interner::InternedName;
use crate::language::{Atom, Span, Value};

// ============================================================================
// Symbols
// ============================================================================

/// A named leaf such as `x` or `+`.
#[derive(Debug, Clone)]
pub struct Symbol {
    name: InternedName,
    span: Option<Span>,
}

impl Symbol {
    pub fn new(name: &str) -> Self {
        Symbol {
            name: InternedName::new(name),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn name(&self) -> String {
        self.name.resolve()
    }

    pub fn interned(&self) -> InternedName {
        self.name
    }
}

impl Atom for Symbol {
    fn type_name(&self) -> &'static str {
        "Symbol"
    }

    fn atom_eq(&self, other: &dyn Atom) -> bool {
        other
            .as_any()
            .downcast_ref::<Symbol>()
            .is_some_and(|o| o.name == self.name)
    }

    fn span(&self) -> Option<Span> {
        self.span
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// An exact rational constant, always kept in lowest terms.
#[derive(Debug, Clone)]
pub struct Number {
    value: BigRational,
    span: Option<Span>,
}

impl Number {
    pub fn integer(n: impl Into<BigInt>) -> Self {
        Number {
            value: BigRational::from_integer(n.into()),
            span: None,
        }
    }

    pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(TreeError::ZeroDenominator);
        }
        Ok(Number {
            value: BigRational::new(numer.into(), denom),
            span: None,
        })
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn value(&self) -> &BigRational {
        &self.value
    }

    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }
}

impl Atom for Number {
    fn type_name(&self) -> &'static str {
        "Number"
    }

    fn atom_eq(&self, other: &dyn Atom) -> bool {
        other
            .as_any()
            .downcast_ref::<Number>()
            .is_some_and(|o| o.value == self.value)
    }

    fn span(&self) -> Option<Span> {
        self.span
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.value.is_integer() {
            write!(f, "{}", self.value.numer())
        } else {
            write!(f, "{}/{}", self.value.numer(), self.value.denom())
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Value {
    pub fn symbol(name: &str) -> Value {
        Value::atom(Symbol::new(name))
    }

    pub fn integer(n: i64) -> Value {
        Value::atom(Number::integer(n))
    }

    pub fn ratio(numer: i64, denom: i64) -> Result<Value> {
        Ok(Value::atom(Number::ratio(numer, denom)?))
    }
}
