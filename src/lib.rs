//! Immutable cons-cell expression trees.
//!
//! Every node is a [`Value`]: the empty list [`Value::Nil`], a pair built
//! with [`cons`] or [`build_list`], or an atom implementing [`Atom`]. Trees
//! are built bottom-up, never mutated, and freely shared between parents and
//! threads.
//!
//! ```
//! use constree::{Value, car, is_singleton, list};
//!
//! let sum = list![Value::symbol("+"), Value::symbol("a"), Value::symbol("b")];
//! assert_eq!(car(&sum), &Value::symbol("+"));
//! assert_eq!(sum.item(2).unwrap(), &Value::symbol("b"));
//! assert_eq!(sum.to_string(), "(+ (a (b ())))");
//! assert!(!is_singleton(&sum));
//! ```

pub mod arity;
pub mod atoms;
pub mod equality;
pub mod error;
pub mod interner;
pub mod language;
pub mod navigation;
pub mod primitives;

// Re-export commonly used items for convenience
pub use arity::{Binary, Unary};
pub use atoms::{Number, Symbol};
pub use error::{Result, TreeError};
pub use interner::InternedName;
pub use language::{Atom, ConsCell, NIL, Span, Value, build_list, cons, cons_with_span};
pub use navigation::Iter;
pub use primitives::{car, cdr, is_atom, is_empty, is_pair, is_singleton};
