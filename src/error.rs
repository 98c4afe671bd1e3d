use thiserror::Error;

/// Contract violations raised by tree construction and navigation.
///
/// None of these are recoverable runtime conditions: they signal that the
/// caller handed the tree something it cannot represent or asked for a
/// position that does not exist. Nothing is mutated before they are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The second slot of a pair must be list-shaped (a pair or `Nil`).
    #[error("cons: rest must be a list, got {found}")]
    Shape { found: String },

    /// Positional access fell outside the chain.
    #[error("index {index} out of bounds for list of length {len}")]
    Index { index: isize, len: usize },

    /// An operation that needs at least one element was called on `Nil`.
    #[error("{operation}: called on the empty list")]
    EmptyList { operation: &'static str },

    /// A rational number was built with a zero denominator.
    #[error("ratio: denominator must not be zero")]
    ZeroDenominator,
}

pub type Result<T> = std::result::Result<T, TreeError>;
