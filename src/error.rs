use thiserror::Error;

/// Reasons a position-based operation can refuse to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("the list is empty")]
    EmptyList,
    /// The position is past the last element.
    #[error("position is the end position")]
    EndPosition,
    /// The position is the sentinel, which holds no value.
    #[error("position is before the first element")]
    BeforeBegin,
    #[error("no element follows this position")]
    NoSuccessor,
}
