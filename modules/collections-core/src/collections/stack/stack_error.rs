use crate::collections::{NullityError, source::SourceError};

/// Errors produced by stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
  /// The stack has no payload values to serve the operation.
  #[error("the stack is empty")]
  Empty,
  /// A positional access was outside the stored range.
  #[error("index {index} is out of bounds for length {len}")]
  OutOfBounds {
    /// The requested index.
    index: usize,
    /// The stack length at the time of the call.
    len:   usize,
  },
  /// A bulk pop asked for more values than the stack holds.
  #[error("cannot pop {count} values from a stack of length {len}")]
  TooMany {
    /// The requested number of values.
    count: usize,
    /// The stack length at the time of the call.
    len:   usize,
  },
  /// An absent payload was disallowed by the active nullity policy.
  #[error(transparent)]
  Absent(#[from] NullityError),
  /// The stack was mutated after the iterator was created.
  #[error("the stack has been modified since the iterator was created")]
  ConcurrentModification,
}

impl From<SourceError> for StackError {
  fn from(err: SourceError) -> Self {
    match err {
      | SourceError::Empty => StackError::Empty,
      | SourceError::ConcurrentModification => StackError::ConcurrentModification,
    }
  }
}
