/// Errors produced by read-only source operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
  /// The source holds no payload slots.
  #[error("the source is empty")]
  Empty,
  /// The backing structure was mutated after the iterator was created.
  #[error("the backing structure has been modified since the iterator was created")]
  ConcurrentModification,
}
