use crate::collections::source::SourceError;

/// Backend abstraction for stack storage engines.
///
/// A backend supplies the structural primitives only; policy enforcement,
/// precondition checks and observer notification live in
/// [`SyncStack`](crate::collections::stack::SyncStack), once for every
/// backend. Position 0 is always the most recently pushed surviving value.
pub trait StackBackend<T> {
  /// Snapshot container produced by [`StackBackend::detach`].
  type Detached;
  /// Owning, fail-fast iterator over the stored payload slots.
  type Iter: Iterator<Item = Result<Option<T>, SourceError>>;
  /// Borrowing traversal over the stored payload slots.
  type Walk<'a>: Iterator<Item = &'a Option<T>>
  where
    Self: 'a,
    T: 'a;

  /// Returns the number of stored payload slots.
  fn len(&self) -> usize;

  /// Inserts the payload slot as the new first value.
  fn push(&mut self, payload: Option<T>);

  /// Removes and returns the first payload slot, or `None` when empty.
  fn pop(&mut self) -> Option<Option<T>>;

  /// Replaces the first payload slot, returning the replaced slot, or `None`
  /// when empty. The length is unchanged.
  fn replace(&mut self, payload: Option<T>) -> Option<Option<T>>;

  /// Detaches every stored slot into an immutable snapshot and resets the
  /// backend to empty.
  fn detach(&mut self) -> Self::Detached;

  /// Returns an owning iterator starting at the first payload slot.
  fn iter(&self) -> Self::Iter;

  /// Returns a borrowing traversal starting at the first payload slot.
  fn walk(&self) -> Self::Walk<'_>;

  /// Indicates whether the backend stores no payload slots.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
