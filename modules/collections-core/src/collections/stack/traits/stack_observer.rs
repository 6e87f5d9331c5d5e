use crate::collections::source::Source;

/// Observer notified after committed stack mutations.
///
/// All methods default to doing nothing; implement the ones of interest and
/// inject the observer into
/// [`SyncStack`](crate::collections::stack::SyncStack). Observers run after
/// the structural change has been applied and must not assume they can see
/// the stack itself.
pub trait StackObserver<T> {
  /// Called after a payload slot has been pushed as the new first value.
  fn on_pushed(&mut self, _payload: Option<&T>) {}

  /// Called after the first payload slot has been removed.
  fn on_popped(&mut self, _payload: Option<&T>) {}

  /// Called after all payload slots have been detached in one bulk
  /// operation.
  fn on_cleared<S>(&mut self, _detached: &S)
  where
    S: Source<T>, {
  }
}

/// Observer that performs no additional actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopStackObserver;

impl<T> StackObserver<T> for NoopStackObserver {}
