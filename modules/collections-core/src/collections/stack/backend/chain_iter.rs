use alloc::rc::Rc;
use core::cell::Cell;

use crate::collections::{source::SourceError, stack::backend::Link};

/// Owning iterator over a chain, first payload slot first.
///
/// The iterator keeps the visited chain section alive through its own `Rc`
/// handles, so it stays valid while the structure it came from moves on. A
/// live iterator additionally captures the incarnation counter at creation
/// and fails fast when the counter has advanced; a detached iterator carries
/// no counter and never checks.
///
/// The check is advisory: it catches accidental same-thread mutation during
/// traversal, not data races. The backing structures are single-threaded by
/// contract.
pub struct ChainIter<T> {
  current:  Rc<Link<T>>,
  live:     Option<Rc<Cell<u64>>>,
  expected: u64,
}

impl<T> ChainIter<T> {
  /// Creates a fail-fast iterator bound to the given incarnation counter.
  pub(crate) fn live(first: Rc<Link<T>>, counter: Rc<Cell<u64>>) -> Self {
    let expected = counter.get();
    Self { current: first, live: Some(counter), expected }
  }

  /// Creates an iterator over a detached chain, without a modification
  /// check.
  pub(crate) const fn detached(first: Rc<Link<T>>) -> Self {
    Self { current: first, live: None, expected: 0 }
  }
}

impl<T> Iterator for ChainIter<T>
where
  T: Clone,
{
  type Item = Result<Option<T>, SourceError>;

  fn next(&mut self) -> Option<Self::Item> {
    // The modification check comes before the exhaustion check: an iterator
    // over an empty stack still fails once the stack has moved on.
    if let Some(live) = &self.live {
      if live.get() != self.expected {
        return Some(Err(SourceError::ConcurrentModification));
      }
    }
    let next = Rc::clone(self.current.next.as_ref()?);
    let payload = self.current.payload.clone();
    self.current = next;
    Some(Ok(payload))
  }
}
