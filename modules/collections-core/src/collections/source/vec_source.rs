use alloc::vec::Vec;
use core::fmt;

use crate::collections::{
  Element,
  source::{Source, SourceError, VecSourceIter},
};

/// Source over an owned vector of payload slots.
///
/// This is the carrier for bulk-operation results such as
/// [`SyncStack::pop_all`](crate::collections::stack::SyncStack::pop_all):
/// the values are captured once and the source never changes afterwards.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VecSource<T> {
  slots: Vec<Option<T>>,
}

impl<T> VecSource<T> {
  /// Creates a source over the given payload slots, kept in order.
  #[must_use]
  pub const fn new(slots: Vec<Option<T>>) -> Self {
    Self { slots }
  }

  /// Consumes the source and returns the underlying slots.
  #[must_use]
  pub fn into_slots(self) -> Vec<Option<T>> {
    self.slots
  }
}

impl<T> From<Vec<Option<T>>> for VecSource<T> {
  fn from(slots: Vec<Option<T>>) -> Self {
    Self::new(slots)
  }
}

impl<T> Source<T> for VecSource<T>
where
  T: Element,
{
  type Iter = VecSourceIter<T>;

  fn len(&self) -> usize {
    self.slots.len()
  }

  fn iter(&self) -> Self::Iter {
    VecSourceIter::new(self.slots.clone())
  }

  fn first(&self) -> Result<Option<&T>, SourceError> {
    match self.slots.first() {
      | Some(slot) => Ok(slot.as_ref()),
      | None => Err(SourceError::Empty),
    }
  }
}

impl<T> fmt::Debug for VecSource<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.slots.iter()).finish()
  }
}
