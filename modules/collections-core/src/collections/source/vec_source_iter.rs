use alloc::vec::Vec;

use crate::collections::source::SourceError;

/// Owning iterator over the slots of a [`VecSource`](super::VecSource).
///
/// The backing vector is captured at creation, so the iterator never observes
/// a modification and never yields an error.
pub struct VecSourceIter<T> {
  inner: alloc::vec::IntoIter<Option<T>>,
}

impl<T> VecSourceIter<T> {
  pub(crate) fn new(slots: Vec<Option<T>>) -> Self {
    Self { inner: slots.into_iter() }
  }
}

impl<T> Iterator for VecSourceIter<T> {
  type Item = Result<Option<T>, SourceError>;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(Ok)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> ExactSizeIterator for VecSourceIter<T> {}
