#[cfg(test)]
mod tests;

use alloc::rc::Rc;
use core::fmt;

use crate::collections::{
  Element,
  source::{Source, SourceError},
  stack::backend::{ChainIter, ChainWalk, Link},
};

/// Immutable source over a chain detached by a bulk clear.
///
/// The source closes over the chain head and the length at the moment of
/// detachment. Nodes are immutable, so the captured chain keeps yielding the
/// detached values unchanged no matter what the live stack does afterwards.
#[derive(Clone)]
pub struct ChainSource<T> {
  first: Rc<Link<T>>,
  len:   usize,
}

impl<T> ChainSource<T> {
  pub(crate) const fn new(first: Rc<Link<T>>, len: usize) -> Self {
    Self { first, len }
  }
}

impl<T> Source<T> for ChainSource<T>
where
  T: Element,
{
  type Iter = ChainIter<T>;

  fn len(&self) -> usize {
    self.len
  }

  fn iter(&self) -> Self::Iter {
    ChainIter::detached(Rc::clone(&self.first))
  }

  fn first(&self) -> Result<Option<&T>, SourceError> {
    if self.len == 0 {
      return Err(SourceError::Empty);
    }
    Ok(self.first.payload.as_ref())
  }
}

impl<T> fmt::Debug for ChainSource<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(ChainWalk::new(&self.first)).finish()
  }
}
