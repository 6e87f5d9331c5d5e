#[cfg(test)]
mod tests;

use alloc::rc::Rc;
use core::{cell::Cell, mem};

use crate::collections::{
  Element,
  stack::{
    StackBackend,
    backend::{ChainIter, ChainSource, ChainWalk, Link},
  },
};

/// Stack backend over a singly linked chain of immutable nodes.
///
/// The sentinel tail node is allocated once per backend and reused for the
/// whole lifetime; identity against it is the emptiness test. Every
/// structural mutation strictly increments the incarnation counter exactly
/// once, which live iterators use to fail fast.
pub struct LinkedStackBackend<T> {
  first:       Rc<Link<T>>,
  tail:        Rc<Link<T>>,
  len:         usize,
  incarnation: Rc<Cell<u64>>,
}

impl<T> LinkedStackBackend<T> {
  /// Creates an empty backend whose chain is just the sentinel tail.
  #[must_use]
  pub fn new() -> Self {
    let tail = Rc::new(Link::sentinel());
    Self {
      first: Rc::clone(&tail),
      tail,
      len: 0,
      incarnation: Rc::new(Cell::new(0)),
    }
  }

  fn bump(&self) {
    self.incarnation.set(self.incarnation.get().wrapping_add(1));
  }

  /// Reclaims the payload of an unlinked node, by move when the node is not
  /// aliased by a snapshot or iterator, by clone otherwise.
  fn reclaim(removed: Rc<Link<T>>) -> Option<T>
  where
    T: Clone, {
    match Rc::try_unwrap(removed) {
      | Ok(mut link) => link.payload.take(),
      | Err(shared) => shared.payload.clone(),
    }
  }
}

impl<T> Default for LinkedStackBackend<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StackBackend<T> for LinkedStackBackend<T>
where
  T: Element,
{
  type Detached = ChainSource<T>;
  type Iter = ChainIter<T>;
  type Walk<'a> = ChainWalk<'a, T>
  where
    Self: 'a,
    T: 'a;

  fn len(&self) -> usize {
    self.len
  }

  fn push(&mut self, payload: Option<T>) {
    self.first = Rc::new(Link::new(payload, Rc::clone(&self.first)));
    self.len += 1;
    self.bump();
  }

  fn pop(&mut self) -> Option<Option<T>> {
    let next = Rc::clone(self.first.next.as_ref()?);
    let removed = mem::replace(&mut self.first, next);
    self.len -= 1;
    self.bump();
    Some(Self::reclaim(removed))
  }

  fn replace(&mut self, payload: Option<T>) -> Option<Option<T>> {
    let next = Rc::clone(self.first.next.as_ref()?);
    let removed = mem::replace(&mut self.first, Rc::new(Link::new(payload, next)));
    self.bump();
    Some(Self::reclaim(removed))
  }

  fn detach(&mut self) -> Self::Detached {
    let first = mem::replace(&mut self.first, Rc::clone(&self.tail));
    let len = mem::replace(&mut self.len, 0);
    self.bump();
    ChainSource::new(first, len)
  }

  fn iter(&self) -> Self::Iter {
    ChainIter::live(Rc::clone(&self.first), Rc::clone(&self.incarnation))
  }

  fn walk(&self) -> Self::Walk<'_> {
    ChainWalk::new(&self.first)
  }

  fn is_empty(&self) -> bool {
    debug_assert_eq!(self.len == 0, Rc::ptr_eq(&self.first, &self.tail));
    Rc::ptr_eq(&self.first, &self.tail)
  }
}
