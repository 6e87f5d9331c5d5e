use alloc::vec::Vec;
use core::{
  fmt,
  hash::{Hash, Hasher},
  marker::PhantomData,
};

use crate::collections::{
  Element, Nullity, NullityError,
  source::{Source, SourceError, VecSource},
  stack::{LinkedStackBackend, NoopStackObserver, PushOutcome, StackBackend, StackError, StackObserver},
};

/// Stack API parameterised by payload type, storage backend, and observer.
///
/// Position 0 always denotes the most recently pushed surviving value. The
/// wiring enforces the [`Nullity`] policy, checks every precondition, builds
/// the bulk operations from the backend primitives and notifies the observer
/// after each committed mutation; backends only move nodes around.
///
/// The stack is not thread safe and must be synchronized externally in a
/// multithreaded use case.
pub struct SyncStack<T, B = LinkedStackBackend<T>, O = NoopStackObserver>
where
  T: Element,
  B: StackBackend<T>,
  O: StackObserver<T>, {
  backend:  B,
  nullity:  Nullity,
  observer: O,
  _pd:      PhantomData<T>,
}

impl<T, B, O> SyncStack<T, B, O>
where
  T: Element,
  B: StackBackend<T>,
  O: StackObserver<T>,
{
  /// Creates a stack from the given backend, nullity policy, and observer.
  #[must_use]
  pub const fn from_parts(backend: B, nullity: Nullity, observer: O) -> Self {
    Self { backend, nullity, observer, _pd: PhantomData }
  }

  /// Returns the [`Nullity`] this stack has been created with.
  #[must_use]
  pub const fn nullity(&self) -> Nullity {
    self.nullity
  }

  /// Provides access to the injected observer.
  #[must_use]
  pub const fn observer(&self) -> &O {
    &self.observer
  }

  /// Returns the number of payload values.
  #[must_use]
  pub fn len(&self) -> usize {
    self.backend.len()
  }

  /// Indicates whether the stack holds no payload values.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.backend.is_empty()
  }

  /// Pushes the given payload slot as the new first value.
  ///
  /// An absent payload is first put to the nullity policy; under
  /// [`Nullity::Ignore`] the call is a no-op reported as
  /// [`PushOutcome::Skipped`].
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Absent`] when the policy rejects the absent
  /// payload.
  pub fn push(&mut self, payload: Option<T>) -> Result<PushOutcome, StackError> {
    self.push_at(payload, None)
  }

  /// Pushes the given payload slots in iteration order.
  ///
  /// Returns the number of values that actually landed on the stack, which
  /// is smaller than the input length when [`Nullity::Ignore`] skips absent
  /// payloads.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Absent`] carrying the zero-based input position
  /// when the policy rejects an absent payload; values pushed before the
  /// offending one stay on the stack.
  pub fn push_all<I>(&mut self, payloads: I) -> Result<usize, StackError>
  where
    I: IntoIterator<Item = Option<T>>, {
    let mut pushed = 0;
    for (position, payload) in payloads.into_iter().enumerate() {
      if self.push_at(payload, Some(position))?.is_pushed() {
        pushed += 1;
      }
    }
    Ok(pushed)
  }

  fn push_at(&mut self, payload: Option<T>, position: Option<usize>) -> Result<PushOutcome, StackError> {
    if payload.is_none() && !self.nullity.proceed_add("given payload value", position)? {
      return Ok(PushOutcome::Skipped);
    }
    self.backend.push(payload);
    let Self { backend, observer, .. } = self;
    if let Some(slot) = backend.walk().next() {
      observer.on_pushed(slot.as_ref());
    }
    Ok(PushOutcome::Pushed)
  }

  /// Removes and returns the first (most recently pushed) payload slot.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] if the stack holds no values.
  pub fn pop(&mut self) -> Result<Option<T>, StackError> {
    let payload = self.backend.pop().ok_or(StackError::Empty)?;
    self.observer.on_popped(payload.as_ref());
    Ok(payload)
  }

  /// Removes the given number of payload slots, most recently pushed first.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::TooMany`] if `count` exceeds the stack length.
  pub fn pop_all(&mut self, count: usize) -> Result<VecSource<T>, StackError> {
    let len = self.backend.len();
    if count > len {
      return Err(StackError::TooMany { count, len });
    }
    let mut popped = Vec::with_capacity(count);
    for _ in 0..count {
      popped.push(self.pop()?);
    }
    Ok(VecSource::new(popped))
  }

  /// Removes payload slots as long as the stack is not empty and the first
  /// slot satisfies the given predicate, most recently pushed first.
  pub fn pop_all_matches<P>(&mut self, mut predicate: P) -> Result<VecSource<T>, StackError>
  where
    P: FnMut(Option<&T>) -> bool, {
    let mut popped = Vec::new();
    loop {
      let matches = match self.backend.walk().next() {
        | Some(slot) => predicate(slot.as_ref()),
        | None => false,
      };
      if !matches {
        break;
      }
      popped.push(self.pop()?);
    }
    Ok(VecSource::new(popped))
  }

  /// Returns the payload slot at the given index by linear traversal from
  /// the first value.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::OutOfBounds`] if `index` is not smaller than the
  /// stack length.
  pub fn get(&self, index: usize) -> Result<Option<&T>, StackError> {
    let len = self.backend.len();
    match self.backend.walk().nth(index) {
      | Some(slot) => Ok(slot.as_ref()),
      | None => Err(StackError::OutOfBounds { index, len }),
    }
  }

  /// Replaces the first payload slot with the given one, leaving the length
  /// unchanged, and returns the replaced slot.
  ///
  /// The observer sees the exchange as a pop followed by a push.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] if the stack holds no values and
  /// [`StackError::Absent`] when the nullity policy disallows the absent
  /// replacement.
  pub fn replace(&mut self, payload: Option<T>) -> Result<Option<T>, StackError> {
    if self.backend.is_empty() {
      return Err(StackError::Empty);
    }
    if payload.is_none() && !self.nullity.proceed_replace("given replacement value", None)? {
      return Err(StackError::Absent(NullityError::at("given replacement value", None)));
    }
    let replaced = self.backend.replace(payload).ok_or(StackError::Empty)?;
    self.observer.on_popped(replaced.as_ref());
    let Self { backend, observer, .. } = self;
    if let Some(slot) = backend.walk().next() {
      observer.on_pushed(slot.as_ref());
    }
    Ok(replaced)
  }

  /// Removes all payload slots in one bulk operation and returns a snapshot
  /// yielding them, most recently pushed first.
  ///
  /// The snapshot stays valid and unchanged regardless of what happens to
  /// the live stack afterwards.
  pub fn clear(&mut self) -> B::Detached
  where
    B::Detached: Source<T>, {
    let detached = self.backend.detach();
    self.observer.on_cleared(&detached);
    detached
  }

  /// Returns the index of the first payload slot equal to the reference
  /// slot.
  #[must_use]
  pub fn first_index_of(&self, reference: Option<&T>) -> Option<usize>
  where
    T: PartialEq, {
    self.first_index_of_match(|payload| payload == reference)
  }

  /// Returns the index of the first payload slot satisfying the predicate.
  pub fn first_index_of_match<P>(&self, mut predicate: P) -> Option<usize>
  where
    P: FnMut(Option<&T>) -> bool, {
    self.backend.walk().position(|slot| predicate(slot.as_ref()))
  }

  /// Returns a fail-fast iterator starting at the first payload slot.
  ///
  /// The iterator fails with [`SourceError::ConcurrentModification`] on the
  /// next step once the stack has been structurally mutated after the
  /// iterator was created.
  #[must_use]
  pub fn iter(&self) -> B::Iter {
    self.backend.iter()
  }
}

impl<T> SyncStack<T, LinkedStackBackend<T>, NoopStackObserver>
where
  T: Element,
{
  /// Creates an empty linked stack with the default [`Nullity::Allow`].
  #[must_use]
  pub fn new() -> Self {
    Self::with_nullity(Nullity::Allow)
  }

  /// Creates an empty linked stack with the given nullity policy.
  #[must_use]
  pub fn with_nullity(nullity: Nullity) -> Self {
    Self::from_parts(LinkedStackBackend::new(), nullity, NoopStackObserver)
  }
}

impl<T, O> SyncStack<T, LinkedStackBackend<T>, O>
where
  T: Element,
  O: StackObserver<T>,
{
  /// Creates an empty linked stack with the given nullity policy and
  /// observer.
  #[must_use]
  pub fn with_observer(nullity: Nullity, observer: O) -> Self {
    Self::from_parts(LinkedStackBackend::new(), nullity, observer)
  }
}

impl<T> Default for SyncStack<T, LinkedStackBackend<T>, NoopStackObserver>
where
  T: Element,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, B, O> Source<T> for SyncStack<T, B, O>
where
  T: Element,
  B: StackBackend<T>,
  O: StackObserver<T>,
{
  type Iter = B::Iter;

  fn len(&self) -> usize {
    self.backend.len()
  }

  fn iter(&self) -> Self::Iter {
    self.backend.iter()
  }

  fn first(&self) -> Result<Option<&T>, SourceError> {
    match self.backend.walk().next() {
      | Some(slot) => Ok(slot.as_ref()),
      | None => Err(SourceError::Empty),
    }
  }
}

impl<'a, T, B, O> IntoIterator for &'a SyncStack<T, B, O>
where
  T: Element,
  B: StackBackend<T>,
  O: StackObserver<T>,
{
  type IntoIter = B::Iter;
  type Item = Result<Option<T>, SourceError>;

  fn into_iter(self) -> Self::IntoIter {
    self.backend.iter()
  }
}

impl<T, B, O> PartialEq for SyncStack<T, B, O>
where
  T: Element + PartialEq,
  B: StackBackend<T>,
  O: StackObserver<T>,
{
  fn eq(&self, other: &Self) -> bool {
    self.backend.len() == other.backend.len() && self.backend.walk().eq(other.backend.walk())
  }
}

impl<T, B, O> Eq for SyncStack<T, B, O>
where
  T: Element + Eq,
  B: StackBackend<T>,
  O: StackObserver<T>,
{
}

impl<T, B, O> Hash for SyncStack<T, B, O>
where
  T: Element + Hash,
  B: StackBackend<T>,
  O: StackObserver<T>,
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    for slot in self.backend.walk() {
      slot.hash(state);
    }
  }
}

impl<T, B, O> fmt::Debug for SyncStack<T, B, O>
where
  T: Element,
  B: StackBackend<T>,
  O: StackObserver<T>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.backend.walk()).finish()
  }
}
