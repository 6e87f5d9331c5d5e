//! Read-only container capability and its simplest concrete carrier.

mod source_error;
mod vec_source;
mod vec_source_iter;

pub use source_error::SourceError;
pub use vec_source::VecSource;
pub use vec_source_iter::VecSourceIter;

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// Read-only view over a collection of payload slots.
///
/// A payload slot is an `Option`; `None` stands for a deliberately stored
/// absent value, which is distinct from the absence of a slot. Iteration is
/// by value: iterators own their position in the backing structure and yield
/// cloned payloads, so a source can keep serving a snapshot even while the
/// structure it came from moves on.
pub trait Source<T> {
  /// Owning iterator over the payload slots, in source order.
  ///
  /// Fail-fast sources surface [`SourceError::ConcurrentModification`]
  /// through the item type; plain sources never yield an error.
  type Iter: Iterator<Item = Result<Option<T>, SourceError>>;

  /// Returns the number of payload slots.
  fn len(&self) -> usize;

  /// Returns an owning iterator starting at the first payload slot.
  fn iter(&self) -> Self::Iter;

  /// Returns the first payload slot.
  ///
  /// # Errors
  ///
  /// Returns [`SourceError::Empty`] if there is no slot.
  fn first(&self) -> Result<Option<&T>, SourceError>;

  /// Indicates whether this source holds no payload slots.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the first payload slot equal to the given reference slot.
  ///
  /// The outer `Option` reports whether a match was found; the inner value is
  /// the matched slot itself, which may be a stored absent payload.
  ///
  /// # Errors
  ///
  /// Propagates iteration failures of fail-fast sources.
  fn first_eq(&self, reference: Option<&T>) -> Result<Option<Option<T>>, SourceError>
  where
    T: PartialEq, {
    self.first_match(|payload| payload == reference)
  }

  /// Returns the first payload slot satisfying the given predicate.
  ///
  /// # Errors
  ///
  /// Propagates iteration failures of fail-fast sources.
  fn first_match<P>(&self, mut predicate: P) -> Result<Option<Option<T>>, SourceError>
  where
    P: FnMut(Option<&T>) -> bool, {
    for item in self.iter() {
      let payload = item?;
      if predicate(payload.as_ref()) {
        return Ok(Some(payload));
      }
    }
    Ok(None)
  }

  /// Returns all payload slots equal to the given reference slot.
  ///
  /// # Errors
  ///
  /// Propagates iteration failures of fail-fast sources.
  fn all_eq(&self, reference: Option<&T>) -> Result<VecSource<T>, SourceError>
  where
    T: PartialEq, {
    self.all_matches(|payload| payload == reference)
  }

  /// Returns all payload slots satisfying the given predicate.
  ///
  /// # Errors
  ///
  /// Propagates iteration failures of fail-fast sources.
  fn all_matches<P>(&self, mut predicate: P) -> Result<VecSource<T>, SourceError>
  where
    P: FnMut(Option<&T>) -> bool, {
    let mut matches = Vec::new();
    for item in self.iter() {
      let payload = item?;
      if predicate(payload.as_ref()) {
        matches.push(payload);
      }
    }
    Ok(VecSource::from(matches))
  }

  /// Indicates whether this source contains a slot equal to the reference.
  ///
  /// # Errors
  ///
  /// Propagates iteration failures of fail-fast sources.
  fn contains(&self, reference: Option<&T>) -> Result<bool, SourceError>
  where
    T: PartialEq, {
    Ok(self.first_eq(reference)?.is_some())
  }

  /// Indicates whether this source contains a slot satisfying the predicate.
  ///
  /// # Errors
  ///
  /// Propagates iteration failures of fail-fast sources.
  fn contains_match<P>(&self, predicate: P) -> Result<bool, SourceError>
  where
    P: FnMut(Option<&T>) -> bool, {
    Ok(self.first_match(predicate)?.is_some())
  }

  /// Indicates whether this source contains every one of the given reference
  /// slots, by equality.
  ///
  /// # Errors
  ///
  /// Propagates iteration failures of fail-fast sources.
  fn contains_all<I>(&self, references: I) -> Result<bool, SourceError>
  where
    T: Eq + Hash,
    I: IntoIterator<Item = Option<T>>, {
    let mut missing: HashSet<Option<T>> = references.into_iter().collect();
    for item in self.iter() {
      if missing.is_empty() {
        break;
      }
      let payload = item?;
      missing.remove(&payload);
    }
    Ok(missing.is_empty())
  }
}
