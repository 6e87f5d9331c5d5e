use alloc::format;

use crate::collections::{
  source::{Source, SourceError},
  stack::{StackBackend, backend::LinkedStackBackend},
};

#[test]
fn snapshot_yields_detached_values_in_stack_order() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some('a'));
  backend.push(Some('b'));

  let snapshot = backend.detach();

  assert_eq!(snapshot.len(), 2);
  let mut iter = snapshot.iter();
  assert_eq!(iter.next(), Some(Ok(Some('b'))));
  assert_eq!(iter.next(), Some(Ok(Some('a'))));
  assert_eq!(iter.next(), None);
}

#[test]
fn snapshot_is_stable_under_later_mutation() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));
  backend.push(Some(2));

  let snapshot = backend.detach();
  backend.push(Some(7));
  backend.push(Some(8));
  backend.pop();

  assert_eq!(snapshot.len(), 2);
  let mut iter = snapshot.iter();
  assert_eq!(iter.next(), Some(Ok(Some(2))));
  assert_eq!(iter.next(), Some(Ok(Some(1))));
  assert_eq!(iter.next(), None);
}

#[test]
fn snapshot_iterator_never_fails_fast() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));

  let snapshot = backend.detach();
  let mut iter = snapshot.iter();
  backend.push(Some(2));

  assert_eq!(iter.next(), Some(Ok(Some(1))));
  assert_eq!(iter.next(), None);
}

#[test]
fn empty_snapshot_has_no_first_value() {
  let mut backend = LinkedStackBackend::<i32>::new();

  let snapshot = backend.detach();

  assert!(snapshot.is_empty());
  assert_eq!(snapshot.first(), Err(SourceError::Empty));
  assert_eq!(snapshot.iter().next(), None);
}

#[test]
fn snapshot_first_returns_most_recent_value() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));
  backend.push(None);

  let snapshot = backend.detach();

  assert_eq!(snapshot.first(), Ok(None));
  assert_eq!(snapshot.len(), 2);
}

#[test]
fn snapshot_debug_renders_slot_list() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));
  backend.push(Some(2));

  let snapshot = backend.detach();

  assert_eq!(format!("{snapshot:?}"), "[Some(2), Some(1)]");
}
