use super::LinkedStackBackend;
use crate::collections::{
  source::{Source, SourceError},
  stack::StackBackend,
};

#[test]
fn new_backend_is_empty() {
  let backend = LinkedStackBackend::<i32>::new();

  assert!(backend.is_empty());
  assert_eq!(backend.len(), 0);
  assert_eq!(backend.walk().next(), None);
}

#[test]
fn push_and_pop_keep_chain_order() {
  let mut backend = LinkedStackBackend::new();

  backend.push(Some(1));
  backend.push(Some(2));
  backend.push(Some(3));

  assert_eq!(backend.len(), 3);
  assert_eq!(backend.pop(), Some(Some(3)));
  assert_eq!(backend.pop(), Some(Some(2)));
  assert_eq!(backend.pop(), Some(Some(1)));
  assert_eq!(backend.pop(), None);
  assert!(backend.is_empty());
}

#[test]
fn replace_exchanges_first_and_keeps_len() {
  let mut backend = LinkedStackBackend::new();

  backend.push(Some(1));
  backend.push(Some(2));

  assert_eq!(backend.replace(Some(9)), Some(Some(2)));
  assert_eq!(backend.len(), 2);
  assert_eq!(backend.pop(), Some(Some(9)));
  assert_eq!(backend.pop(), Some(Some(1)));
}

#[test]
fn replace_on_empty_backend_is_none() {
  let mut backend = LinkedStackBackend::<i32>::new();

  assert_eq!(backend.replace(Some(1)), None);
  assert!(backend.is_empty());
}

#[test]
fn walk_yields_first_payload_first() {
  let mut backend = LinkedStackBackend::new();

  backend.push(Some(1));
  backend.push(None);
  backend.push(Some(3));

  let mut walk = backend.walk();
  assert_eq!(walk.next(), Some(&Some(3)));
  assert_eq!(walk.next(), Some(&None));
  assert_eq!(walk.next(), Some(&Some(1)));
  assert_eq!(walk.next(), None);
}

#[test]
fn detach_resets_the_live_chain() {
  let mut backend = LinkedStackBackend::new();

  backend.push(Some(1));
  backend.push(Some(2));

  let detached = backend.detach();

  assert!(backend.is_empty());
  assert_eq!(backend.len(), 0);
  assert_eq!(detached.len(), 2);
}

#[test]
fn iterator_fails_after_push() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));

  let mut iter = backend.iter();
  backend.push(Some(2));

  assert_eq!(iter.next(), Some(Err(SourceError::ConcurrentModification)));
}

#[test]
fn iterator_fails_after_pop() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));

  let mut iter = backend.iter();
  backend.pop();

  assert_eq!(iter.next(), Some(Err(SourceError::ConcurrentModification)));
}

#[test]
fn iterator_fails_after_replace() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));

  let mut iter = backend.iter();
  backend.replace(Some(2));

  assert_eq!(iter.next(), Some(Err(SourceError::ConcurrentModification)));
}

#[test]
fn iterator_fails_after_detach() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));

  let mut iter = backend.iter();
  let _detached = backend.detach();

  assert_eq!(iter.next(), Some(Err(SourceError::ConcurrentModification)));
}

#[test]
fn iterator_survives_while_backend_is_untouched() {
  let mut backend = LinkedStackBackend::new();
  backend.push(Some(1));
  backend.push(Some(2));

  let mut iter = backend.iter();
  assert_eq!(iter.next(), Some(Ok(Some(2))));
  assert_eq!(iter.next(), Some(Ok(Some(1))));
  assert_eq!(iter.next(), None);
}

#[test]
fn deep_chain_drops_without_overflowing() {
  let mut backend = LinkedStackBackend::new();
  for value in 0..50_000 {
    backend.push(Some(value));
  }
  drop(backend);
}
