use super::{crate_version, readiness_message};

#[test]
fn version_matches_package_metadata() {
  assert_eq!(crate_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn readiness_message_mentions_reservation() {
  assert!(readiness_message().contains("reserves"));
  assert!(readiness_message().contains("stapel"));
}

#[test]
fn core_crate_is_reachable_through_the_facade() {
  use crate::collections_core::Nullity;

  assert_eq!(Nullity::default(), Nullity::Allow);
}
