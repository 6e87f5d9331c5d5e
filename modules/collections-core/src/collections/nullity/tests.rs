use alloc::format;

use super::{Nullity, NullityError};

#[test]
fn allow_proceeds_with_add_and_replace() {
  assert_eq!(Nullity::Allow.proceed_add("payload value", None), Ok(true));
  assert_eq!(Nullity::Allow.proceed_replace("replacement value", None), Ok(true));
}

#[test]
fn ignore_skips_add() {
  assert_eq!(Nullity::Ignore.proceed_add("payload value", None), Ok(false));
  assert_eq!(Nullity::Ignore.proceed_add("payload value", Some(3)), Ok(false));
}

#[test]
fn ignore_fails_replace() {
  let error = Nullity::Ignore.proceed_replace("replacement value", None).unwrap_err();
  assert_eq!(error, NullityError::Absent { what: "replacement value" });
}

#[test]
fn reject_fails_add_and_replace() {
  assert!(Nullity::Reject.proceed_add("payload value", None).is_err());
  assert!(Nullity::Reject.proceed_replace("replacement value", None).is_err());
}

#[test]
fn reject_reports_bulk_position() {
  let error = Nullity::Reject.proceed_add("payload value", Some(2)).unwrap_err();
  assert_eq!(error.position(), Some(2));
  assert_eq!(error.what(), "payload value");
}

#[test]
fn error_message_without_position() {
  let error = NullityError::at("given payload value", None);
  assert_eq!(format!("{error}"), "the given payload value is absent");
}

#[test]
fn error_message_with_position() {
  let error = NullityError::at("given payload value", Some(1));
  assert_eq!(format!("{error}"), "the given payload value at position '1' is absent");
}

#[test]
fn default_is_allow() {
  assert_eq!(Nullity::default(), Nullity::Allow);
}
