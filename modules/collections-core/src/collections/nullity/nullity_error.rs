/// Error raised when an absent payload value is disallowed by the active
/// [`Nullity`](super::Nullity) policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NullityError {
  /// The absent value did not originate from a bulk operation.
  #[error("the {what} is absent")]
  Absent {
    /// Label describing the offending value.
    what: &'static str,
  },
  /// The absent value originated from a bulk operation.
  #[error("the {what} at position '{position}' is absent")]
  AbsentAt {
    /// Label describing the offending value.
    what:     &'static str,
    /// Zero-based position inside the bulk input.
    position: usize,
  },
}

impl NullityError {
  /// Creates an error for the given label, with or without a bulk position.
  #[must_use]
  pub const fn at(what: &'static str, position: Option<usize>) -> Self {
    match position {
      | Some(position) => Self::AbsentAt { what, position },
      | None => Self::Absent { what },
    }
  }

  /// Returns the label describing the offending value.
  #[must_use]
  pub const fn what(&self) -> &'static str {
    match self {
      | Self::Absent { what } | Self::AbsentAt { what, .. } => what,
    }
  }

  /// Returns the bulk position, if the absent value came from a bulk input.
  #[must_use]
  pub const fn position(&self) -> Option<usize> {
    match self {
      | Self::Absent { .. } => None,
      | Self::AbsentAt { position, .. } => Some(*position),
    }
  }
}
