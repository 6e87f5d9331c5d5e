mod nullity_error;
#[cfg(test)]
mod tests;

pub use nullity_error::NullityError;

/// Policy deciding how absent (`None`) payload values are handled when they
/// are added to a data structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Nullity {
  /// An absent payload is allowed. It can be inserted and can be used to
  /// replace another payload.
  #[default]
  Allow,
  /// An absent payload is ignored. It is silently skipped on insertion and
  /// cannot be used to replace another payload.
  Ignore,
  /// An absent payload is rejected. It can neither be inserted nor used to
  /// replace another payload.
  Reject,
}

impl Nullity {
  /// Decides whether an absent payload may be added.
  ///
  /// `what` names the offending value for the error message; `position` is
  /// its zero-based position inside a bulk input, if it came from one.
  /// Returns `Ok(false)` when the insertion should be skipped silently.
  ///
  /// # Errors
  ///
  /// Returns a [`NullityError`] under [`Nullity::Reject`].
  pub const fn proceed_add(self, what: &'static str, position: Option<usize>) -> Result<bool, NullityError> {
    match self {
      | Self::Allow => Ok(true),
      | Self::Ignore => Ok(false),
      | Self::Reject => Err(NullityError::at(what, position)),
    }
  }

  /// Decides whether an absent payload may replace an existing payload.
  ///
  /// # Errors
  ///
  /// Returns a [`NullityError`] under [`Nullity::Ignore`] and
  /// [`Nullity::Reject`]; a replacement cannot be skipped.
  pub const fn proceed_replace(self, what: &'static str, position: Option<usize>) -> Result<bool, NullityError> {
    match self {
      | Self::Allow => Ok(true),
      | Self::Ignore | Self::Reject => Err(NullityError::at(what, position)),
    }
  }
}
