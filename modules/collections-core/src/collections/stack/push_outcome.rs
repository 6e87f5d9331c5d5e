/// Outcome of a push accepted by the nullity policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
  /// The payload was inserted as the new first value.
  Pushed,
  /// The absent payload was silently skipped under
  /// [`Nullity::Ignore`](crate::collections::Nullity::Ignore).
  Skipped,
}

impl PushOutcome {
  /// Indicates whether the payload actually landed on the stack.
  #[must_use]
  pub const fn is_pushed(self) -> bool {
    matches!(self, Self::Pushed)
  }
}
