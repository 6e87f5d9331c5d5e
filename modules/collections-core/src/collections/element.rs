use core::fmt::Debug;

/// Fundamental constraints for payload values that can be stored in
/// collections such as stacks and sources.
///
/// Storage backends rely on structural sharing, so payloads are handed out by
/// value and must be cloneable; snapshots and iterators may alias the same
/// immutable node a live structure still reaches.
pub trait Element: Clone + Debug + 'static {}

impl<T> Element for T where T: Clone + Debug + 'static {}
