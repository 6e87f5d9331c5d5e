//! Collection abstractions: payload constraints, nullity policy, sources and
//! stacks.

mod element;
mod nullity;
pub mod source;
pub mod stack;

pub use element::Element;
pub use nullity::{Nullity, NullityError};
