//! Core collection abstractions for the stapel workspace.
//!
//! The crate provides read-only [`Source`](collections::source::Source)
//! capabilities and a nullity-aware LIFO
//! [`SyncStack`](collections::stack::SyncStack) over pluggable storage
//! backends. Payload slots are `Option` values; the
//! [`Nullity`](collections::Nullity) policy decides whether absent payloads
//! may be inserted, are silently skipped, or are rejected.
//!
//! Everything here is single-threaded by contract: structures are not
//! `Sync`/`Send`-aware and must be synchronized externally when shared.

#![no_std]

extern crate alloc;

pub mod collections;

pub use collections::{Element, Nullity, NullityError};
