//! Facade crate for the stapel collections workspace.
//!
//! The actual data structures live in the module crates under `modules/`;
//! this package reserves the workspace name and re-exports the core crate.

#![no_std]

#[cfg(test)]
mod tests;

pub use stapel_collections_core_rs as collections_core;

/// Returns the version of this crate.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}

/// Returns a short message describing the purpose of this facade crate.
#[must_use]
pub const fn readiness_message() -> &'static str {
  "stapel-rs reserves the crate name for the stapel collections workspace; depend on \
   stapel-collections-core-rs for the data structures"
}
