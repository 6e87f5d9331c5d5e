//! Linked storage backend: immutable chain nodes, detached snapshots and the
//! iterators that walk them.

mod chain_iter;
mod chain_source;
mod chain_walk;
mod link;
mod linked_stack_backend;

pub use chain_iter::ChainIter;
pub use chain_source::ChainSource;
pub use chain_walk::ChainWalk;
pub(crate) use link::Link;
pub use linked_stack_backend::LinkedStackBackend;
