mod stack_backend;
mod stack_observer;

pub use stack_backend::StackBackend;
pub use stack_observer::{NoopStackObserver, StackObserver};
