//! Work-list containers used by the iterative traversals.

mod queue;
mod stack;

pub use queue::ArrayQueue;
pub use stack::ArrayStack;
