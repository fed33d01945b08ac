//! LIFO stacks: array-backed and node-backed.

pub mod array_stack;
pub mod linked_stack;

pub use array_stack::ArrayStack;
pub use linked_stack::LinkedStack;
