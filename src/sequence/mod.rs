//! Linear sequences: dynamic array and singly linked list.

pub mod array;
pub mod linked_list;

pub use array::Array;
pub use linked_list::LinkedList;
