//! Stack backed by a contiguous array.

use std::fmt;

use crate::types::{PrimerError, PrimerResult};

/// LIFO stack over a growable array. The top is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Whether the stack has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push onto the top. Amortized O(1).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> PrimerResult<T> {
        self.items.pop().ok_or(PrimerError::Empty("Stack"))
    }

    /// Top element, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of elements on the stack.
    pub fn get_size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty Stack");
        }
        write!(f, "TOP")?;
        for item in self.items.iter().rev() {
            write!(f, " -> {}", item)?;
        }
        write!(f, " -> None")
    }
}
