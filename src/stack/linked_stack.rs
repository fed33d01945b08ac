//! Stack built from a chain of owned nodes.

use std::fmt;

use crate::types::{PrimerError, PrimerResult};

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// LIFO stack where each node owns the node below it.
///
/// Both `pop` and `peek` fail with [`PrimerError::Empty`] on an empty stack.
pub struct LinkedStack<T> {
    top: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { top: None, size: 0 }
    }

    /// Whether the stack has no elements.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Number of elements on the stack.
    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Push onto the top. O(1).
    pub fn push(&mut self, data: T) {
        let node = Box::new(Node {
            data,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.size += 1;
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> PrimerResult<T> {
        let node = self.top.take().ok_or(PrimerError::Empty("Stack"))?;
        self.top = node.next;
        self.size -= 1;
        Ok(node.data)
    }

    /// Top element.
    pub fn peek(&self) -> PrimerResult<&T> {
        self.top
            .as_deref()
            .map(|node| &node.data)
            .ok_or(PrimerError::Empty("Stack"))
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let mut current = self.top.as_deref();
        std::iter::from_fn(move || {
            let node = current?;
            current = node.next.as_deref();
            Some(&node.data)
        })
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default drop recurses once per node.
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty Stack");
        }
        write!(f, "TOP")?;
        for item in self.iter() {
            write!(f, " -> {}", item)?;
        }
        write!(f, " -> None")
    }
}
