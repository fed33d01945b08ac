//! Index-addressed dynamic array.

use std::fmt;

use crate::types::{PrimerError, PrimerResult};

/// A growable, index-addressed sequence.
///
/// `insert` and `delete` shift every element after the position, so both
/// are O(n). Everything else is O(1) except `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array<T> {
    data: Vec<T>,
}

impl<T> Array<T> {
    /// Create a new, empty array.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> PrimerResult<&T> {
        self.data.get(index).ok_or(PrimerError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Append an element to the end.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> PrimerResult<T> {
        self.data.pop().ok_or(PrimerError::Empty("Array"))
    }

    /// Insert `item` at `index`, shifting later elements right.
    ///
    /// `index` may equal `len()` to append.
    pub fn insert(&mut self, index: usize, item: T) -> PrimerResult<()> {
        if index > self.data.len() {
            return Err(PrimerError::InvalidPosition {
                index,
                len: self.data.len(),
            });
        }
        self.data.insert(index, item);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left.
    pub fn delete(&mut self, index: usize) -> PrimerResult<T> {
        if index >= self.data.len() {
            return Err(PrimerError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(self.data.remove(index))
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: PartialEq> Array<T> {
    /// Index of the first element equal to `item`.
    pub fn search(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|x| x == item)
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
