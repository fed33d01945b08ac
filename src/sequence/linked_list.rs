//! Singly linked list over an index arena.

use std::fmt;

use crate::types::{PrimerError, PrimerResult};

/// A node in the list. `next` is a slot index, not a pointer.
#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    next: Option<usize>,
}

/// Singly linked list with head, tail and length tracking.
///
/// Nodes live in a slot vector and link to each other by index, so each node
/// has exactly one predecessor referring to it and no node is ever shared.
/// Freed slots are reused by later insertions.
#[derive(Clone)]
pub struct LinkedList<T> {
    /// Node storage. `None` marks a free slot.
    slots: Vec<Option<Node<T>>>,
    /// Free slot indices, reused LIFO.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Add a node to the end.
    pub fn append(&mut self, data: T) {
        let idx = self.alloc(data);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.length += 1;
    }

    /// Add a node to the beginning.
    pub fn prepend(&mut self, data: T) {
        let idx = self.alloc(data);
        self.set_next(idx, self.head);
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.length += 1;
    }

    /// Insert a node so that it ends up at position `index`.
    ///
    /// `index` may equal `len()` to append.
    pub fn insert(&mut self, index: usize, data: T) -> PrimerResult<()> {
        if index > self.length {
            return Err(PrimerError::InvalidPosition {
                index,
                len: self.length,
            });
        }
        if index == 0 {
            self.prepend(data);
            return Ok(());
        }
        if index == self.length {
            self.append(data);
            return Ok(());
        }

        let prev = self
            .node_at(index - 1)
            .ok_or(PrimerError::InvalidPosition {
                index,
                len: self.length,
            })?;
        let idx = self.alloc(data);
        self.set_next(idx, self.next_of(prev));
        self.set_next(prev, Some(idx));
        self.length += 1;
        Ok(())
    }

    /// Value at position `index`.
    pub fn lookup(&self, index: usize) -> PrimerResult<&T> {
        let miss = PrimerError::IndexOutOfBounds {
            index,
            len: self.length,
        };
        if index >= self.length {
            return Err(miss);
        }
        self.node_at(index)
            .and_then(|idx| self.data_of(idx))
            .ok_or(miss)
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> PrimerResult<T> {
        let last = self.tail.ok_or(PrimerError::Empty("LinkedList"))?;
        if self.length == 1 {
            self.head = None;
            self.tail = None;
        } else {
            // Singly linked: walk to the node before the tail.
            let prev = self
                .node_at(self.length - 2)
                .ok_or(PrimerError::Empty("LinkedList"))?;
            self.set_next(prev, None);
            self.tail = Some(prev);
        }
        self.length -= 1;
        self.release(last).ok_or(PrimerError::Empty("LinkedList"))
    }

    /// Remove and return the first value.
    pub fn pop_first(&mut self) -> PrimerResult<T> {
        let first = self.head.ok_or(PrimerError::Empty("LinkedList"))?;
        self.head = self.next_of(first);
        self.length -= 1;
        if self.length == 0 {
            self.tail = None;
        }
        self.release(first).ok_or(PrimerError::Empty("LinkedList"))
    }

    /// Reverse the order of the nodes in place.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head;
        self.tail = self.head;
        while let Some(idx) = current {
            let next = self.next_of(idx);
            self.set_next(idx, prev);
            prev = Some(idx);
            current = next;
        }
        self.head = prev;
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn alloc(&mut self, data: T) -> usize {
        let node = Some(Node { data, next: None });
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = node;
                idx
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<T> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node.data)
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx)?.as_ref()
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        self.node(idx)?.next
    }

    fn data_of(&self, idx: usize) -> Option<&T> {
        self.node(idx).map(|node| &node.data)
    }

    fn set_next(&mut self, idx: usize, next: Option<usize>) {
        if let Some(Some(node)) = self.slots.get_mut(idx) {
            node.next = next;
        }
    }

    /// Slot index of the node at `position`.
    fn node_at(&self, position: usize) -> Option<usize> {
        let mut current = self.head;
        for _ in 0..position {
            current = self.next_of(current?);
        }
        current
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Position of the first node holding `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|x| x == value)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Copy the values into a `Vec`, head first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_first().ok()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
