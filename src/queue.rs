//! Queue: FIFO adapter over [`DoublyLinkedList`].

use crate::error::{Error, Result};
use crate::list::DoublyLinkedList;
use crate::traits::Collection;
use core::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// The first element of `items` is at the front.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            list: DoublyLinkedList::from_vec(items),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.list.pop_front().map_err(|_| Error::underflow("pop"))
    }

    pub fn peek(&self) -> Result<&T> {
        self.list.first().map_err(|_| Error::underflow("peek"))
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Pops every element, front first.
    ///
    /// This empties the queue as it goes: elements not yet yielded when the
    /// iterator is dropped stay queued.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

pub struct Drain<'a, T> {
    queue: &'a mut Queue<T>,
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.queue.pop().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<T> Collection for Queue<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.list.len()
    }

    /// Front-to-back order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }
}
