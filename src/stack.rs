//! Stack: LIFO adapter over [`DoublyLinkedList`].

use crate::error::{Error, Result};
use crate::list::DoublyLinkedList;
use crate::traits::Collection;
use core::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// The last element of `items` ends up on top.
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
        self.list.pop_back()
    }

    pub fn peek(&self) -> Result<&T> {
        self.list.last().map_err(|_| Error::underflow("peek"))
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Pops every element, top first.
    ///
    /// This empties the stack as it goes: elements not yet yielded when the
    /// iterator is dropped stay on the stack.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { stack: self }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

pub struct Drain<'a, T> {
    stack: &'a mut Stack<T>,
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.stack.pop().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<T> Collection for Stack<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.list.len()
    }

    /// Bottom-to-top order, matching construction order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the most recent push is popped first.
    #[test]
    fn lifo_order() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.peek(), Ok(&3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.len(), 1);
    }

    /// Invariant: popping or peeking an empty stack underflows and leaves it empty.
    #[test]
    fn empty_underflows() {
        let mut s: Stack<i32> = Stack::new();
        assert_eq!(s.pop(), Err(Error::underflow("pop")));
        assert_eq!(s.peek(), Err(Error::underflow("peek")));
        assert!(s.is_empty());
    }

    /// Invariant: draining yields top-first and leaves the stack empty.
    #[test]
    fn drain_empties_source() {
        let mut s: Stack<i32> = (1..=4).collect();
        let popped: Vec<i32> = s.drain().collect();
        assert_eq!(popped, vec![4, 3, 2, 1]);
        assert!(s.is_empty());

        let mut s: Stack<i32> = (1..=4).collect();
        let first_two: Vec<i32> = s.drain().take(2).collect();
        assert_eq!(first_two, vec![4, 3]);
        assert_eq!(s.to_vec(), vec![1, 2]);
    }
}
