//! PriorityQueue: array-backed binary max-heap with FIFO tie-breaking.
//!
//! Node `k` has children `2k + 1` and `2k + 2` and parent `(k - 1) / 2`.
//! Nodes compare by priority first; among equal priorities the one pushed
//! earlier (smaller stamp) compares greater, so it surfaces first.

use crate::buffer::GrowableBuffer;
use crate::capacity::CapacityPolicy;
use crate::error::{Error, Result};
use crate::traits::{Collection, Resizable};
use core::cmp::Ordering;
use core::fmt;

#[derive(Clone, Debug)]
struct PriorityNode<T> {
    value: T,
    priority: i64,
    stamp: u64,
}

#[inline]
fn compare<T>(a: &PriorityNode<T>, b: &PriorityNode<T>) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| b.stamp.cmp(&a.stamp))
}

#[derive(Clone)]
pub struct PriorityQueue<T> {
    heap: GrowableBuffer<PriorityNode<T>>,
    next_stamp: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: GrowableBuffer::with_policy(CapacityPolicy::squared()),
            next_stamp: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn push(&mut self, value: T, priority: i64) {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.heap.push(PriorityNode {
            value,
            priority,
            stamp,
        });
        self.sift_up(self.heap.len() - 1);
    }

    pub fn peek(&self) -> Result<&T> {
        self.root().map(|n| &n.value)
    }

    /// Priority of the element `peek` would return.
    pub fn peek_priority(&self) -> Result<i64> {
        self.root().map(|n| n.priority)
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("pop"));
        }
        // The last leaf becomes the new root.
        let leaf = self.heap.pop()?;
        if self.heap.is_empty() {
            return Ok(leaf.value);
        }
        let root = self.heap.set(0, leaf)?;
        self.sift_down(0);
        Ok(root.value)
    }

    /// Drops everything and restarts the insertion stamps.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_stamp = 0;
    }

    /// Pops every element in priority order.
    ///
    /// This empties the queue as it goes; use [`PriorityQueue::to_vec`] for a
    /// non-destructive snapshot.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain().collect()
    }

    fn root(&self) -> Result<&PriorityNode<T>> {
        self.heap.first().map_err(|_| Error::underflow("peek"))
    }

    #[inline]
    fn cmp_at(&self, a: usize, b: usize) -> Ordering {
        let nodes = self.heap.as_slice();
        compare(&nodes[a], &nodes[b])
    }

    fn sift_up(&mut self, mut leaf: usize) {
        while leaf > 0 {
            let parent = (leaf - 1) / 2;
            // Done once the parent outranks the leaf.
            if self.cmp_at(leaf, parent) == Ordering::Less {
                break;
            }
            self.heap.swap(parent, leaf);
            leaf = parent;
        }
    }

    fn largest_child(&self, parent: usize) -> usize {
        let left = 2 * parent + 1;
        let right = left + 1;
        if right < self.heap.len() && self.cmp_at(left, right) == Ordering::Less {
            right
        } else {
            left
        }
    }

    fn sift_down(&mut self, node: usize) {
        let last = self.heap.len() / 2;
        let mut parent = node;
        while parent < last {
            let child = self.largest_child(parent);
            if self.cmp_at(parent, child) == Ordering::Greater {
                break;
            }
            self.heap.swap(parent, child);
            parent = child;
        }
    }

    #[cfg(test)]
    pub(crate) fn check_heap(&self) {
        let n = self.heap.len();
        for k in 0..n {
            for child in [2 * k + 1, 2 * k + 2] {
                if child < n {
                    assert_ne!(
                        self.cmp_at(k, child),
                        Ordering::Less,
                        "heap order broken between {k} and {child}"
                    );
                }
            }
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.heap.iter().map(|n| (&n.value, n.priority)))
            .finish()
    }
}

impl<T> FromIterator<(T, i64)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, i64)>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

impl<T> Extend<(T, i64)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, i64)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.push(value, priority);
        }
    }
}

pub struct Drain<'a, T> {
    queue: &'a mut PriorityQueue<T>,
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

/// Owning iterator in priority order.
pub struct IntoIter<T> {
    queue: PriorityQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.queue.pop().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<T> Collection for PriorityQueue<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.heap.len()
    }

    /// Values in pop order, leaving the queue as it was.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.clone().into_sorted_vec()
    }
}

impl<T> Resizable for PriorityQueue<T> {
    fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    fn allocate(&mut self, capacity: usize) {
        self.heap.allocate(capacity);
    }
}
