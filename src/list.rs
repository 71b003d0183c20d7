//! DoublyLinkedList: sentinel-bounded chain of nodes in a slotmap arena.
//!
//! Layout
//! - Two `Terminal` nodes, `head` and `tail`, are created with the list and
//!   never removed. An empty list is `head <-> tail`.
//! - Every `Data` node lies strictly between them, and for every node
//!   `nodes[n.next].prev == n` and `nodes[n.prev].next == n`.
//! - Links are arena keys rather than pointers, so there are no reference
//!   cycles to manage and splices stay O(1).
//!
//! Cursor
//! - The list remembers the last node it visited together with its index
//!   (`-1` for the head sentinel). Indexed access walks from whichever of
//!   the cursor, the head or the tail is closest, so scanning nearby
//!   indices is O(1) amortized. Index `0` and `len - 1` are direct jumps.
//! - The cursor lives in a `Cell` so read-only lookups can still move it.
//!   It never points at a freed node: removals park it on the predecessor.

use crate::error::{Error, Result};
use crate::traits::{Collection, Resizable, Sequence};
use core::cell::Cell;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use slotmap::{DefaultKey, Key, SlotMap};

#[derive(Clone, Debug)]
enum Payload<T> {
    Terminal,
    Data(T),
}

#[derive(Clone, Debug)]
struct Node<T> {
    payload: Payload<T>,
    prev: DefaultKey,
    next: DefaultKey,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Cursor {
    current: DefaultKey,
    offset: isize,
}

pub struct DoublyLinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: DefaultKey,
    tail: DefaultKey,
    len: usize,
    cursor: Cell<Cursor>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let head = nodes.insert(Node {
            payload: Payload::Terminal,
            prev: DefaultKey::null(),
            next: DefaultKey::null(),
        });
        let tail = nodes.insert(Node {
            payload: Payload::Terminal,
            prev: head,
            next: DefaultKey::null(),
        });
        nodes[head].next = tail;
        Self {
            nodes,
            head,
            tail,
            len: 0,
            cursor: Cell::new(Cursor {
                current: head,
                offset: -1,
            }),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn next_of(&self, k: DefaultKey) -> DefaultKey {
        self.nodes[k].next
    }

    #[inline]
    fn prev_of(&self, k: DefaultKey) -> DefaultKey {
        self.nodes[k].prev
    }

    fn value(&self, k: DefaultKey) -> &T {
        match &self.nodes[k].payload {
            Payload::Data(v) => v,
            Payload::Terminal => unreachable!("seek landed on a sentinel"),
        }
    }

    fn value_mut(&mut self, k: DefaultKey) -> &mut T {
        match &mut self.nodes[k].payload {
            Payload::Data(v) => v,
            Payload::Terminal => unreachable!("seek landed on a sentinel"),
        }
    }

    fn park(&self, current: DefaultKey, offset: isize) {
        self.cursor.set(Cursor { current, offset });
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::out_of_range(index, self.len))
        }
    }

    /// Returns the node at `index` (which must be `< len`) and parks the
    /// cursor there.
    fn seek_to(&self, index: usize) -> DefaultKey {
        debug_assert!(index < self.len);
        let key = if index == 0 {
            self.next_of(self.head)
        } else if index == self.len - 1 {
            self.prev_of(self.tail)
        } else {
            let target = index as isize;
            let cur = self.cursor.get();
            let from_cursor = (cur.offset - target).unsigned_abs();
            let from_head = index + 1;
            let from_tail = self.len - index;
            let (mut k, mut at) = if from_cursor <= from_head && from_cursor <= from_tail {
                (cur.current, cur.offset)
            } else if from_head <= from_tail {
                (self.head, -1)
            } else {
                (self.tail, self.len as isize)
            };
            while at < target {
                k = self.next_of(k);
                at += 1;
            }
            while at > target {
                k = self.prev_of(k);
                at -= 1;
            }
            k
        };
        self.park(key, index as isize);
        key
    }

    /// Splices a new data node between adjacent nodes `a` and `b`.
    fn link_between(&mut self, a: DefaultKey, b: DefaultKey, value: T) -> DefaultKey {
        debug_assert!(self.nodes[a].next == b && self.nodes[b].prev == a);
        let n = self.nodes.insert(Node {
            payload: Payload::Data(value),
            prev: a,
            next: b,
        });
        self.nodes[a].next = n;
        self.nodes[b].prev = n;
        self.len += 1;
        n
    }

    /// Unlinks and frees data node `n`, which sits at `index`. The cursor is
    /// parked on the predecessor.
    fn unlink(&mut self, n: DefaultKey, index: usize) -> T {
        let node = match self.nodes.remove(n) {
            Some(node) => node,
            None => unreachable!("unlinking a freed node"),
        };
        debug_assert!(self.nodes[node.prev].next == n && self.nodes[node.next].prev == n);
        self.nodes[node.prev].next = node.next;
        self.nodes[node.next].prev = node.prev;
        self.len -= 1;
        self.park(node.prev, index as isize - 1);
        match node.payload {
            Payload::Data(v) => v,
            Payload::Terminal => unreachable!("unlinked a sentinel"),
        }
    }

    pub fn push_back(&mut self, value: T) {
        let n = self.link_between(self.prev_of(self.tail), self.tail, value);
        self.park(n, self.len as isize - 1);
    }

    pub fn push_front(&mut self, value: T) {
        let n = self.link_between(self.head, self.next_of(self.head), value);
        self.park(n, 0);
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("pop"));
        }
        let n = self.prev_of(self.tail);
        Ok(self.unlink(n, self.len - 1))
    }

    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("shift"));
        }
        let n = self.next_of(self.head);
        Ok(self.unlink(n, 0))
    }

    pub fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::underflow("first"));
        }
        Ok(self.value(self.seek_to(0)))
    }

    pub fn last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::underflow("last"));
        }
        Ok(self.value(self.seek_to(self.len - 1)))
    }

    /// Value at `index`, reached by the shortest walk from the cursor, the
    /// head or the tail.
    pub fn seek(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(self.value(self.seek_to(index)))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.seek(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let k = self.seek_to(index);
        Ok(self.value_mut(k))
    }

    /// Overwrites `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Inserts `value` so it ends up at `index`, before the current occupant.
    pub fn insert_before(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        let n = self.seek_to(index);
        let m = self.link_between(self.prev_of(n), n, value);
        self.park(m, index as isize);
        Ok(())
    }

    /// Inserts `value` so it ends up at `index + 1`.
    pub fn insert_after(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        let n = self.seek_to(index);
        let m = self.link_between(n, self.next_of(n), value);
        self.park(m, index as isize + 1);
        Ok(())
    }

    /// Inserts `values` in order starting at `index`; `index == len` appends.
    pub fn insert<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        let at_end = index == self.len;
        for (offset, value) in values.into_iter().enumerate() {
            let at = index + offset;
            if at_end {
                self.push_back(value);
            } else {
                // `at < len` holds: each insert grows `len` by one.
                let n = self.seek_to(at);
                let m = self.link_between(self.prev_of(n), n, value);
                self.park(m, at as isize);
            }
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let n = self.seek_to(index);
        Ok(self.unlink(n, index))
    }

    pub fn clear(&mut self) {
        self.nodes.retain(|_, node| matches!(node.payload, Payload::Terminal));
        let (head, tail) = (self.head, self.tail);
        self.nodes[head].next = tail;
        self.nodes[tail].prev = head;
        self.len = 0;
        self.park(head, -1);
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Copy of every element after the first.
    pub fn tail(&self) -> Result<Self>
    where
        T: Clone,
    {
        if self.is_empty() {
            return Err(Error::underflow("tail"));
        }
        Ok(self.iter().skip(1).cloned().collect())
    }

    /// Walks head to tail. Does not move the cursor.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.next_of(self.head),
            back: self.prev_of(self.tail),
            remaining: self.len,
        }
    }

    /// Walks tail to head. Does not move the cursor.
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Full structural check; panics on the first broken link.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.nodes.len(), self.len + 2, "arena holds len + 2 nodes");
        assert!(matches!(self.nodes[self.head].payload, Payload::Terminal));
        assert!(matches!(self.nodes[self.tail].payload, Payload::Terminal));
        let mut forward = 0;
        let mut k = self.head;
        while k != self.tail {
            let n = self.next_of(k);
            assert_eq!(self.prev_of(n), k, "next.prev == self");
            if n != self.tail {
                assert!(matches!(self.nodes[n].payload, Payload::Data(_)));
                forward += 1;
            }
            k = n;
        }
        assert_eq!(forward, self.len);
        let mut backward = 0;
        let mut k = self.tail;
        while k != self.head {
            let p = self.prev_of(k);
            assert_eq!(self.next_of(p), k, "prev.next == self");
            if p != self.head {
                backward += 1;
            }
            k = p;
        }
        assert_eq!(backward, self.len);
        let cur = self.cursor.get();
        assert!(self.nodes.contains_key(cur.current), "cursor on a live node");
        assert_eq!(cur.offset == -1, cur.current == self.head);
        if cur.offset >= 0 {
            let mut k = self.head;
            for _ in 0..=cur.offset {
                k = self.next_of(k);
            }
            assert_eq!(k, cur.current, "cursor offset matches its node");
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    /// The arena is cloned slot for slot, so keys stay valid in the copy.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            cursor: Cell::new(Cursor {
                current: self.head,
                offset: -1,
            }),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

/// Indexing seeks like [`DoublyLinkedList::get`] and panics when
/// `index >= len`.
impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match self.seek(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: DefaultKey,
    back: DefaultKey,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let k = self.front;
        self.front = self.list.next_of(k);
        self.remaining -= 1;
        Some(self.list.value(k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let k = self.back;
        self.back = self.list.prev_of(k);
        self.remaining -= 1;
        Some(self.list.value(k))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator; unlinks from the front.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> Collection for DoublyLinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Sequence for DoublyLinkedList<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.seek(index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        DoublyLinkedList::set(self, index, value).map(drop)
    }

    fn first(&self) -> Result<&T> {
        DoublyLinkedList::first(self)
    }

    fn last(&self) -> Result<&T> {
        DoublyLinkedList::last(self)
    }

    fn push(&mut self, value: T) -> Result<()> {
        self.push_back(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.pop_back()
    }

    fn shift(&mut self) -> Result<T> {
        self.pop_front()
    }

    fn unshift(&mut self, value: T) -> Result<()> {
        self.push_front(value);
        Ok(())
    }

    fn insert<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        DoublyLinkedList::insert(self, index, values)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        DoublyLinkedList::remove(self, index)
    }

    fn clear(&mut self) -> Result<()> {
        DoublyLinkedList::clear(self);
        Ok(())
    }
}

impl<T> Resizable for DoublyLinkedList<T> {
    /// Data nodes the arena can hold without reallocating.
    fn capacity(&self) -> usize {
        self.nodes.capacity().saturating_sub(2)
    }

    fn allocate(&mut self, capacity: usize) {
        self.nodes.reserve(capacity.saturating_sub(self.len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(l: &DoublyLinkedList<i32>) -> Vec<i32> {
        l.iter().copied().collect()
    }

    /// Invariant: push/pop at both ends keep order and the links consistent.
    #[test]
    fn push_and_pop_both_ends() {
        let mut l = DoublyLinkedList::new();
        l.push_back(1);
        l.push_back(2);
        l.push_back(3);
        l.push_front(0);
        l.check_invariants();
        assert_eq!(contents(&l), vec![0, 1, 2, 3]);
        assert_eq!(l.pop_front(), Ok(0));
        assert_eq!(l.pop_back(), Ok(3));
        l.check_invariants();
        assert_eq!(contents(&l), vec![1, 2]);
    }

    /// Invariant: popping an empty list underflows; sentinels stay linked.
    #[test]
    fn empty_underflows() {
        let mut l: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert!(matches!(l.pop_back(), Err(Error::Underflow { .. })));
        assert!(matches!(l.pop_front(), Err(Error::Underflow { .. })));
        assert!(matches!(l.first(), Err(Error::Underflow { .. })));
        assert!(matches!(l.last(), Err(Error::Underflow { .. })));
        assert!(matches!(l.tail(), Err(Error::Underflow { .. })));
        l.check_invariants();
        assert!(l.is_empty());
    }

    /// Invariant: every index reaches the right value whatever the cursor position.
    #[test]
    fn seek_from_any_cursor() {
        let l: DoublyLinkedList<i32> = (0..20).collect();
        for i in [10usize, 11, 3, 17, 0, 19, 9, 1, 18, 5, 5] {
            assert_eq!(l.seek(i), Ok(&(i as i32)));
            let cur = l.cursor.get();
            assert_eq!(cur.offset, i as isize);
        }
        for i in (0..20).rev() {
            assert_eq!(l.get(i), Ok(&(i as i32)));
        }
        assert_eq!(l.get(20), Err(Error::out_of_range(20, 20)));
        l.check_invariants();
    }

    /// Invariant: indexed insert/remove splice at the right place.
    #[test]
    fn insert_and_remove() {
        let mut l = DoublyLinkedList::from_vec(vec![1, 2, 3, 4, 7]);
        l.insert(4, [5, 6]).unwrap();
        assert_eq!(contents(&l), vec![1, 2, 3, 4, 5, 6, 7]);
        l.insert(7, [8, 9]).unwrap();
        assert_eq!(contents(&l), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(l.insert(10, [0]), Err(Error::out_of_range(10, 9)));
        assert_eq!(l.remove(1), Ok(2));
        assert_eq!(l.remove(7), Ok(9));
        assert_eq!(l.remove(7), Err(Error::out_of_range(7, 7)));
        l.check_invariants();
        assert_eq!(contents(&l), vec![1, 3, 4, 5, 6, 7, 8]);

        l.insert_before(0, 0).unwrap();
        l.insert_after(7, 9).unwrap();
        l.insert_after(0, 10).unwrap();
        assert_eq!(contents(&l), vec![0, 10, 1, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(l.insert_before(10, 0), Err(Error::out_of_range(10, 10)));
        l.check_invariants();
    }

    /// Invariant: removing the node under the cursor leaves the cursor on a live node.
    #[test]
    fn cursor_survives_removal() {
        let mut l: DoublyLinkedList<i32> = (0..6).collect();
        assert_eq!(l.get(3), Ok(&3));
        assert_eq!(l.remove(3), Ok(3));
        l.check_invariants();
        assert_eq!(l.get(3), Ok(&4));
        assert_eq!(l.pop_back(), Ok(5));
        l.check_invariants();
        assert_eq!(l.get(2), Ok(&2));
        assert_eq!(l.pop_front(), Ok(0));
        l.check_invariants();
        assert_eq!(contents(&l), vec![1, 2, 4]);
    }

    /// Invariant: walking or snapshotting the list leaves the cursor where it was.
    #[test]
    fn walks_leave_cursor_in_place() {
        let l: DoublyLinkedList<i32> = (0..8).collect();
        assert_eq!(l.get(3), Ok(&3));
        let parked = l.cursor.get();
        assert_eq!(parked.offset, 3);
        assert_eq!(contents(&l), (0..8).collect::<Vec<_>>());
        assert_eq!(l.iter_rev().count(), 8);
        assert_eq!(Collection::to_vec(&l), (0..8).collect::<Vec<_>>());
        assert_eq!(format!("{l:?}"), "[0, 1, 2, 3, 4, 5, 6, 7]");
        assert_eq!(l.cursor.get(), parked);
        l.check_invariants();
    }

    /// Invariant: reverse iteration is the exact reverse of forward iteration.
    #[test]
    fn reverse_walk() {
        let l: DoublyLinkedList<i32> = (0..7).collect();
        let fwd: Vec<i32> = l.iter().copied().collect();
        let mut back: Vec<i32> = l.iter_rev().copied().collect();
        back.reverse();
        assert_eq!(fwd, back);
        let mut it = l.iter();
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.len(), 5);
    }

    /// Invariant: `set` replaces in place and `tail` copies all but the first element.
    #[test]
    fn set_and_tail() {
        let mut l = DoublyLinkedList::from_vec(vec![1, 2, 3]);
        assert_eq!(l.set(1, 20), Ok(2));
        assert_eq!(l.set(3, 0), Err(Error::out_of_range(3, 3)));
        let t = l.tail().unwrap();
        assert_eq!(contents(&t), vec![20, 3]);
        assert_eq!(contents(&l), vec![1, 20, 3]);
        assert!(l.contains(&20));
        assert_eq!(l.index_of(&3), Some(2));
        assert_eq!(l.index_of(&4), None);
    }

    /// Invariant: a clone shares no nodes with its source.
    #[test]
    fn clone_is_independent() {
        let mut a = DoublyLinkedList::from_vec(vec![1, 2, 3]);
        let _ = a.get(2);
        let b = a.clone();
        b.check_invariants();
        a.push_back(4);
        a.set(0, 10).unwrap();
        assert_eq!(contents(&a), vec![10, 2, 3, 4]);
        assert_eq!(contents(&b), vec![1, 2, 3]);
    }

    /// Invariant: `clear` frees every data node and relinks the sentinels.
    #[test]
    fn clear_relinks_sentinels() {
        let mut l: DoublyLinkedList<i32> = (0..10).collect();
        let _ = l.get(5);
        l.clear();
        l.check_invariants();
        assert!(l.is_empty());
        l.push_back(1);
        assert_eq!(contents(&l), vec![1]);
        l.check_invariants();
    }

    /// Invariant: `allocate` reserves arena room for at least that many elements.
    #[test]
    fn allocate_reserves_arena() {
        let mut l: DoublyLinkedList<u8> = DoublyLinkedList::new();
        l.allocate(100);
        assert!(l.capacity() >= 100);
    }
}
