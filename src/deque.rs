//! Deque: ring buffer with power-of-two capacity.
//!
//! Logical index `i` lives in slot `(head + i) & (capacity - 1)`. Slots
//! outside `[head, head + len)` are always `None`.

use crate::capacity::{CapacityPolicy, Rounding};
use crate::error::{Error, Result};
use crate::traits::{Collection, Resizable, Sequence};
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

#[derive(Clone)]
pub struct Deque<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
    policy: CapacityPolicy,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self::build(CapacityPolicy::squared())
    }

    /// Uses a custom policy, which must round to powers of two.
    pub fn with_policy(policy: CapacityPolicy) -> Result<Self> {
        if policy.rounding() != Rounding::PowerOfTwo {
            return Err(Error::InvalidArgument {
                parameter: "policy",
                reason: "deque capacity must be a power of two",
            });
        }
        Ok(Self::build(policy))
    }

    fn build(policy: CapacityPolicy) -> Self {
        Self {
            slots: vacant(policy.initial(0)),
            head: 0,
            len: 0,
            policy,
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        let policy = CapacityPolicy::squared();
        let capacity = policy.initial(items.len());
        let len = items.len();
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len,
            policy,
        }
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
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn slot(&self, index: usize) -> usize {
        (self.head + index) & (self.slots.len() - 1)
    }

    fn live(&self, slot: usize) -> &T {
        match &self.slots[slot] {
            Some(v) => v,
            None => unreachable!("deque slot {slot} is vacant inside the live window"),
        }
    }

    fn live_mut(&mut self, slot: usize) -> &mut T {
        match &mut self.slots[slot] {
            Some(v) => v,
            None => unreachable!("deque slot {slot} is vacant inside the live window"),
        }
    }

    fn take(&mut self, slot: usize) -> T {
        match self.slots[slot].take() {
            Some(v) => v,
            None => unreachable!("deque slot {slot} is vacant inside the live window"),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::out_of_range(index, self.len))
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(self.live(self.slot(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let s = self.slot(index);
        Ok(self.live_mut(s))
    }

    /// Overwrites `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    pub fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::underflow("first"));
        }
        Ok(self.live(self.head))
    }

    pub fn last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::underflow("last"));
        }
        Ok(self.live(self.slot(self.len - 1)))
    }

    pub fn push_back(&mut self, value: T) {
        self.reserve_one();
        let s = self.slot(self.len);
        self.slots[s] = Some(value);
        self.len += 1;
        self.check_capacity();
    }

    pub fn push_front(&mut self, value: T) {
        self.reserve_one();
        let mask = self.slots.len() - 1;
        self.head = self.head.wrapping_sub(1) & mask;
        self.slots[self.head] = Some(value);
        self.len += 1;
        self.check_capacity();
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("pop"));
        }
        let s = self.slot(self.len - 1);
        let value = self.take(s);
        self.len -= 1;
        self.check_capacity();
        Ok(value)
    }

    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("shift"));
        }
        let value = self.take(self.head);
        self.head = self.slot(1);
        self.len -= 1;
        self.check_capacity();
        Ok(value)
    }

    /// Inserts `values` in order starting at `index`; `index == len` appends.
    pub fn insert<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        for (offset, value) in values.into_iter().enumerate() {
            self.insert_one(index + offset, value);
        }
        Ok(())
    }

    fn insert_one(&mut self, index: usize, value: T) {
        self.reserve_one();
        if index < self.len / 2 {
            // Open a gap by moving the front part one slot left.
            let mask = self.slots.len() - 1;
            self.head = self.head.wrapping_sub(1) & mask;
            for k in 0..index {
                let (to, from) = (self.slot(k), self.slot(k + 1));
                self.slots[to] = self.slots[from].take();
            }
        } else {
            for k in (index..self.len).rev() {
                let (to, from) = (self.slot(k + 1), self.slot(k));
                self.slots[to] = self.slots[from].take();
            }
        }
        let s = self.slot(index);
        debug_assert!(self.slots[s].is_none());
        self.slots[s] = Some(value);
        self.len += 1;
        self.check_capacity();
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let s = self.slot(index);
        let value = self.take(s);
        if index < self.len / 2 {
            for k in (0..index).rev() {
                let (to, from) = (self.slot(k + 1), self.slot(k));
                self.slots[to] = self.slots[from].take();
            }
            self.head = self.slot(1);
        } else {
            for k in index..self.len - 1 {
                let (to, from) = (self.slot(k), self.slot(k + 1));
                self.slots[to] = self.slots[from].take();
            }
        }
        self.len -= 1;
        self.check_capacity();
        Ok(value)
    }

    /// Rotates by `r` positions: positive moves front elements to the back,
    /// negative moves back elements to the front. `r` is taken modulo `len`.
    pub fn rotate(&mut self, r: isize) {
        let n = self.len;
        if n < 2 {
            return;
        }
        let steps = normalize_rotations(r, n);
        if n == self.slots.len() {
            self.head = self.slot(steps);
            return;
        }
        for _ in 0..steps {
            let front = self.head;
            let value = self.slots[front].take();
            self.head = self.slot(1);
            let back = self.slot(n - 1);
            self.slots[back] = value;
        }
    }

    /// Drops every element and resets capacity to the policy minimum.
    pub fn clear(&mut self) {
        self.slots = vacant(self.policy.initial(0));
        self.head = 0;
        self.len = 0;
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    fn reserve_one(&mut self) {
        if self.len == self.slots.len() {
            let target = self.policy.adjust(self.len + 1, self.slots.len());
            self.relocate(target);
        }
    }

    fn check_capacity(&mut self) {
        let target = self.policy.adjust(self.len, self.slots.len());
        if target != self.slots.len() {
            self.relocate(target);
        }
    }

    /// Moves the live window into a fresh slot array of `capacity` slots,
    /// starting at slot 0.
    fn relocate(&mut self, capacity: usize) {
        assert!(capacity.is_power_of_two() && capacity >= self.len);
        let mut slots = vacant(capacity);
        for (i, dst) in slots.iter_mut().enumerate().take(self.len) {
            let s = self.slot(i);
            *dst = self.slots[s].take();
        }
        self.slots = slots;
        self.head = 0;
    }
}

fn vacant<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

/// Maps `r` onto `[0, n)`, turning a right rotation into the equivalent left one.
fn normalize_rotations(r: isize, n: usize) -> usize {
    let m = r.unsigned_abs() % n;
    if r < 0 && m != 0 {
        n - m
    } else {
        m
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    /// Panics when `index >= len`; use [`Deque::get`] for a checked lookup.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

/// Borrowing iterator in front-to-back order.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let v = self.deque.live(self.deque.slot(self.front));
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.deque.live(self.deque.slot(self.back)))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator; pops from the front.
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<T> Collection for Deque<T> {
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

impl<T> Sequence for Deque<T> {
    fn get(&self, index: usize) -> Result<&T> {
        Deque::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        Deque::set(self, index, value).map(drop)
    }

    fn first(&self) -> Result<&T> {
        Deque::first(self)
    }

    fn last(&self) -> Result<&T> {
        Deque::last(self)
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
        Deque::insert(self, index, values)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        Deque::remove(self, index)
    }

    fn clear(&mut self) -> Result<()> {
        Deque::clear(self);
        Ok(())
    }
}

impl<T> Resizable for Deque<T> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn allocate(&mut self, capacity: usize) {
        let target = self.policy.allocate(self.slots.len(), capacity);
        if target != self.slots.len() {
            self.relocate(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::MIN_CAPACITY;

    fn contents(d: &Deque<i32>) -> Vec<i32> {
        d.iter().copied().collect()
    }

    /// Invariant: both ends are O(1) and keep relative order.
    #[test]
    fn deque_ends() {
        let mut d = Deque::new();
        d.push_back(1);
        d.push_back(2);
        d.push_back(3);
        d.push_front(0);
        assert_eq!(contents(&d), vec![0, 1, 2, 3]);
        assert_eq!(d.pop_front(), Ok(0));
        assert_eq!(d.pop_back(), Ok(3));
        assert_eq!(contents(&d), vec![1, 2]);
    }

    /// Invariant: popping an empty deque underflows and leaves it empty.
    #[test]
    fn pop_empty_underflows() {
        let mut d: Deque<i32> = Deque::new();
        assert!(matches!(d.pop_back(), Err(Error::Underflow { .. })));
        assert!(matches!(d.pop_front(), Err(Error::Underflow { .. })));
        assert!(d.first().is_err());
        assert!(d.is_empty());
        assert_eq!(d.capacity(), MIN_CAPACITY);
    }

    /// Invariant: capacity stays a power of two and strictly above the length.
    #[test]
    fn capacity_is_power_of_two() {
        let mut d = Deque::new();
        for i in 0..100 {
            if i % 2 == 0 {
                d.push_back(i);
            } else {
                d.push_front(i);
            }
            assert!(d.capacity().is_power_of_two());
            assert!(d.capacity() > d.len());
        }
        while d.pop_front().is_ok() {
            assert!(d.capacity().is_power_of_two());
            assert!(d.capacity() >= MIN_CAPACITY);
        }
        assert_eq!(d.capacity(), MIN_CAPACITY);
    }

    /// Invariant: wrap-around indexing matches logical order.
    #[test]
    fn wraps_around() {
        let mut d = Deque::new();
        for i in 0..5 {
            d.push_back(i);
        }
        for _ in 0..3 {
            d.pop_front().unwrap();
        }
        for i in 5..9 {
            d.push_back(i);
        }
        d.push_front(2);
        assert_eq!(contents(&d), vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(d.get(0), Ok(&2));
        assert_eq!(d.get(6), Ok(&8));
        assert_eq!(d.get(7), Err(Error::out_of_range(7, 7)));
        assert_eq!(d.iter().rev().copied().collect::<Vec<_>>(), vec![8, 7, 6, 5, 4, 3, 2]);
    }

    /// Invariant: indexed insert/remove shift from whichever side is shorter.
    #[test]
    fn insert_and_remove_in_middle() {
        let mut d = Deque::from_vec(vec![1, 2, 3, 4, 7]);
        d.insert(4, [5, 6]).unwrap();
        assert_eq!(contents(&d), vec![1, 2, 3, 4, 5, 6, 7]);
        d.insert(1, [10]).unwrap();
        assert_eq!(contents(&d), vec![1, 10, 2, 3, 4, 5, 6, 7]);
        assert_eq!(d.remove(1), Ok(10));
        assert_eq!(d.remove(5), Ok(6));
        assert_eq!(contents(&d), vec![1, 2, 3, 4, 5, 7]);
        d.insert(6, [8]).unwrap();
        d.insert(0, [0]).unwrap();
        assert_eq!(contents(&d), vec![0, 1, 2, 3, 4, 5, 7, 8]);
        assert_eq!(d.insert(10, [1]), Err(Error::out_of_range(10, 8)));
        assert_eq!(d.remove(8), Err(Error::out_of_range(8, 8)));
    }

    /// Invariant: rotation is taken modulo the length in either direction.
    #[test]
    fn rotate_both_directions() {
        let mut d = Deque::from_vec(vec![1, 2, 3, 4, 5]);
        d.rotate(2);
        assert_eq!(contents(&d), vec![3, 4, 5, 1, 2]);
        d.rotate(-2);
        assert_eq!(contents(&d), vec![1, 2, 3, 4, 5]);
        d.rotate(7);
        assert_eq!(contents(&d), vec![3, 4, 5, 1, 2]);
        d.rotate(-5);
        assert_eq!(contents(&d), vec![3, 4, 5, 1, 2]);
        assert_eq!(normalize_rotations(-1, 5), 4);
    }

    /// Invariant: a custom policy must keep capacities at powers of two.
    #[test]
    fn with_policy_requires_squared() {
        assert!(matches!(
            Deque::<u8>::with_policy(CapacityPolicy::standard()),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(Deque::<u8>::with_policy(CapacityPolicy::squared()).is_ok());
    }

    /// Invariant: a steep decay never relocates the live window into fewer slots.
    #[test]
    fn steep_decay_keeps_elements() {
        use crate::capacity::GrowTrigger;
        let policy =
            CapacityPolicy::new(2.0, 0.1, 0.9, 8, GrowTrigger::AtCapacity, Rounding::PowerOfTwo)
                .unwrap();
        let mut d = Deque::with_policy(policy).unwrap();
        for i in 0..12 {
            d.push_back(i);
            assert!(d.capacity() > d.len());
        }
        assert_eq!(contents(&d), (0..12).collect::<Vec<_>>());
        while d.len() > 3 {
            d.pop_front().unwrap();
            assert!(d.capacity() > d.len());
        }
        assert_eq!(contents(&d), vec![9, 10, 11]);
    }

    /// Invariant: a clone owns its slots; mutating one leaves the other intact.
    #[test]
    fn clone_is_independent() {
        let mut a: Deque<i32> = (1..=4).collect();
        let b = a.clone();
        a.push_front(0);
        a.set(1, 10).unwrap();
        assert_eq!(contents(&a), vec![0, 10, 2, 3, 4]);
        assert_eq!(contents(&b), vec![1, 2, 3, 4]);
    }
}
