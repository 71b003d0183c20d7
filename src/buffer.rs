//! GrowableBuffer: contiguous storage with policy-driven capacity.
//!
//! The buffer tracks its own logical `capacity` separately from the `Vec`
//! it wraps and asks its [`CapacityPolicy`] for a new value after each
//! structural mutation. The physical allocation is reserved or released to
//! follow that value.

use crate::capacity::CapacityPolicy;
use crate::error::{Error, Result};
use crate::traits::{Collection, Resizable};
use core::fmt;

#[derive(Clone)]
pub struct GrowableBuffer<T> {
    items: Vec<T>,
    capacity: usize,
    policy: CapacityPolicy,
}

impl<T> GrowableBuffer<T> {
    pub fn new() -> Self {
        Self::with_policy(CapacityPolicy::standard())
    }

    pub fn with_policy(policy: CapacityPolicy) -> Self {
        Self::from_vec_with_policy(Vec::new(), policy)
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with_policy(items, CapacityPolicy::standard())
    }

    pub fn from_vec_with_policy(mut items: Vec<T>, policy: CapacityPolicy) -> Self {
        let capacity = policy.initial(items.len());
        items.reserve_exact(capacity.saturating_sub(items.len()));
        Self {
            items,
            capacity,
            policy,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    pub fn allocate(&mut self, capacity: usize) {
        let target = self.policy.allocate(self.capacity, capacity);
        self.resize_storage(target);
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.check_capacity();
    }

    pub fn pop(&mut self) -> Result<T> {
        let value = self.items.pop().ok_or(Error::underflow("pop"))?;
        self.check_capacity();
        Ok(value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.items
            .get(index)
            .ok_or(Error::out_of_range(index, len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.items
            .get_mut(index)
            .ok_or(Error::out_of_range(index, len))
    }

    /// Overwrites slot `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    pub fn first(&self) -> Result<&T> {
        self.items.first().ok_or(Error::underflow("first"))
    }

    pub fn last(&self) -> Result<&T> {
        self.items.last().ok_or(Error::underflow("last"))
    }

    /// Inserts `values` in order at `index`, shifting the tail right.
    pub fn insert<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len() {
            return Err(Error::out_of_range(index, self.len()));
        }
        self.items.splice(index..index, values);
        self.check_capacity();
        Ok(())
    }

    /// Removes slot `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(Error::out_of_range(index, self.len()));
        }
        let value = self.items.remove(index);
        self.check_capacity();
        Ok(value)
    }

    pub fn shift(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::underflow("shift"));
        }
        self.remove(0)
    }

    pub fn unshift<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.splice(0..0, values);
        self.check_capacity();
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// Drops every element and resets capacity to the policy minimum.
    pub fn clear(&mut self) {
        self.items.clear();
        let min = self.policy.initial(0);
        self.resize_storage(min);
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|v| v == value)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn check_capacity(&mut self) {
        let target = self.policy.adjust(self.len(), self.capacity);
        if target != self.capacity {
            self.resize_storage(target);
        }
    }

    fn resize_storage(&mut self, target: usize) {
        assert!(target >= self.items.len());
        if target > self.items.capacity() {
            self.items.reserve_exact(target - self.items.len());
        } else {
            self.items.shrink_to(target);
        }
        self.capacity = target;
    }

    #[cfg(test)]
    pub(crate) fn physical_capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for GrowableBuffer<T> {}

impl<T> FromIterator<T> for GrowableBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
        self.check_capacity();
    }
}

impl<T> IntoIterator for GrowableBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Collection for GrowableBuffer<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Resizable for GrowableBuffer<T> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn allocate(&mut self, capacity: usize) {
        GrowableBuffer::allocate(self, capacity)
    }
}
