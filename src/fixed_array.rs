//! FixedArray: the general-purpose growable array.
//!
//! Uses [`CapacityPolicy::arrayed`] so large arrays over-allocate by half
//! rather than doubling.

use crate::buffer::GrowableBuffer;
use crate::capacity::CapacityPolicy;
use crate::error::Result;
use crate::traits::{Collection, Resizable, Sequence};
use core::fmt;
use core::ops::{Index, IndexMut};

#[derive(Clone, PartialEq, Eq)]
pub struct FixedArray<T> {
    buf: GrowableBuffer<T>,
}

impl<T> FixedArray<T> {
    pub fn new() -> Self {
        Self::with_policy(CapacityPolicy::arrayed())
    }

    pub fn with_policy(policy: CapacityPolicy) -> Self {
        Self {
            buf: GrowableBuffer::with_policy(policy),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            buf: GrowableBuffer::from_vec_with_policy(items, CapacityPolicy::arrayed()),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.buf.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.buf.get_mut(index)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.buf.set(index, value).map(drop)
    }

    pub fn first(&self) -> Result<&T> {
        self.buf.first()
    }

    pub fn last(&self) -> Result<&T> {
        self.buf.last()
    }

    pub fn push(&mut self, value: T) {
        self.buf.push(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.buf.pop()
    }

    pub fn shift(&mut self) -> Result<T> {
        self.buf.shift()
    }

    pub fn unshift<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.buf.unshift(values);
    }

    pub fn insert<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.buf.insert(index, values)
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.buf.remove(index)
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.buf.contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.buf.index_of(value)
    }

    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }
}

impl<T> Default for FixedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.buf, f)
    }
}

impl<T> Index<usize> for FixedArray<T> {
    type Output = T;

    /// Panics when `index >= len`; use [`FixedArray::get`] for a checked lookup.
    fn index(&self, index: usize) -> &T {
        &self.buf.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for FixedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf.as_mut_slice()[index]
    }
}

impl<T> From<Vec<T>> for FixedArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for FixedArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<T> IntoIterator for FixedArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> Collection for FixedArray<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.buf.len()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.as_slice().to_vec()
    }
}

impl<T> Sequence for FixedArray<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.buf.get(index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        FixedArray::set(self, index, value)
    }

    fn first(&self) -> Result<&T> {
        self.buf.first()
    }

    fn last(&self) -> Result<&T> {
        self.buf.last()
    }

    fn push(&mut self, value: T) -> Result<()> {
        self.buf.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.buf.pop()
    }

    fn shift(&mut self) -> Result<T> {
        self.buf.shift()
    }

    fn unshift(&mut self, value: T) -> Result<()> {
        self.buf.unshift([value]);
        Ok(())
    }

    fn insert<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.buf.insert(index, values)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.buf.remove(index)
    }

    fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        Ok(())
    }
}

impl<T> Resizable for FixedArray<T> {
    fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    fn allocate(&mut self, capacity: usize) {
        self.buf.allocate(capacity);
    }
}
