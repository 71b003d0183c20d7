//! ImmutableArray: a read-only sequence.
//!
//! Transformations (`map`, `filter`, `slice`, `concat`, `sorted_by`) build a
//! new array and never touch the source. Through the [`Sequence`] trait every
//! mutator fails with [`Error::ImmutableViolation`].

use crate::buffer::GrowableBuffer;
use crate::capacity::CapacityPolicy;
use crate::error::{Error, Result};
use crate::traits::{Collection, Sequence};
use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;

#[derive(Clone, PartialEq, Eq)]
pub struct ImmutableArray<T> {
    buf: GrowableBuffer<T>,
}

impl<T> ImmutableArray<T> {
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
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

    pub fn get(&self, index: usize) -> Result<&T> {
        self.buf.get(index)
    }

    pub fn first(&self) -> Result<&T> {
        self.buf.first()
    }

    pub fn last(&self) -> Result<&T> {
        self.buf.last()
    }

    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Applies `f(element, index)` to every element.
    pub fn map<U, F>(&self, mut f: F) -> ImmutableArray<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        ImmutableArray::from_vec(self.iter().enumerate().map(|(i, v)| f(v, i)).collect())
    }

    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Self::from_vec(self.iter().filter(|v| keep(v)).cloned().collect())
    }

    /// Elements in `[begin, end)`; `end` of `None` means the array length.
    /// Both bounds are clamped to the length.
    pub fn slice(&self, begin: usize, end: Option<usize>) -> Self
    where
        T: Clone,
    {
        let len = self.len();
        let end = end.unwrap_or(len).min(len);
        let begin = begin.min(end);
        Self::from_vec(self.as_slice()[begin..end].to_vec())
    }

    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend_from_slice(self.as_slice());
        items.extend_from_slice(other.as_slice());
        Self::from_vec(items)
    }

    /// Stable sort into a new array.
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.as_slice().to_vec();
        items.sort_by(compare);
        Self::from_vec(items)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.buf, f)
    }
}

impl<T> Index<usize> for ImmutableArray<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.buf.as_slice()[index]
    }
}

impl<T> From<Vec<T>> for ImmutableArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for ImmutableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ImmutableArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> IntoIterator for ImmutableArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<T> Collection for ImmutableArray<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.buf.len()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

fn immutable<R>(op: &'static str) -> Result<R> {
    Err(Error::ImmutableViolation { op })
}

impl<T> Sequence for ImmutableArray<T> {
    fn get(&self, index: usize) -> Result<&T> {
        self.buf.get(index)
    }

    fn set(&mut self, _index: usize, _value: T) -> Result<()> {
        immutable("set")
    }

    fn first(&self) -> Result<&T> {
        self.buf.first()
    }

    fn last(&self) -> Result<&T> {
        self.buf.last()
    }

    fn push(&mut self, _value: T) -> Result<()> {
        immutable("push")
    }

    fn pop(&mut self) -> Result<T> {
        immutable("pop")
    }

    fn shift(&mut self) -> Result<T> {
        immutable("shift")
    }

    fn unshift(&mut self, _value: T) -> Result<()> {
        immutable("unshift")
    }

    fn insert<I>(&mut self, _index: usize, _values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        immutable("insert")
    }

    fn remove(&mut self, _index: usize) -> Result<T> {
        immutable("remove")
    }

    fn clear(&mut self) -> Result<()> {
        immutable("clear")
    }
}
