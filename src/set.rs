//! Set: the key projection of a [`Map`] whose values are `()`.

use crate::error::{Error, Result};
use crate::map::{self, DefaultEquality, KeyEquality, Map};
use crate::traits::{Collection, Resizable};
use core::fmt;

#[derive(Clone)]
pub struct Set<T, E = DefaultEquality> {
    map: Map<T, (), E>,
}

impl<T: PartialEq> Set<T> {
    pub fn new() -> Self {
        Self { map: Map::new() }
    }
}

impl<T: PartialEq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E: KeyEquality<T>> Set<T, E> {
    pub fn with_equality(equality: E) -> Self {
        Self {
            map: Map::with_equality(equality),
        }
    }

    /// Adds `value`; returns `false` if an equal member was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.map.has_key(&value) {
            return false;
        }
        self.map.put(value, ());
        true
    }

    /// Adds each value in turn, skipping members already present.
    pub fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value);
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.map.has_key(value)
    }

    /// Removes the member equal to `value`, returning whether one existed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.map.remove(value).is_ok()
    }

    /// Removes and returns the stored member equal to `value`.
    pub fn take(&mut self, value: &T) -> Result<T> {
        self.map.remove_entry(value).map(|(k, ())| k)
    }
}

impl<T, E> Set<T, E> {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    pub fn first(&self) -> Result<&T> {
        self.map
            .first()
            .map(|p| &p.key)
            .map_err(|_| Error::underflow("first"))
    }

    pub fn last(&self) -> Result<&T> {
        self.map
            .last()
            .map(|p| &p.key)
            .map_err(|_| Error::underflow("last"))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.iter(),
        }
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Set<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.map.iter().map(|(k, _)| k))
            .finish()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

impl<T, E: KeyEquality<T>> Extend<T> for Set<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

/// Borrowing iterator in insertion order.
pub struct Iter<'a, T> {
    inner: map::Iter<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T, E> IntoIterator for &'a Set<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> IntoIterator for Set<T, E> {
    type Item = T;
    type IntoIter = core::iter::Map<map::IntoIter<T, ()>, fn((T, ())) -> T>;
    fn into_iter(self) -> Self::IntoIter {
        let key: fn((T, ())) -> T = |(k, ())| k;
        self.map.into_iter().map(key)
    }
}

impl<T, E> Collection for Set<T, E> {
    type Item = T;

    fn len(&self) -> usize {
        Collection::len(&self.map)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.map.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<T, E> Resizable for Set<T, E> {
    fn capacity(&self) -> usize {
        Resizable::capacity(&self.map)
    }

    fn allocate(&mut self, capacity: usize) {
        self.map.allocate(capacity);
    }
}
