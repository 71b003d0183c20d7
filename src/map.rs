//! Map: insertion-ordered associative container.
//!
//! Pairs live densely in a [`GrowableBuffer`] under the squared policy.
//! Every lookup is a linear scan driven by a [`KeyEquality`] predicate, so
//! keys need no hashing or ordering, only a notion of "same key". Overwriting
//! a key keeps its original position; removing one shifts later pairs down.

use crate::buffer::GrowableBuffer;
use crate::capacity::CapacityPolicy;
use crate::error::{Error, Result};
use crate::fixed_array::FixedArray;
use crate::traits::{Collection, Resizable};
use core::fmt;

/// Decides whether two keys name the same entry.
///
/// Any `Fn(&K, &K) -> bool` closure works as an equality; types can also
/// implement this directly.
pub trait KeyEquality<K: ?Sized> {
    fn same_key(&self, a: &K, b: &K) -> bool;
}

/// Equality through `PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<K: PartialEq + ?Sized> KeyEquality<K> for DefaultEquality {
    #[inline]
    fn same_key(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

impl<K: ?Sized, F> KeyEquality<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn same_key(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[derive(Clone)]
pub struct Map<K, V, E = DefaultEquality> {
    pairs: GrowableBuffer<Pair<K, V>>,
    equality: E,
}

impl<K: PartialEq, V> Map<K, V> {
    pub fn new() -> Self {
        Self::with_equality(DefaultEquality)
    }
}

impl<K: PartialEq, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E: KeyEquality<K>> Map<K, V, E> {
    /// Empty map comparing keys with `equality`.
    pub fn with_equality(equality: E) -> Self {
        Self {
            pairs: GrowableBuffer::with_policy(CapacityPolicy::squared()),
            equality,
        }
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.pairs
            .iter()
            .position(|p| self.equality.same_key(&p.key, key))
    }

    /// Associates `value` with `key`, returning the value it replaced.
    ///
    /// An existing key is overwritten in place; a new one is appended.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(i) => {
                let slot = &mut self.pairs.as_mut_slice()[i];
                Some(core::mem::replace(&mut slot.value, value))
            }
            None => {
                self.pairs.push(Pair::new(key, value));
                None
            }
        }
    }

    pub fn put_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        self.position(key)
            .map(|i| &self.pairs.as_slice()[i].value)
            .ok_or(Error::OutOfBounds)
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.position(key) {
            Some(i) => Ok(&mut self.pairs.as_mut_slice()[i].value),
            None => Err(Error::OutOfBounds),
        }
    }

    pub fn remove(&mut self, key: &K) -> Result<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes `key`, or hands back `default` when absent.
    pub fn remove_or(&mut self, key: &K, default: V) -> V {
        self.remove(key).unwrap_or(default)
    }

    /// Removes the pair for `key`, returning the stored key as well.
    pub fn remove_entry(&mut self, key: &K) -> Result<(K, V)> {
        let i = self.position(key).ok_or(Error::OutOfBounds)?;
        self.pairs.remove(i).map(Pair::into_tuple)
    }

    pub fn has_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.pairs.iter().any(|p| &p.value == value)
    }
}

impl<K, V, E> Map<K, V, E> {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    pub fn keys(&self) -> FixedArray<K>
    where
        K: Clone,
    {
        self.pairs.iter().map(|p| p.key.clone()).collect()
    }

    pub fn values(&self) -> FixedArray<V>
    where
        V: Clone,
    {
        self.pairs.iter().map(|p| p.value.clone()).collect()
    }

    pub fn pairs(&self) -> FixedArray<Pair<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.pairs.iter().cloned().collect()
    }

    pub fn first(&self) -> Result<&Pair<K, V>> {
        self.pairs.first()
    }

    pub fn last(&self) -> Result<&Pair<K, V>> {
        self.pairs.last()
    }

    /// The pair at insertion position `position`.
    pub fn skip(&self, position: usize) -> Result<&Pair<K, V>> {
        self.pairs.get(position)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    /// Drops every pair and returns capacity to the policy minimum.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E> fmt::Debug for Map<K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|p| (&p.key, &p.value)))
            .finish()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.put_all(iter);
        map
    }
}

impl<K, V, E: KeyEquality<K>> Extend<(K, V)> for Map<K, V, E> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

/// Borrowing iterator in insertion order.
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| (&p.key, &p.value))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|p| (&p.key, &p.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V, E> IntoIterator for &'a Map<K, V, E> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator in insertion order.
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Pair<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next().map(Pair::into_tuple)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V, E> IntoIterator for Map<K, V, E> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<K, V, E> Collection for Map<K, V, E> {
    type Item = Pair<K, V>;

    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn to_vec(&self) -> Vec<Pair<K, V>>
    where
        Pair<K, V>: Clone,
    {
        self.pairs.as_slice().to_vec()
    }
}

impl<K, V, E> Resizable for Map<K, V, E> {
    fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    fn allocate(&mut self, capacity: usize) {
        self.pairs.allocate(capacity);
    }
}
