//! Interfaces the concrete containers implement directly.

use crate::error::Result;

/// Read-side behaviour common to every container.
pub trait Collection {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the elements out in the container's natural order.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone;
}

/// Index-addressable, double-ended sequence.
///
/// Fallible operations check their arguments before mutating; an `Err`
/// leaves the sequence unchanged.
pub trait Sequence: Collection {
    fn get(&self, index: usize) -> Result<&Self::Item>;
    fn set(&mut self, index: usize, value: Self::Item) -> Result<()>;

    fn first(&self) -> Result<&Self::Item>;
    fn last(&self) -> Result<&Self::Item>;

    /// Appends at the back.
    fn push(&mut self, value: Self::Item) -> Result<()>;
    /// Removes from the back.
    fn pop(&mut self) -> Result<Self::Item>;
    /// Removes from the front.
    fn shift(&mut self) -> Result<Self::Item>;
    /// Prepends at the front.
    fn unshift(&mut self, value: Self::Item) -> Result<()>;

    /// Inserts `values` in order starting at `index`; `index == len` appends.
    fn insert<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Item>;

    fn remove(&mut self, index: usize) -> Result<Self::Item>;

    fn clear(&mut self) -> Result<()>;
}

/// Containers whose backing storage follows a capacity policy.
pub trait Resizable {
    fn capacity(&self) -> usize;

    /// Ensures room for `capacity` elements. Never shrinks.
    fn allocate(&mut self, capacity: usize);
}
