//! Sparse child storage indexed by bitmap rank.

use crate::bitmap::{self, Bitmap};

/// A compact map from discriminators to items. Only occupied slots are stored, in increasing
/// discriminator order; the bitmap records which slots are occupied so the position of any item
/// is the number of occupied slots below it.
#[derive(Debug, Clone)]
pub struct SparseArray<T> {
    bitmap: Bitmap,
    items: Vec<T>,
}

impl<T> Default for SparseArray<T> {
    fn default() -> Self {
        Self {
            bitmap: Bitmap::default(),
            items: Vec::new(),
        }
    }
}

impl<T> SparseArray<T> {
    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the slot for `key` is occupied.
    pub fn contains(&self, key: usize) -> bool {
        self.bitmap.is_set(key)
    }

    /// Position of `key` in the dense item vector.
    pub fn rank(&self, key: usize) -> usize {
        self.bitmap.count_range(0, key)
    }

    /// Stores `item` in the slot for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already occupied.
    pub fn add(&mut self, key: usize, item: T) {
        assert!(!self.bitmap.is_set(key), "[bug] slot {key} is already occupied");
        let idx = self.rank(key);
        self.items.insert(idx, item);
        self.bitmap.set(key);
    }

    /// Removes and returns the item in the slot for `key`.
    pub fn remove(&mut self, key: usize) -> Option<T> {
        if !self.bitmap.is_set(key) {
            return None;
        }
        let idx = self.rank(key);
        self.bitmap.clear(key);
        Some(self.items.remove(idx))
    }

    /// Returns a shared reference to the item in the slot for `key`.
    pub fn get(&self, key: usize) -> Option<&T> {
        if self.bitmap.is_set(key) {
            Some(&self.items[self.rank(key)])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the item in the slot for `key`.
    pub fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        if self.bitmap.is_set(key) {
            let idx = self.rank(key);
            Some(&mut self.items[idx])
        } else {
            None
        }
    }

    /// Item in the lowest occupied slot.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Item in the highest occupied slot.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Takes the only item out, leaving the array empty. Returns `None` unless exactly one slot
    /// is occupied.
    pub fn release(&mut self) -> Option<(usize, T)> {
        if self.items.len() != 1 {
            return None;
        }
        let key = self.bitmap.ones().next()?;
        self.bitmap.clear(key);
        self.items.pop().map(|item| (key, item))
    }

    /// The occupancy bitmap.
    pub const fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Items in slot order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterates over `(key, item)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.bitmap.ones(),
            items: self.items.iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SparseArray<T> {
    type Item = (usize, &'a T);

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the occupied slots of a [`SparseArray`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    keys: bitmap::Ones<'a>,
    items: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.items.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
