// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The three capability tiers that every container and view in this crate is described
//! by. Each tier extends the previous one.
//!
//! | Tier          | Adds                                    | Implemented by                                  |
//! | :------------ | :-------------------------------------- | :---------------------------------------------- |
//! | [`Readable`]  | `len`, `get`                            | `Vec`, `[T]`, `[T; N]`, `VecDeque`, `SmallVec`, views |
//! | [`Mutable`]   | `get_mut`, `swap`, `set`                | same as above                                   |
//! | [`Resizable`] | `insert_at`, `remove_at`, `push_back`   | `Vec`, `VecDeque`, `SmallVec`, mutable views    |
//!
//! Algorithms ask for the weakest tier they need. For example, a set operation reads
//! from two [`Readable`] sources and writes into a [`Mutable`] destination, while its
//! `add_*` sibling needs a [`Resizable`] destination to append to.

use std::mem;

use super::ReadableIter;

/// Read-only, random access to a sequence of items.
pub trait Readable {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Borrowing iterator over every item, front to back.
    fn items(&self) -> ReadableIter<'_, Self> { ReadableIter::new(self) }
}

/// In-place writes. The number of items never changes.
pub trait Mutable: Readable {
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Exchange the items at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds, just like [`slice::swap`].
    fn swap(&mut self, a: usize, b: usize);

    /// Replace the item at `index` and return the previous one. Returns [`None`] (and
    /// drops `value`) if `index` is out of bounds.
    fn set(&mut self, index: usize, value: Self::Item) -> Option<Self::Item> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }
}

/// Insertion and removal, which shift subsequent items.
pub trait Resizable: Mutable {
    /// # Panics
    ///
    /// Panics if `index > len`, just like [`Vec::insert`].
    fn insert_at(&mut self, index: usize, value: Self::Item);

    fn remove_at(&mut self, index: usize) -> Option<Self::Item>;

    fn push_back(&mut self, value: Self::Item) {
        let len = self.len();
        self.insert_at(len, value);
    }

    /// Remove up to `count` items starting at `start`.
    fn remove_range(&mut self, start: usize, count: usize) {
        for _ in 0..count {
            if self.remove_at(start).is_none() {
                break;
            }
        }
    }

    fn remove_all(&mut self) {
        let len = self.len();
        self.remove_range(0, len);
    }
}
