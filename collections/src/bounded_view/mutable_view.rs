// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Writable, non-owning window over a [`Mutable`] or [`Resizable`] container.
//!
//! Writes go straight through to the backing container. When the container is
//! [`Resizable`], inserting into or removing from the view also resizes the container,
//! and the view's `count` tracks the change:
//!
//! ```text
//! before insert(1, x)     ┌───┬───┬───┬───┬───┐
//!                         │ a │ b │ c │ d │ e │     window = (1, 2) = [b, c]
//!                         └───┴───┴───┴───┴───┘
//! after insert(1, x)      ┌───┬───┬───┬───┬───┬───┐
//!                         │ a │ b │ x │ c │ d │ e │ window = (1, 3) = [b, x, c]
//!                         └───┴───┴───┴───┴───┴───┘
//! ```

use std::ops::{Index, IndexMut};

use super::{BoundedView, Window};
use crate::{BoundsCheck, CollectionError, CollectionResult, Mutable, Readable,
            ReadableIter, Resizable, common::bounds_check::checked_destination};

/// Holds `&'a mut C`, so only one [`BoundedViewMut`] over a container can be live at a
/// time. Nesting reborrows this view, and the nested view must be dropped before this one
/// can be used again. Use [`BoundedViewMut::as_view`] to get any number of read-only
/// views.
#[derive(Debug)]
pub struct BoundedViewMut<'a, C: ?Sized> {
    container: &'a mut C,
    window: Window,
}

mod constructor {
    use super::*;

    impl<'a, C: Readable + ?Sized> BoundedViewMut<'a, C> {
        pub fn new(container: &'a mut C) -> Self {
            let window = Window::full(container.len());
            Self { container, window }
        }

        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `offset > container.len()`.
        pub fn from_offset(container: &'a mut C, offset: usize) -> CollectionResult<Self> {
            let window = Window::try_from_offset(offset, container.len())?;
            Ok(Self { container, window })
        }

        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if the window does not fit in the container.
        pub fn from_window(
            container: &'a mut C,
            offset: usize,
            count: usize,
        ) -> CollectionResult<Self> {
            let window = Window::try_new(offset, count, container.len())?;
            Ok(Self { container, window })
        }

        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `offset > self.count()`.
        pub fn nest(&mut self, offset: usize) -> CollectionResult<BoundedViewMut<'_, C>> {
            let count = self.window.count.saturating_sub(offset);
            self.nest_window(offset, count)
        }

        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if the sub-window does not fit in this view.
        pub fn nest_window(
            &mut self,
            offset: usize,
            count: usize,
        ) -> CollectionResult<BoundedViewMut<'_, C>> {
            let window = self.window.nest(offset, count)?;
            Ok(BoundedViewMut {
                container: &mut *self.container,
                window,
            })
        }

        /// Read-only view over the same window.
        #[must_use]
        pub fn as_view(&self) -> BoundedView<'_, C> {
            BoundedView::from_validated(&*self.container, self.window)
        }

        /// Give up write access and keep a read-only view that lives as long as the
        /// original borrow.
        #[must_use]
        pub fn into_view(self) -> BoundedView<'a, C> {
            let container: &'a C = self.container;
            BoundedView::from_validated(container, self.window)
        }
    }
}

mod window_accessors {
    use super::*;

    impl<C: Readable + ?Sized> BoundedViewMut<'_, C> {
        #[must_use]
        pub fn offset(&self) -> usize { self.window.offset }

        #[must_use]
        pub fn count(&self) -> usize { self.window.count }

        #[must_use]
        pub fn window(&self) -> Window { self.window }

        /// Move the start of the window, shrinking the count if the window would run past
        /// the end of the container.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `offset > container.len()`.
        pub fn set_offset(&mut self, offset: usize) -> CollectionResult<()> {
            self.window.shift_to(offset, self.container.len())
        }

        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `offset + count > container.len()`.
        pub fn set_count(&mut self, count: usize) -> CollectionResult<()> {
            self.window.resize_to(count, self.container.len())
        }
    }
}

mod access {
    use super::*;

    impl<C: Readable + ?Sized> BoundedViewMut<'_, C> {
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `index >= self.count()`.
        pub fn at(&self, index: usize) -> CollectionResult<&C::Item> {
            let position = self.window.try_absolute(index)?;
            let container_len = self.container.len();
            match self.container.get(position) {
                Some(item) => Ok(item),
                None => CollectionError::out_of_range("index", position, container_len),
            }
        }

        #[must_use]
        pub fn iter(&self) -> ReadableIter<'_, C> {
            ReadableIter::with_range(&*self.container, self.window.offset, self.window.end())
        }

        pub fn index_of(&self, value: &C::Item) -> Option<usize>
        where
            C::Item: PartialEq,
        {
            self.iter().position(|item| item == value)
        }

        pub fn contains(&self, value: &C::Item) -> bool
        where
            C::Item: PartialEq,
        {
            self.index_of(value).is_some()
        }

        /// # Errors
        ///
        /// Same as [`BoundedView::copy_to`].
        pub fn copy_to(&self, array: &mut [C::Item], index: usize) -> CollectionResult<()>
        where
            C::Item: Clone,
        {
            let destination = checked_destination(array, index, self.count())?;
            for (slot, item) in destination.iter_mut().zip(self.iter()) {
                slot.clone_from(item);
            }
            Ok(())
        }

        #[must_use]
        pub fn to_vec(&self) -> Vec<C::Item>
        where
            C::Item: Clone,
        {
            self.iter().cloned().collect()
        }
    }

    impl<C: Mutable + ?Sized> BoundedViewMut<'_, C> {
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `index >= self.count()`.
        pub fn at_mut(&mut self, index: usize) -> CollectionResult<&mut C::Item> {
            let position = self.window.try_absolute(index)?;
            let container_len = self.container.len();
            match self.container.get_mut(position) {
                Some(item) => Ok(item),
                None => CollectionError::out_of_range("index", position, container_len),
            }
        }

        /// Overwrite the item at `index` and return the previous one.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `index >= self.count()`.
        pub fn try_set(&mut self, index: usize, value: C::Item) -> CollectionResult<C::Item> {
            let slot = self.at_mut(index)?;
            Ok(std::mem::replace(slot, value))
        }
    }
}

mod mutator {
    use super::*;

    impl<C: Resizable + ?Sized> BoundedViewMut<'_, C> {
        /// Insert `value` at view relative `index` (`0..=count`). The backing container
        /// grows by one and so does this view.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `index > self.count()`, or if the backing
        /// container has shrunk below this view's window.
        pub fn insert(&mut self, index: usize, value: C::Item) -> CollectionResult<()> {
            self.revalidate()?;
            if !index.check_cursor_position_bounds(self.window.count).is_valid() {
                return CollectionError::out_of_range("index", index, self.window.count);
            }
            self.container.insert_at(self.window.offset + index, value);
            self.window.count += 1;
            Ok(())
        }

        /// Remove the item at view relative `index`. The backing container shrinks by one
        /// and so does this view.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `index >= self.count()`, or if the backing
        /// container has shrunk below this view's window.
        pub fn remove_at(&mut self, index: usize) -> CollectionResult<C::Item> {
            self.revalidate()?;
            let position = self.window.try_absolute(index)?;
            let container_len = self.container.len();
            match self.container.remove_at(position) {
                Some(item) => {
                    self.window.count -= 1;
                    Ok(item)
                }
                None => CollectionError::out_of_range("index", position, container_len),
            }
        }

        /// Append `value` at the end of this view, which is not necessarily the end of the
        /// backing container.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if the backing container has shrunk below this
        /// view's window, for example after a nested view was cleared.
        pub fn add(&mut self, value: C::Item) -> CollectionResult<()> {
            self.revalidate()?;
            self.container.insert_at(self.window.end(), value);
            self.window.count += 1;
            Ok(())
        }

        /// Remove exactly `count` items from the backing container, starting at `offset`.
        /// The view keeps its offset and ends up empty.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if the backing container has shrunk below this
        /// view's window. Nothing is removed in that case.
        pub fn clear(&mut self) -> CollectionResult<()> {
            self.revalidate()?;
            self.container
                .remove_range(self.window.offset, self.window.count);
            self.window.count = 0;
            Ok(())
        }

        /// Remove the first item equal to `value`. Returns `false` if there is none.
        pub fn remove(&mut self, value: &C::Item) -> bool
        where
            C::Item: PartialEq,
        {
            match self.index_of(value) {
                Some(index) => self.remove_at(index).is_ok(),
                None => false,
            }
        }

        /// Resizing through a nested view changes the backing container's length without
        /// this view's knowledge.
        pub(super) fn revalidate(&self) -> CollectionResult<()> {
            Window::try_new(self.window.offset, self.window.count, self.container.len())
                .map(|_| ())
        }
    }
}

impl<C: Readable + ?Sized> Readable for BoundedViewMut<'_, C> {
    type Item = C::Item;

    fn len(&self) -> usize { self.window.count }

    fn get(&self, index: usize) -> Option<&C::Item> {
        self.window
            .absolute(index)
            .and_then(|position| self.container.get(position))
    }
}

impl<C: Mutable + ?Sized> Mutable for BoundedViewMut<'_, C> {
    fn get_mut(&mut self, index: usize) -> Option<&mut C::Item> {
        let position = self.window.absolute(index)?;
        self.container.get_mut(position)
    }

    /// # Panics
    ///
    /// Panics if either index is outside of the view's window.
    fn swap(&mut self, a: usize, b: usize) {
        match (self.window.absolute(a), self.window.absolute(b)) {
            (Some(a), Some(b)) => self.container.swap(a, b),
            _ => panic!(
                "swap index out of bounds: the view count is {} but the indices are {a} \
                 and {b}",
                self.window.count
            ),
        }
    }
}

impl<C: Resizable + ?Sized> Resizable for BoundedViewMut<'_, C> {
    /// # Panics
    ///
    /// Panics if `index > self.count()`, just like [`Vec::insert`].
    fn insert_at(&mut self, index: usize, value: C::Item) {
        if let Err(error) = BoundedViewMut::insert(self, index, value) {
            panic!("insertion index out of bounds: {error}");
        }
    }

    fn remove_at(&mut self, index: usize) -> Option<C::Item> {
        BoundedViewMut::remove_at(self, index).ok()
    }

    /// # Panics
    ///
    /// Panics if the backing container has shrunk below this view's window.
    fn push_back(&mut self, value: C::Item) {
        if let Err(error) = BoundedViewMut::add(self, value) {
            panic!("stale view: {error}");
        }
    }

    /// # Panics
    ///
    /// Panics if the backing container has shrunk below this view's window.
    fn remove_all(&mut self) {
        if let Err(error) = BoundedViewMut::clear(self) {
            panic!("stale view: {error}");
        }
    }

    /// Removes at most `self.count() - start` items, so the removal stays inside this
    /// view's window.
    fn remove_range(&mut self, start: usize, count: usize) {
        let count = count.min(self.window.count.saturating_sub(start));
        if count == 0 || self.revalidate().is_err() {
            return;
        }
        self.container.remove_range(self.window.offset + start, count);
        self.window.count -= count;
    }
}

/// # Panics
///
/// Panics if `index >= self.count()`. Use [`BoundedViewMut::at`] for a fallible lookup.
impl<C: Readable + ?Sized> Index<usize> for BoundedViewMut<'_, C> {
    type Output = C::Item;

    fn index(&self, index: usize) -> &C::Item {
        match Readable::get(self, index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the view count is {} but the index is {index}",
                self.window.count
            ),
        }
    }
}

/// # Panics
///
/// Panics if `index >= self.count()`. Use [`BoundedViewMut::at_mut`] for a fallible
/// lookup.
impl<C: Mutable + ?Sized> IndexMut<usize> for BoundedViewMut<'_, C> {
    fn index_mut(&mut self, index: usize) -> &mut C::Item {
        let count = self.window.count;
        match Mutable::get_mut(self, index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the view count is {count} but the index is {index}"
            ),
        }
    }
}

impl<'b, C: Readable + ?Sized> IntoIterator for &'b BoundedViewMut<'_, C> {
    type Item = &'b C::Item;
    type IntoIter = ReadableIter<'b, C>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
