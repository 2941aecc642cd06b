// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read-only, non-owning window over any [`Readable`] container. For the writable
//! counterpart, take a look at [`super::BoundedViewMut`].

use std::ops::Index;

use super::Window;
use crate::{CollectionError, CollectionResult, Readable, ReadableIter,
            common::bounds_check::checked_destination};

/// A `(offset, count)` window over a borrowed container. It never owns, clones, or frees
/// the container. Index `i` of the view maps to `container[offset + i]`.
///
/// Because the view only holds a shared reference, it is [`Copy`]. Nesting produces a new
/// independent view that shares the same backing reference.
///
/// ```
/// use r3bl_collections::{BoundedView, CommonResult};
///
/// fn main() -> CommonResult<()> {
///     let numbers = vec![10, 20, 30, 40, 50];
///     let view = BoundedView::from_window(&numbers, 1, 3)?;
///     assert_eq!(view.to_vec(), vec![20, 30, 40]);
///
///     let nested = view.nest(1)?;
///     assert_eq!(nested.offset(), 2);
///     assert_eq!(nested.to_vec(), vec![30, 40]);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct BoundedView<'a, C: ?Sized> {
    container: &'a C,
    window: Window,
}

impl<C: ?Sized> Clone for BoundedView<'_, C> {
    fn clone(&self) -> Self { *self }
}

impl<C: ?Sized> Copy for BoundedView<'_, C> {}

mod constructor {
    use super::*;

    impl<'a, C: Readable + ?Sized> BoundedView<'a, C> {
        /// View over the whole container.
        pub fn new(container: &'a C) -> Self {
            Self {
                container,
                window: Window::full(container.len()),
            }
        }

        /// The window must already have been validated against this container.
        pub(crate) fn from_validated(container: &'a C, window: Window) -> Self {
            Self { container, window }
        }

        /// View from `offset` to the end of the container.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `offset > container.len()`.
        pub fn from_offset(container: &'a C, offset: usize) -> CollectionResult<Self> {
            let window = Window::try_from_offset(offset, container.len())?;
            Ok(Self { container, window })
        }

        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if the window does not fit in the container.
        pub fn from_window(
            container: &'a C,
            offset: usize,
            count: usize,
        ) -> CollectionResult<Self> {
            let window = Window::try_new(offset, count, container.len())?;
            Ok(Self { container, window })
        }

        /// New view starting at `offset` (relative to this view) and running to the end
        /// of this view.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `offset > self.count()`.
        pub fn nest(&self, offset: usize) -> CollectionResult<Self> {
            self.nest_window(offset, self.window.count.saturating_sub(offset))
        }

        /// New view over `(offset, count)`, relative to this view.
        ///
        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if the sub-window does not fit in this view.
        pub fn nest_window(&self, offset: usize, count: usize) -> CollectionResult<Self> {
            Ok(Self {
                container: self.container,
                window: self.window.nest(offset, count)?,
            })
        }
    }
}

mod window_accessors {
    use super::*;

    impl<'a, C: Readable + ?Sized> BoundedView<'a, C> {
        #[must_use]
        pub fn offset(&self) -> usize { self.window.offset }

        #[must_use]
        pub fn count(&self) -> usize { self.window.count }

        #[must_use]
        pub fn window(&self) -> Window { self.window }

        #[must_use]
        pub fn container(&self) -> &'a C { self.container }

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

    impl<'a, C: Readable + ?Sized> BoundedView<'a, C> {
        /// The item at view relative `index`, borrowed for as long as the container.
        #[must_use]
        pub fn get(&self, index: usize) -> Option<&'a C::Item> {
            let container = self.container;
            self.window
                .absolute(index)
                .and_then(|position| container.get(position))
        }

        /// # Errors
        ///
        /// [`CollectionError::OutOfRange`] if `index >= self.count()`.
        pub fn at(&self, index: usize) -> CollectionResult<&'a C::Item> {
            let position = self.window.try_absolute(index)?;
            match self.container.get(position) {
                Some(item) => Ok(item),
                None => CollectionError::out_of_range(
                    "index",
                    position,
                    self.container.len(),
                ),
            }
        }

        #[must_use]
        pub fn iter(&self) -> ReadableIter<'a, C> {
            ReadableIter::with_range(self.container, self.window.offset, self.window.end())
        }

        /// View relative index of the first item equal to `value`.
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

        /// Clone every item of the view into `array`, starting at `index`.
        ///
        /// # Errors
        ///
        /// - [`CollectionError::OutOfRange`] if `index > array.len()`.
        /// - [`CollectionError::InsufficientCapacity`] if `array` has less than
        ///   `self.count()` slots left after `index`.
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
}

impl<C: Readable + ?Sized> Readable for BoundedView<'_, C> {
    type Item = C::Item;

    fn len(&self) -> usize { self.window.count }

    fn get(&self, index: usize) -> Option<&C::Item> { BoundedView::get(self, index) }
}

/// # Panics
///
/// Panics if `index >= self.count()`, just like slice indexing. Use
/// [`BoundedView::at`] for a fallible lookup.
impl<C: Readable + ?Sized> Index<usize> for BoundedView<'_, C> {
    type Output = C::Item;

    fn index(&self, index: usize) -> &C::Item {
        match BoundedView::get(self, index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the view count is {} but the index is {index}",
                self.window.count
            ),
        }
    }
}

impl<'a, C: Readable + ?Sized> IntoIterator for BoundedView<'a, C> {
    type Item = &'a C::Item;
    type IntoIter = ReadableIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, C: Readable + ?Sized> IntoIterator for &BoundedView<'a, C> {
    type Item = &'a C::Item;
    type IntoIter = ReadableIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(test)]
mod tests {
    use smallstr::SmallString;

    use super::*;
    use crate::{CommonResult, assert_eq2, ok};

    type SmallStringBackingStore = SmallString<[u8; 32]>;

    #[test]
    fn test_view_maps_to_container() -> CommonResult<()> {
        let container = [5, 6, 7, 8, 9, 10];
        let view = BoundedView::from_window(&container, 2, 3)?;
        for i in 0..view.count() {
            assert_eq2!(view[i], container[view.offset() + i]);
        }
        assert_eq2!(view.get(3), None);
        assert!(view.at(3).is_err());
        ok!()
    }

    #[test]
    fn test_construct_validates_window() {
        let container = vec![1, 2, 3];
        assert!(BoundedView::from_offset(&container, 3).is_ok());
        assert!(BoundedView::from_offset(&container, 4).is_err());
        assert!(BoundedView::from_window(&container, 1, 3).is_err());

        let view = BoundedView::from_offset(&container, 3).unwrap();
        assert_eq2!(view.count(), 0);
        assert!(view.is_empty());
    }

    #[test]
    fn test_nest_composes() -> CommonResult<()> {
        let container: Vec<usize> = (0..20).collect();
        let view = BoundedView::from_window(&container, 3, 15)?;
        let nested = view.nest(4)?;
        assert_eq2!(nested.offset(), view.offset() + 4);
        assert_eq2!(nested.count(), 11);

        let nested_again = nested.nest_window(2, 3)?;
        assert_eq2!(nested_again.offset(), 9);
        assert_eq2!(nested_again.to_vec(), vec![9, 10, 11]);

        // The original view is independent of its nested views.
        assert_eq2!(view.offset(), 3);
        assert!(nested.nest(12).is_err());
        ok!()
    }

    #[test]
    fn test_set_offset_shrinks_count() -> CommonResult<()> {
        let container = vec![1, 2, 3, 4, 5, 6];
        let mut view = BoundedView::from_window(&container, 0, 5)?;
        view.set_offset(3)?;
        assert_eq2!(view.count(), 3);
        assert_eq2!(view.to_vec(), vec![4, 5, 6]);
        assert!(view.set_offset(7).is_err());
        ok!()
    }

    #[test]
    fn test_set_count_grows_and_shrinks() -> CommonResult<()> {
        let container = vec![1, 2, 3, 4, 5, 6];
        let mut view = BoundedView::from_window(&container, 2, 1)?;
        view.set_count(4)?;
        assert_eq2!(view.to_vec(), vec![3, 4, 5, 6]);
        view.set_count(0)?;
        assert!(view.is_empty());
        assert!(view.set_count(5).is_err());
        ok!()
    }

    #[test]
    fn test_search_and_copy() -> CommonResult<()> {
        let container: Vec<SmallStringBackingStore> =
            vec!["a".into(), "b".into(), "c".into(), "b".into()];
        let view = BoundedView::from_offset(&container, 1)?;
        assert_eq2!(view.index_of(&"b".into()), Some(0));
        assert!(view.contains(&"c".into()));
        assert!(!view.contains(&"a".into()));

        let mut array: [SmallStringBackingStore; 5] = Default::default();
        view.copy_to(&mut array, 1)?;
        assert_eq2!(array[1].as_str(), "b");
        assert_eq2!(array[3].as_str(), "b");
        assert_eq2!(array[4].as_str(), "");

        let error = view.copy_to(&mut array, 3).unwrap_err();
        assert_eq2!(
            error,
            CollectionError::InsufficientCapacity {
                param: "array",
                required: 3,
                available: 2,
            }
        );
        let error = view.copy_to(&mut array, 6).unwrap_err();
        assert_eq2!(
            error,
            CollectionError::OutOfRange {
                param: "index",
                value: 6,
                max: 5,
            }
        );
        ok!()
    }

    #[test]
    fn test_view_over_view_and_slice() -> CommonResult<()> {
        let slice: &[u8] = &[1, 2, 3, 4, 5];
        let outer = BoundedView::from_window(slice, 1, 4)?;
        let view_of_view = BoundedView::from_window(&outer, 1, 2)?;
        assert_eq2!(view_of_view.to_vec(), vec![3, 4]);

        let collected: Vec<u8> = outer.into_iter().copied().collect();
        assert_eq2!(collected, vec![2, 3, 4, 5]);
        assert_eq2!(outer.iter().rev().next(), Some(&5));
        ok!()
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_panics_outside_window() {
        let container = [1, 2, 3];
        let view = BoundedView::from_window(&container, 1, 1).unwrap();
        let _unused = view[1];
    }
}
