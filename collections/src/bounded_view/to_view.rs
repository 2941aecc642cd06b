// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BoundedView, BoundedViewMut};
use crate::{CollectionResult, Readable};

/// Extension methods to create views from any [`Readable`], including views themselves.
///
/// ```
/// use r3bl_collections::{CommonResult, ToBoundedView};
///
/// fn main() -> CommonResult<()> {
///     let mut letters = vec!['a', 'b', 'c', 'd'];
///     assert_eq!(letters.to_view_window(1, 2)?.to_vec(), vec!['b', 'c']);
///
///     letters.to_view_from_mut(2)?.add('z')?;
///     assert_eq!(letters, vec!['a', 'b', 'c', 'd', 'z']);
///     Ok(())
/// }
/// ```
pub trait ToBoundedView: Readable {
    fn to_view(&self) -> BoundedView<'_, Self> { BoundedView::new(self) }

    /// # Errors
    ///
    /// See [`BoundedView::from_offset`].
    fn to_view_from(&self, offset: usize) -> CollectionResult<BoundedView<'_, Self>> {
        BoundedView::from_offset(self, offset)
    }

    /// # Errors
    ///
    /// See [`BoundedView::from_window`].
    fn to_view_window(
        &self,
        offset: usize,
        count: usize,
    ) -> CollectionResult<BoundedView<'_, Self>> {
        BoundedView::from_window(self, offset, count)
    }

    fn to_view_mut(&mut self) -> BoundedViewMut<'_, Self> { BoundedViewMut::new(self) }

    /// # Errors
    ///
    /// See [`BoundedViewMut::from_offset`].
    fn to_view_from_mut(
        &mut self,
        offset: usize,
    ) -> CollectionResult<BoundedViewMut<'_, Self>> {
        BoundedViewMut::from_offset(self, offset)
    }

    /// # Errors
    ///
    /// See [`BoundedViewMut::from_window`].
    fn to_view_window_mut(
        &mut self,
        offset: usize,
        count: usize,
    ) -> CollectionResult<BoundedViewMut<'_, Self>> {
        BoundedViewMut::from_window(self, offset, count)
    }
}

impl<C: Readable + ?Sized> ToBoundedView for C {}
