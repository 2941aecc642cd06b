// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::trace;

use crate::{ArrayAccessBoundsStatus, BoundsCheck, CollectionError, CollectionResult};

/// The `(offset, count)` pair that a view exposes of its backing container. The
/// invariant `offset + count <= container_len` holds for every [`Window`] handed out by
/// this module.
///
/// ```text
///   container  ┌───┬───┬───┬───┬───┬───┬───┬───┐
///              │ a │ b │ c │ d │ e │ f │ g │ h │   len = 8
///              └───┴───┴───┴───┴───┴───┴───┴───┘
///                      ▲           ▲
///                      │ offset=2  │ end=5
///                      └─ count=3 ─┘
///   view index         0   1   2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub offset: usize,
    pub count: usize,
}

impl Window {
    /// The whole container.
    #[must_use]
    pub fn full(container_len: usize) -> Self {
        Self {
            offset: 0,
            count: container_len,
        }
    }

    /// Validate `offset <= container_len` and `count <= container_len - offset`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] naming `offset` or `count`.
    pub fn try_new(
        offset: usize,
        count: usize,
        container_len: usize,
    ) -> CollectionResult<Self> {
        if !offset.check_cursor_position_bounds(container_len).is_valid() {
            return CollectionError::out_of_range("offset", offset, container_len);
        }
        let max_count = container_len - offset;
        if count > max_count {
            return CollectionError::out_of_range("count", count, max_count);
        }
        Ok(Self { offset, count })
    }

    /// Window starting at `offset` that runs to the end of the container.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `offset > container_len`.
    pub fn try_from_offset(offset: usize, container_len: usize) -> CollectionResult<Self> {
        Self::try_new(offset, container_len.saturating_sub(offset), container_len)
    }

    /// A sub-window whose `offset` and `count` are relative to this one. The result is
    /// expressed in absolute container positions.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if the sub-window does not fit inside this one.
    pub fn nest(self, offset: usize, count: usize) -> CollectionResult<Self> {
        let relative = Self::try_new(offset, count, self.count)?;
        Ok(Self {
            offset: self.offset + relative.offset,
            count: relative.count,
        })
    }

    /// One past the last absolute position covered by this window.
    #[must_use]
    pub fn end(&self) -> usize { self.offset + self.count }

    /// Map a view relative `index` to its absolute container position, if it is inside
    /// the window.
    #[must_use]
    pub fn absolute(&self, index: usize) -> Option<usize> {
        match index.check_array_access_bounds(self.count) {
            ArrayAccessBoundsStatus::Within => Some(self.offset + index),
            ArrayAccessBoundsStatus::Overflowed => None,
        }
    }

    /// Like [`Self::absolute`], but reports an error naming `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `index >= count`.
    pub fn try_absolute(&self, index: usize) -> CollectionResult<usize> {
        match self.absolute(index) {
            Some(position) => Ok(position),
            None => CollectionError::out_of_range("index", index, self.count),
        }
    }

    /// Move the start of the window. When the window would run past the end of the
    /// container, `count` is silently shrunk to fit.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if `offset > container_len`.
    pub fn shift_to(&mut self, offset: usize, container_len: usize) -> CollectionResult<()> {
        if !offset.check_cursor_position_bounds(container_len).is_valid() {
            return CollectionError::out_of_range("offset", offset, container_len);
        }
        let max_count = container_len - offset;
        if self.count > max_count {
            trace!(
                message = "view count shrunk by offset change",
                offset,
                old_count = self.count,
                new_count = max_count
            );
            self.count = max_count;
        }
        self.offset = offset;
        Ok(())
    }

    /// Grow or shrink the window from its current offset.
    ///
    /// # Errors
    ///
    /// [`CollectionError::OutOfRange`] if the window would run past the container.
    pub fn resize_to(&mut self, count: usize, container_len: usize) -> CollectionResult<()> {
        *self = Self::try_new(self.offset, count, container_len)?;
        Ok(())
    }
}
