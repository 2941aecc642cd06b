// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds checking for view windows.
//!
//! There are two paradigms, and views use both:
//!
//! 1. **Array access**: is `index` a slot that holds an item? Used by reads and writes
//!    ([`BoundedView::at`], [`BoundedViewMut::try_set`]). Valid range is `0..len`.
//! 2. **Cursor position**: is `index` a place where an item could be inserted, or where a
//!    window could start? Used by [`BoundedViewMut::insert`] and by window offsets.
//!    Valid range is `0..=len`.
//!
//! ```text
//!                 0   1   2   3   4 │ 5   6
//!               ┌───┬───┬───┬───┬───┼───┬───┐
//! array access  │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ × │ × │
//! cursor        │ S │ W │ W │ W │ W │ E │ B │   S=AtStart W=Within E=AtEnd B=Beyond
//!               └───┴───┴───┴───┴───┼───┴───┘
//!               └──── len = 5 ──────┘
//! ```
//!
//! [`BoundedView::at`]: crate::BoundedView::at
//! [`BoundedViewMut::try_set`]: crate::BoundedViewMut::try_set
//! [`BoundedViewMut::insert`]: crate::BoundedViewMut::insert

use crate::{CollectionError, CollectionResult};

/// Result of array access bounds checking.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrayAccessBoundsStatus {
    /// Index points to an existing item (`index < length`).
    Within,

    /// Index has overflowed (`index >= length`).
    Overflowed,
}

/// Result of cursor position bounds checking. Distinguishes "at end" (valid for
/// insertion) from "beyond" (invalid).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorPositionBoundsStatus {
    /// Index is at the start (`index == 0`). For empty content, this takes precedence over
    /// `AtEnd`.
    AtStart,

    /// Index points to existing content (`0 < index < length`).
    Within,

    /// Index is at the end boundary (`index == length && index > 0`).
    AtEnd,

    /// Index exceeds the end boundary (`index > length`).
    Beyond,
}

impl CursorPositionBoundsStatus {
    /// `true` for every status except [`Self::Beyond`].
    #[must_use]
    pub fn is_valid(self) -> bool { !matches!(self, Self::Beyond) }
}

/// Both bounds checking paradigms, for plain `usize` indices.
///
/// ```
/// use r3bl_collections::{ArrayAccessBoundsStatus, BoundsCheck, CursorPositionBoundsStatus};
///
/// assert_eq!(4_usize.check_array_access_bounds(5), ArrayAccessBoundsStatus::Within);
/// assert_eq!(5_usize.check_array_access_bounds(5), ArrayAccessBoundsStatus::Overflowed);
/// assert_eq!(5_usize.check_cursor_position_bounds(5), CursorPositionBoundsStatus::AtEnd);
/// assert_eq!(6_usize.check_cursor_position_bounds(5), CursorPositionBoundsStatus::Beyond);
/// ```
pub trait BoundsCheck {
    fn check_array_access_bounds(self, length: usize) -> ArrayAccessBoundsStatus;

    fn check_cursor_position_bounds(self, length: usize) -> CursorPositionBoundsStatus;
}

impl BoundsCheck for usize {
    fn check_array_access_bounds(self, length: usize) -> ArrayAccessBoundsStatus {
        if self < length {
            ArrayAccessBoundsStatus::Within
        } else {
            ArrayAccessBoundsStatus::Overflowed
        }
    }

    fn check_cursor_position_bounds(self, length: usize) -> CursorPositionBoundsStatus {
        if self == 0 {
            CursorPositionBoundsStatus::AtStart
        } else if self < length {
            CursorPositionBoundsStatus::Within
        } else if self == length {
            CursorPositionBoundsStatus::AtEnd
        } else {
            CursorPositionBoundsStatus::Beyond
        }
    }
}

/// Validate `array[index..]` against the number of items about to be written into it,
/// and return exactly that many slots.
pub(crate) fn checked_destination<T>(
    array: &mut [T],
    index: usize,
    required: usize,
) -> CollectionResult<&mut [T]> {
    let array_len = array.len();
    if index > array_len {
        return CollectionError::out_of_range("index", index, array_len);
    }
    let available = array_len - index;
    if available < required {
        return Err(CollectionError::InsufficientCapacity {
            param: "array",
            required,
            available,
        });
    }
    Ok(&mut array[index..index + required])
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0, 3, ArrayAccessBoundsStatus::Within)]
    #[test_case(2, 3, ArrayAccessBoundsStatus::Within)]
    #[test_case(3, 3, ArrayAccessBoundsStatus::Overflowed)]
    #[test_case(0, 0, ArrayAccessBoundsStatus::Overflowed)]
    fn test_array_access(index: usize, length: usize, expected: ArrayAccessBoundsStatus) {
        assert_eq2!(index.check_array_access_bounds(length), expected);
    }

    #[test_case(0, 0, CursorPositionBoundsStatus::AtStart)]
    #[test_case(0, 3, CursorPositionBoundsStatus::AtStart)]
    #[test_case(1, 3, CursorPositionBoundsStatus::Within)]
    #[test_case(3, 3, CursorPositionBoundsStatus::AtEnd)]
    #[test_case(4, 3, CursorPositionBoundsStatus::Beyond)]
    #[test_case(1, 0, CursorPositionBoundsStatus::Beyond)]
    fn test_cursor_position(
        index: usize,
        length: usize,
        expected: CursorPositionBoundsStatus,
    ) {
        let status = index.check_cursor_position_bounds(length);
        assert_eq2!(status, expected);
        assert_eq2!(status.is_valid(), index <= length);
    }
}
