// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pairwise swapping, reversal, and rotation.

use std::mem;

use tracing::debug;

use super::CopyResult;
use crate::{Mutable, Readable};

/// Swap `first[i]` with `second[i]` for every `i` that is in range for both. Returns the
/// number of pairs swapped. The tail of the longer range is left alone.
///
/// ```text
/// first   [1, 3, 5, 7]  ──▶  [2, 4, 6, 7]
/// second  [2, 4, 6]     ──▶  [1, 3, 5]      returns 3
/// ```
pub fn swap_ranges<T, V1, V2>(first: &mut V1, second: &mut V2) -> usize
where
    V1: Mutable<Item = T> + ?Sized,
    V2: Mutable<Item = T> + ?Sized,
{
    let count = first.len().min(second.len());
    for index in 0..count {
        if let (Some(lhs), Some(rhs)) = (first.get_mut(index), second.get_mut(index)) {
            mem::swap(lhs, rhs);
        }
    }
    count
}

pub fn reverse<V>(view: &mut V)
where
    V: Mutable + ?Sized,
{
    let len = view.len();
    reverse_range(view, 0, len);
}

/// Rotate in place so that the item at `shift` becomes the first. Shifts larger than the
/// length wrap around.
pub fn rotate_left<V>(view: &mut V, shift: usize)
where
    V: Mutable + ?Sized,
{
    let len = view.len();
    if len == 0 {
        return;
    }
    let shift = shift % len;
    if shift == 0 {
        return;
    }
    reverse_range(view, 0, shift);
    reverse_range(view, shift, len);
    reverse_range(view, 0, len);
}

/// Rotate in place so that the last `shift` items move to the front.
pub fn rotate_right<V>(view: &mut V, shift: usize)
where
    V: Mutable + ?Sized,
{
    let len = view.len();
    if len == 0 {
        return;
    }
    rotate_left(view, len - shift % len);
}

/// Copy `source`, rotated left by `shift`, into `destination` without modifying
/// `source`. Stops early when `destination` is full.
///
/// [`CopyResult::source_offset`] counts items consumed in rotated order, so it equals
/// [`CopyResult::destination_offset`].
pub fn copy_rotated_left<T, S, D>(source: &S, shift: usize, destination: &mut D) -> CopyResult
where
    T: Clone,
    S: Readable<Item = T> + ?Sized,
    D: Mutable<Item = T> + ?Sized,
{
    let len = source.len();
    if len == 0 {
        return CopyResult::default();
    }
    let shift = shift % len;
    let count = len.min(destination.len());
    for index in 0..count {
        let from = (shift + index) % len;
        if let (Some(item), Some(slot)) = (source.get(from), destination.get_mut(index)) {
            slot.clone_from(item);
        }
    }
    if count < len {
        debug!(
            message = "copy_rotated_left stopped early, destination is full",
            source_len = len,
            copied = count
        );
    }
    CopyResult {
        source_offset: count,
        destination_offset: count,
    }
}

/// Reverse the items in `[start, end)`.
fn reverse_range<V>(view: &mut V, start: usize, end: usize)
where
    V: Mutable + ?Sized,
{
    let (mut lo, mut hi) = (start, end);
    while lo + 1 < hi {
        hi -= 1;
        view.swap(lo, hi);
        lo += 1;
    }
}
