// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binary max-heap maintenance over any [`Mutable`] range (usually a view).
//!
//! The heap is embedded in array order: the children of position `i` are `2i + 1` and
//! `2i + 2`. Under the comparator `compare`, every parent is "not less" than its
//! children. Passing a reversed comparator produces a min-heap with the same code.
//!
//! ```text
//!              ┌────┐
//!              │ 9  │ 0
//!              └─┬──┘
//!          ┌─────┴─────┐
//!        ┌─┴──┐      ┌─┴──┐
//!        │ 7  │ 1    │ 8  │ 2        array order: [9, 7, 8, 3, 5, 1]
//!        └─┬──┘      └─┬──┘
//!       ┌──┴──┐        │
//!     ┌─┴─┐ ┌─┴─┐    ┌─┴─┐
//!     │ 3 │ │ 5 │    │ 1 │
//!     └───┘ └───┘    └───┘
//!       3     4        5
//! ```
//!
//! Duplicate keys are allowed. The order among equal keys is unspecified.

use std::cmp::Ordering;

use tracing::trace;

use crate::{Mutable, Readable};

/// Rearrange `view` so it satisfies the heap invariant, using bottom-up sift-down (linear
/// time).
pub fn make_heap<V>(view: &mut V)
where
    V: Mutable + ?Sized,
    V::Item: Ord,
{
    make_heap_by(view, Ord::cmp);
}

pub fn make_heap_by<V, F>(view: &mut V, mut compare: F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let len = view.len();
    if len <= 1 {
        trace!(message = "make_heap is a no-op", len);
        return;
    }
    for root in (0..len / 2).rev() {
        sift_down(view, root, len, &mut compare);
    }
}

/// Restore the heap invariant after appending one item. Everything but the last item
/// must already be a heap.
pub fn heap_add<V>(view: &mut V)
where
    V: Mutable + ?Sized,
    V::Item: Ord,
{
    heap_add_by(view, Ord::cmp);
}

pub fn heap_add_by<V, F>(view: &mut V, mut compare: F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let len = view.len();
    if len <= 1 {
        trace!(message = "heap_add is a no-op", len);
        return;
    }
    sift_up(view, len - 1, &mut compare);
}

/// Move the root (highest priority item) to the last position, and restore the heap
/// invariant over `[0, len - 1)`. The caller shrinks the range by one to actually remove
/// the popped item. No-op for 0 or 1 items.
pub fn heap_remove<V>(view: &mut V)
where
    V: Mutable + ?Sized,
    V::Item: Ord,
{
    heap_remove_by(view, Ord::cmp);
}

pub fn heap_remove_by<V, F>(view: &mut V, mut compare: F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let len = view.len();
    if len <= 1 {
        trace!(message = "heap_remove is a no-op", len);
        return;
    }
    let last = len - 1;
    view.swap(0, last);
    sift_down(view, 0, last, &mut compare);
}

pub fn is_heap<V>(view: &V) -> bool
where
    V: Readable + ?Sized,
    V::Item: Ord,
{
    is_heap_by(view, Ord::cmp)
}

pub fn is_heap_by<V, F>(view: &V, mut compare: F) -> bool
where
    V: Readable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    (1..view.len()).all(|child| !is_less(view, parent_of(child), child, &mut compare))
}

fn parent_of(child: usize) -> usize { (child - 1) / 2 }

/// `view[a] < view[b]` under `compare`. Missing positions compare as "not less".
fn is_less<V, F>(view: &V, a: usize, b: usize, compare: &mut F) -> bool
where
    V: Readable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    match (view.get(a), view.get(b)) {
        (Some(lhs), Some(rhs)) => compare(lhs, rhs) == Ordering::Less,
        _ => false,
    }
}

/// Push `view[root]` down until both of its children (within `[0, end)`) are not greater
/// than it.
pub(crate) fn sift_down<V, F>(view: &mut V, root: usize, end: usize, compare: &mut F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let mut parent = root;
    loop {
        let left = 2 * parent + 1;
        if left >= end {
            break;
        }
        let right = left + 1;
        let larger = if right < end && is_less(view, left, right, compare) {
            right
        } else {
            left
        };
        if !is_less(view, parent, larger, compare) {
            break;
        }
        view.swap(parent, larger);
        parent = larger;
    }
}

fn sift_up<V, F>(view: &mut V, start: usize, compare: &mut F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let mut child = start;
    while child > 0 {
        let parent = parent_of(child);
        if !is_less(view, parent, child, compare) {
            break;
        }
        view.swap(parent, child);
        child = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommonResult, ToBoundedView, assert_eq2, grow_with, ok,
                test_fixtures::SentinelWrapped};

    fn one_to_hundred() -> Vec<i32> {
        let mut items = vec![];
        grow_with(&mut items, 100, |index| i32::try_from(index + 1).unwrap_or(0));
        items
    }

    #[test]
    fn test_make_heap() {
        let mut items = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        assert!(!is_heap(&items));
        make_heap(&mut items);
        assert!(is_heap(&items));
        assert_eq2!(items[0], 9);
    }

    #[test]
    fn test_heap_remove_moves_root_to_end() {
        let mut items = one_to_hundred();
        make_heap(&mut items);
        heap_remove(&mut items);
        assert_eq2!(items.last(), Some(&100));
        assert!(is_heap(&items[..99]));
    }

    #[test]
    fn test_reversed_comparator_is_min_heap() {
        let mut items = one_to_hundred();
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        make_heap_by(&mut items, reversed);
        assert!(is_heap_by(&items, reversed));
        heap_remove_by(&mut items, reversed);
        assert_eq2!(items.last(), Some(&1));
    }

    #[test]
    fn test_repeated_remove_is_heap_sort() -> CommonResult<()> {
        let mut items = vec![5, 3, 8, 1, 9, 2, 7, 7, 0];
        make_heap(&mut items);
        let mut view = items.to_view_mut();
        while view.count() > 1 {
            heap_remove(&mut view);
            let count = view.count();
            view.set_count(count - 1)?;
            assert!(is_heap(&view));
        }
        assert_eq2!(items, vec![0, 1, 2, 3, 5, 7, 7, 8, 9]);
        ok!()
    }

    #[test]
    fn test_heap_add_after_push() {
        let mut items: Vec<i32> = vec![];
        for value in [4, 8, 1, 8, 3, 10] {
            items.push(value);
            heap_add(&mut items);
            assert!(is_heap(&items));
        }
        assert_eq2!(items[0], 10);
    }

    #[test]
    fn test_no_op_on_tiny_ranges() {
        let mut empty: Vec<i32> = vec![];
        make_heap(&mut empty);
        heap_remove(&mut empty);
        heap_add(&mut empty);
        assert!(is_heap(&empty));

        let mut single = [42];
        heap_remove(&mut single);
        assert_eq2!(single, [42]);
    }

    #[test]
    fn test_heap_stays_inside_view_window() -> CommonResult<()> {
        let mut fixture = SentinelWrapped::new([2, 7, 1, 8, 2, 8], i32::MAX, 3);
        {
            let mut view = fixture.view_mut()?;
            make_heap(&mut view);
            assert!(is_heap(&view));
            heap_remove(&mut view);
            assert_eq2!(view[5], 8);
        }
        fixture.assert_sentinels_intact();
        ok!()
    }
}
