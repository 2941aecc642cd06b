// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use crate::{Mutable, heap::heap_engine::sift_down, make_heap_by};

/// Ranges up to this length are insertion sorted. Longer ones are heap sorted.
const INSERTION_SORT_MAX_LEN: usize = 16;

/// Sort `view` in place, ascending. Not stable.
///
/// Works on anything [`Mutable`], so sorting a window of a larger container only touches
/// that window:
///
/// ```
/// use r3bl_collections::{ToBoundedView, sort};
///
/// let mut numbers = vec![9, 4, 3, 1, 0];
/// sort(&mut numbers.to_view_window_mut(1, 3).unwrap());
/// assert_eq!(numbers, vec![9, 1, 3, 4, 0]);
/// ```
pub fn sort<V>(view: &mut V)
where
    V: Mutable + ?Sized,
    V::Item: Ord,
{
    sort_by(view, Ord::cmp);
}

pub fn sort_by<V, F>(view: &mut V, mut compare: F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    if view.len() <= INSERTION_SORT_MAX_LEN {
        insertion_sort(view, &mut compare);
    } else {
        heap_sort(view, &mut compare);
    }
}

fn insertion_sort<V, F>(view: &mut V, compare: &mut F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    for start in 1..view.len() {
        let mut index = start;
        while index > 0 {
            let out_of_order = match (view.get(index - 1), view.get(index)) {
                (Some(prev), Some(current)) => compare(prev, current) == Ordering::Greater,
                _ => false,
            };
            if !out_of_order {
                break;
            }
            view.swap(index - 1, index);
            index -= 1;
        }
    }
}

/// Build a max-heap, then repeatedly move the root behind the shrinking heap.
fn heap_sort<V, F>(view: &mut V, compare: &mut F)
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    make_heap_by(view, &mut *compare);
    for end in (1..view.len()).rev() {
        view.swap(0, end);
        sift_down(view, 0, end, compare);
    }
}
