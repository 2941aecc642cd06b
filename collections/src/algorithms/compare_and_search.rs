// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Comparison, predicates, and searching. The binary searches require the range to be
//! sorted under the same ordering they are given.

use std::cmp::Ordering;

use crate::Readable;

/// `true` if both ranges have the same length and equal items at every position.
pub fn are_equal<T, V1, V2>(first: &V1, second: &V2) -> bool
where
    T: PartialEq,
    V1: Readable<Item = T> + ?Sized,
    V2: Readable<Item = T> + ?Sized,
{
    are_equal_by(first, second, |a: &T, b: &T| a == b)
}

/// Like [`are_equal`], but the items may be of different types and `equals` decides.
pub fn are_equal_by<V1, V2, E>(first: &V1, second: &V2, mut equals: E) -> bool
where
    V1: Readable + ?Sized,
    V2: Readable + ?Sized,
    E: FnMut(&V1::Item, &V2::Item) -> bool,
{
    first.len() == second.len()
        && first
            .items()
            .zip(second.items())
            .all(|(a, b)| equals(a, b))
}

/// Lexicographic comparison. The first unequal pair decides. If one range is a prefix of
/// the other, the shorter one is less.
pub fn compare<T, V1, V2>(first: &V1, second: &V2) -> Ordering
where
    T: Ord,
    V1: Readable<Item = T> + ?Sized,
    V2: Readable<Item = T> + ?Sized,
{
    compare_by(first, second, T::cmp)
}

pub fn compare_by<T, V1, V2, F>(first: &V1, second: &V2, mut compare: F) -> Ordering
where
    V1: Readable<Item = T> + ?Sized,
    V2: Readable<Item = T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    for (a, b) in first.items().zip(second.items()) {
        match compare(a, b) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    first.len().cmp(&second.len())
}

pub fn is_sorted<V>(view: &V) -> bool
where
    V: Readable + ?Sized,
    V::Item: Ord,
{
    is_sorted_by(view, Ord::cmp)
}

/// `true` if no item compares greater than the one after it.
pub fn is_sorted_by<V, F>(view: &V, mut compare: F) -> bool
where
    V: Readable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    view.items()
        .zip(view.items().skip(1))
        .all(|(a, b)| compare(a, b) != Ordering::Greater)
}

/// `true` for an empty range.
pub fn true_for_all<V, P>(view: &V, mut predicate: P) -> bool
where
    V: Readable + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    view.items().all(|item| predicate(item))
}

pub fn exists<V, P>(view: &V, predicate: P) -> bool
where
    V: Readable + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    find_index(view, predicate).is_some()
}

pub fn find_index<V, P>(view: &V, mut predicate: P) -> Option<usize>
where
    V: Readable + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    view.items().position(|item| predicate(item))
}

pub fn index_of<V>(view: &V, value: &V::Item) -> Option<usize>
where
    V: Readable + ?Sized,
    V::Item: PartialEq,
{
    find_index(view, |item| item == value)
}

pub fn contains<V>(view: &V, value: &V::Item) -> bool
where
    V: Readable + ?Sized,
    V::Item: PartialEq,
{
    index_of(view, value).is_some()
}

/// `true` if any item of `view` equals any item of `candidates`.
pub fn contains_any<T, V1, V2>(view: &V1, candidates: &V2) -> bool
where
    T: PartialEq,
    V1: Readable<Item = T> + ?Sized,
    V2: Readable<Item = T> + ?Sized,
{
    candidates.items().any(|candidate| contains(view, candidate))
}

/// The item whose `selector(item)` is largest, or `None` for an empty range. Among equal
/// keys the first one wins.
///
/// ```
/// use r3bl_collections::{max_by_key, min_by_key};
///
/// let words = ["pear", "fig", "banana", "plum", "kiwi"];
/// assert_eq!(max_by_key(&words, |word: &&str| word.len()), Some(&"banana"));
/// assert_eq!(min_by_key(&words, |word: &&str| word.len()), Some(&"fig"));
/// ```
pub fn max_by_key<V, K, S>(view: &V, mut selector: S) -> Option<&V::Item>
where
    V: Readable + ?Sized,
    K: Ord,
    S: FnMut(&V::Item) -> K,
{
    select_by_key(view, &mut selector, Ordering::Greater)
}

/// The item whose `selector(item)` is smallest, or `None` for an empty range. Among equal
/// keys the first one wins.
pub fn min_by_key<V, K, S>(view: &V, mut selector: S) -> Option<&V::Item>
where
    V: Readable + ?Sized,
    K: Ord,
    S: FnMut(&V::Item) -> K,
{
    select_by_key(view, &mut selector, Ordering::Less)
}

/// Replace the current pick only when the new key compares as `wins`.
fn select_by_key<'a, V, K, S>(
    view: &'a V,
    selector: &mut S,
    wins: Ordering,
) -> Option<&'a V::Item>
where
    V: Readable + ?Sized,
    K: Ord,
    S: FnMut(&V::Item) -> K,
{
    let mut items = view.items();
    let first = items.next()?;
    let first_key = selector(first);
    let (picked, _) = items.fold((first, first_key), |(picked, picked_key), item| {
        let key = selector(item);
        if key.cmp(&picked_key) == wins {
            (item, key)
        } else {
            (picked, picked_key)
        }
    });
    Some(picked)
}

/// Index of the first item that is not less than `value`, or `len` if there is none.
pub fn lower_bound<V>(view: &V, value: &V::Item) -> usize
where
    V: Readable + ?Sized,
    V::Item: Ord,
{
    lower_bound_by(view, value, Ord::cmp)
}

pub fn lower_bound_by<V, F>(view: &V, value: &V::Item, mut compare: F) -> usize
where
    V: Readable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    partition_point(view, |item| compare(item, value) == Ordering::Less)
}

/// Index of the first item that is greater than `value`, or `len` if there is none.
pub fn upper_bound<V>(view: &V, value: &V::Item) -> usize
where
    V: Readable + ?Sized,
    V::Item: Ord,
{
    upper_bound_by(view, value, Ord::cmp)
}

pub fn upper_bound_by<V, F>(view: &V, value: &V::Item, mut compare: F) -> usize
where
    V: Readable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    partition_point(view, |item| compare(item, value) != Ordering::Greater)
}

/// `Ok(index)` of an item equal to `value`, or `Err(index)` where it could be inserted
/// to keep the range sorted. With duplicates, any of the equal items may be returned.
///
/// ```
/// use r3bl_collections::binary_search;
///
/// let sorted = [1, 3, 5, 7];
/// assert_eq!(binary_search(&sorted, &5), Ok(2));
/// assert_eq!(binary_search(&sorted, &4), Err(2));
/// ```
///
/// # Errors
///
/// `Err` carries the insertion point when `value` is absent.
pub fn binary_search<V>(view: &V, value: &V::Item) -> Result<usize, usize>
where
    V: Readable + ?Sized,
    V::Item: Ord,
{
    binary_search_by(view, value, Ord::cmp)
}

/// # Errors
///
/// `Err` carries the insertion point when `value` is absent.
pub fn binary_search_by<V, F>(view: &V, value: &V::Item, mut compare: F) -> Result<usize, usize>
where
    V: Readable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let index = lower_bound_by(view, value, &mut compare);
    match view.get(index) {
        Some(item) if compare(item, value) == Ordering::Equal => Ok(index),
        _ => Err(index),
    }
}

/// First index for which `is_before` is `false`, assuming it holds for a prefix.
fn partition_point<V, P>(view: &V, mut is_before: P) -> usize
where
    V: Readable + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    let (mut lo, mut hi) = (0, view.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if view.get(mid).is_some_and(&mut is_before) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{CommonResult, ToBoundedView, assert_eq2, ok};

    #[test]
    fn test_are_equal() {
        assert!(are_equal(&vec![1, 2, 3], &[1, 2, 3]));
        assert!(!are_equal(&vec![1, 2, 3], &[1, 2]));
        assert!(!are_equal(&vec![1, 2, 3], &[1, 2, 4]));
    }

    #[test]
    fn test_are_equal_by_across_types() {
        let numbers = [1, 2, 3];
        let labels = vec!["1", "2", "3"];
        assert!(are_equal_by(&numbers, &labels, |n: &i32, s: &&str| {
            n.to_string() == *s
        }));
    }

    #[test_case(&[1, 2, 3], &[1, 2, 3], Ordering::Equal)]
    #[test_case(&[1, 2], &[1, 2, 3], Ordering::Less)]
    #[test_case(&[1, 4], &[1, 2, 3], Ordering::Greater)]
    #[test_case(&[], &[1], Ordering::Less)]
    fn test_compare(first: &[i32], second: &[i32], expected: Ordering) {
        assert_eq2!(compare(first, second), expected);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 1, 2, 5]));
        assert!(!is_sorted(&[2, 1]));
        assert!(is_sorted_by(&[5, 3, 3, 1], |a: &i32, b: &i32| b.cmp(a)));
        let empty: [i32; 0] = [];
        assert!(is_sorted(&empty));
    }

    #[test]
    fn test_predicates_on_window() -> CommonResult<()> {
        let numbers = vec![1, 2, 3, 4, 5, 6];
        let middle = numbers.to_view_window(1, 3)?;
        assert!(true_for_all(&middle, |n: &i32| (2..=4).contains(n)));
        assert!(exists(&middle, |n: &i32| *n == 3));
        assert!(!exists(&middle, |n: &i32| *n == 6));
        assert_eq2!(find_index(&middle, |n: &i32| n % 2 == 1), Some(1));
        assert_eq2!(index_of(&middle, &4), Some(2));
        assert!(!contains(&middle, &1));
        assert!(contains_any(&middle, &[9, 8, 4]));
        assert!(!contains_any(&middle, &[1, 5]));
        ok!()
    }

    #[test]
    fn test_max_and_min_by_key() -> CommonResult<()> {
        let readings = vec![(1, -4), (2, 7), (3, -7), (4, 2), (5, 7)];
        let magnitude = |reading: &(i32, i32)| reading.1.abs();

        // Ties keep the earliest item.
        assert_eq2!(max_by_key(&readings, magnitude), Some(&(2, 7)));
        assert_eq2!(min_by_key(&readings, magnitude), Some(&(4, 2)));

        let tail = readings.to_view_from(2)?;
        assert_eq2!(max_by_key(&tail, magnitude), Some(&(3, -7)));
        assert_eq2!(min_by_key(&tail, |reading: &(i32, i32)| reading.1), Some(&(3, -7)));

        let empty = readings.to_view_from(5)?;
        assert_eq2!(max_by_key(&empty, magnitude), None);
        assert_eq2!(min_by_key(&empty, magnitude), None);
        ok!()
    }

    #[test_case(0, 0, 0)]
    #[test_case(2, 1, 3)]
    #[test_case(3, 3, 3)]
    #[test_case(9, 5, 5)]
    fn test_bounds(value: i32, expected_lower: usize, expected_upper: usize) {
        let sorted = [1, 2, 2, 4, 8];
        assert_eq2!(lower_bound(&sorted, &value), expected_lower);
        assert_eq2!(upper_bound(&sorted, &value), expected_upper);
    }

    #[test]
    fn test_binary_search_by_descending() {
        let descending = vec![9, 7, 5, 3];
        let by = |a: &i32, b: &i32| b.cmp(a);
        assert_eq2!(binary_search_by(&descending, &7, by), Ok(1));
        assert_eq2!(binary_search_by(&descending, &6, by), Err(2));
        assert_eq2!(binary_search_by(&descending, &1, by), Err(4));
    }
}
