// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Mutable, Readable};

/// Rearrange `view` in place so every item that satisfies `predicate` comes before every
/// item that does not. Returns the boundary: the number of items that satisfy it. The
/// relative order within each side is not preserved.
///
/// The two sides can then be addressed without copying, via `nest_window(0, boundary)`
/// and `nest(boundary)`.
///
/// ```
/// use r3bl_collections::partition;
///
/// let mut numbers = vec![1, 2, 3, 4, 5, 6];
/// let boundary = partition(&mut numbers, |n| n % 2 == 0);
/// assert_eq!(boundary, 3);
/// assert!(numbers[..boundary].iter().all(|n| n % 2 == 0));
/// assert!(numbers[boundary..].iter().all(|n| n % 2 == 1));
/// ```
pub fn partition<V, P>(view: &mut V, mut predicate: P) -> usize
where
    V: Mutable + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    let mut boundary = 0;
    for index in 0..view.len() {
        let satisfies = view.get(index).is_some_and(&mut predicate);
        if satisfies {
            if index != boundary {
                view.swap(boundary, index);
            }
            boundary += 1;
        }
    }
    boundary
}

/// `true` if no item that satisfies `predicate` comes after one that does not.
pub fn is_partitioned<V, P>(view: &V, mut predicate: P) -> bool
where
    V: Readable + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    let mut seen_unsatisfied = false;
    for item in view.items() {
        if predicate(item) {
            if seen_unsatisfied {
                return false;
            }
        } else {
            seen_unsatisfied = true;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommonResult, ToBoundedView, assert_eq2, ok, test_fixtures::SentinelWrapped};

    #[test]
    fn test_partition_inside_window() -> CommonResult<()> {
        let mut fixture = SentinelWrapped::new([7, 2, 9, 4, 4, 1, 8], 0, 2);
        let boundary = {
            let mut view = fixture.view_mut()?;
            let boundary = partition(&mut view, |n: &i32| *n > 4);
            assert!(is_partitioned(&view, |n: &i32| *n > 4));
            boundary
        };
        assert_eq2!(boundary, 3);
        fixture.assert_sentinels_intact();

        let view = fixture.view()?;
        let mut high = view.nest_window(0, boundary)?.to_vec();
        high.sort_unstable();
        assert_eq2!(high, vec![7, 8, 9]);
        let mut low = view.nest(boundary)?.to_vec();
        low.sort_unstable();
        assert_eq2!(low, vec![1, 2, 4, 4]);
        ok!()
    }

    #[test]
    fn test_partition_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        assert_eq2!(partition(&mut empty, |_| true), 0);

        let mut all = [2, 4, 6];
        assert_eq2!(partition(&mut all, |n: &i32| n % 2 == 0), 3);
        assert_eq2!(all, [2, 4, 6]);

        let mut none = vec![1, 3];
        assert_eq2!(partition(&mut none.to_view_mut(), |n: &i32| n % 2 == 0), 0);
    }

    #[test]
    fn test_is_partitioned() {
        assert!(is_partitioned(&[true, true, false], |b: &bool| *b));
        assert!(is_partitioned(&[false, false], |b: &bool| *b));
        assert!(!is_partitioned(&[true, false, true], |b: &bool| *b));
        let empty: [bool; 0] = [];
        assert!(is_partitioned(&empty, |b: &bool| *b));
    }
}
