// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Copying between ranges, and growing or filling a single range.

use tracing::debug;

use super::CopyResult;
use crate::{Mutable, Readable, Resizable};

/// Copy `source` into the front of `destination`, stopping early when `destination` is
/// full.
///
/// ```
/// use r3bl_collections::{CopyResult, copy};
///
/// let mut destination = [0; 2];
/// let result = copy(&[7, 8, 9], &mut destination);
/// assert_eq!(destination, [7, 8]);
/// assert_eq!(result, CopyResult { source_offset: 2, destination_offset: 2 });
/// ```
pub fn copy<T, S, D>(source: &S, destination: &mut D) -> CopyResult
where
    T: Clone,
    S: Readable<Item = T> + ?Sized,
    D: Mutable<Item = T> + ?Sized,
{
    let mut offset = 0;
    while let (Some(item), Some(slot)) = (source.get(offset), destination.get_mut(offset)) {
        slot.clone_from(item);
        offset += 1;
    }
    if offset < source.len() {
        debug!(
            message = "copy stopped early, destination is full",
            source_len = source.len(),
            copied = offset
        );
    }
    CopyResult {
        source_offset: offset,
        destination_offset: offset,
    }
}

/// Append every item of `source` to `destination`. Returns the number of items appended.
pub fn add<T, S, D>(source: &S, destination: &mut D) -> usize
where
    T: Clone,
    S: Readable<Item = T> + ?Sized,
    D: Resizable<Item = T> + ?Sized,
{
    for item in source.items() {
        destination.push_back(item.clone());
    }
    source.len()
}

/// Append clones of `value` until `view` holds `target_count` items. Does nothing if it
/// already holds that many or more.
pub fn grow<V>(view: &mut V, target_count: usize, value: V::Item)
where
    V: Resizable + ?Sized,
    V::Item: Clone,
{
    grow_with(view, target_count, |_| value.clone());
}

/// Append `generator(index)` until `view` holds `target_count` items, where `index` is
/// the view relative position the new item lands at.
///
/// ```
/// use r3bl_collections::grow_with;
///
/// let mut squares = vec![0, 1];
/// grow_with(&mut squares, 5, |index| index * index);
/// assert_eq!(squares, vec![0, 1, 4, 9, 16]);
/// ```
pub fn grow_with<V, G>(view: &mut V, target_count: usize, mut generator: G)
where
    V: Resizable + ?Sized,
    G: FnMut(usize) -> V::Item,
{
    for index in view.len()..target_count {
        view.push_back(generator(index));
    }
}

pub fn fill<V>(view: &mut V, value: &V::Item)
where
    V: Mutable + ?Sized,
    V::Item: Clone,
{
    fill_with(view, |_| value.clone());
}

/// Overwrite every item with `generator(index)`.
pub fn fill_with<V, G>(view: &mut V, mut generator: G)
where
    V: Mutable + ?Sized,
    G: FnMut(usize) -> V::Item,
{
    for index in 0..view.len() {
        if let Some(slot) = view.get_mut(index) {
            *slot = generator(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use smallstr::SmallString;

    use super::*;
    use crate::{CommonResult, ToBoundedView, assert_eq2, ok, test_fixtures::SentinelWrapped};

    type SmallStringBackingStore = SmallString<[u8; 32]>;

    #[test]
    fn test_copy_into_larger_destination() {
        let mut destination = vec![0; 5];
        let result = copy(&[1, 2, 3], &mut destination);
        assert_eq2!(destination, vec![1, 2, 3, 0, 0]);
        assert_eq2!(
            result,
            CopyResult {
                source_offset: 3,
                destination_offset: 3,
            }
        );
    }

    #[test]
    fn test_copy_into_window_stops_early() -> CommonResult<()> {
        let mut fixture = SentinelWrapped::new([0; 3], -1, 2);
        let result = copy(&[5, 6, 7, 8, 9], &mut fixture.view_mut()?);
        assert_eq2!(fixture.items(), &[5, 6, 7]);
        assert_eq2!(result.source_offset, 3);
        fixture.assert_sentinels_intact();
        ok!()
    }

    #[test]
    fn test_copy_non_copy_items() {
        let source: Vec<SmallStringBackingStore> =
            vec!["alpha".into(), "beta".into()];
        let mut destination: Vec<SmallStringBackingStore> = vec!["".into(); 2];
        let _unused = copy(&source, &mut destination);
        assert_eq2!(destination[1].as_str(), "beta");
    }

    #[test]
    fn test_add_appends_at_view_end() -> CommonResult<()> {
        let mut container = vec![1, 2, 9];
        {
            let mut view = container.to_view_window_mut(0, 2)?;
            assert_eq2!(add(&[3, 4], &mut view), 2);
            assert_eq2!(view.to_vec(), vec![1, 2, 3, 4]);
        }
        assert_eq2!(container, vec![1, 2, 3, 4, 9]);
        ok!()
    }

    #[test]
    fn test_grow() {
        let mut items = vec![1];
        grow(&mut items, 3, 0);
        assert_eq2!(items, vec![1, 0, 0]);

        // Already at or above the target.
        grow(&mut items, 2, 7);
        assert_eq2!(items, vec![1, 0, 0]);
    }

    #[test]
    fn test_grow_with_uses_view_relative_index() -> CommonResult<()> {
        let mut container = vec![100, 200];
        {
            let mut view = container.to_view_from_mut(2)?;
            grow_with(&mut view, 3, |index| index * 10);
        }
        assert_eq2!(container, vec![100, 200, 0, 10, 20]);
        ok!()
    }

    #[test]
    fn test_fill_and_fill_with() -> CommonResult<()> {
        let mut fixture = SentinelWrapped::new([0; 4], 9, 1);
        fill(&mut fixture.view_mut()?, &3);
        assert_eq2!(fixture.items(), &[3, 3, 3, 3]);
        fill_with(&mut fixture.view_mut()?, |index| {
            i32::try_from(index).unwrap_or_default()
        });
        assert_eq2!(fixture.items(), &[0, 1, 2, 3]);
        fixture.assert_sentinels_intact();
        ok!()
    }
}
