// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures shared by the unit tests in this crate.

use std::fmt::Debug;

use crate::{BoundedView, BoundedViewMut, CollectionResult};

/// Surrounds a run of items with `padding` sentinel values on each side, and hands out
/// views over just the items. Algorithms under test receive the view, and
/// [`SentinelWrapped::assert_sentinels_intact`] proves that they never touched anything
/// outside of its window.
///
/// ```text
/// ┌───┬───┬───┬───┬───┬───┬───┬───┐
/// │ S │ S │ 1 │ 2 │ 3 │ 4 │ S │ S │   padding = 2
/// └───┴───┴───┴───┴───┴───┴───┴───┘
///         └──── view ─────┘
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SentinelWrapped<T> {
    pub container: Vec<T>,
    sentinel: T,
    padding: usize,
}

impl<T: Clone + PartialEq + Debug> SentinelWrapped<T> {
    pub fn new(items: impl IntoIterator<Item = T>, sentinel: T, padding: usize) -> Self {
        let mut container = vec![sentinel.clone(); padding];
        container.extend(items);
        container.extend(std::iter::repeat_n(sentinel.clone(), padding));
        Self {
            container,
            sentinel,
            padding,
        }
    }

    pub fn item_count(&self) -> usize { self.container.len() - 2 * self.padding }

    pub fn items(&self) -> &[T] {
        &self.container[self.padding..self.padding + self.item_count()]
    }

    pub fn view(&self) -> CollectionResult<BoundedView<'_, Vec<T>>> {
        BoundedView::from_window(&self.container, self.padding, self.item_count())
    }

    pub fn view_mut(&mut self) -> CollectionResult<BoundedViewMut<'_, Vec<T>>> {
        let count = self.item_count();
        BoundedViewMut::from_window(&mut self.container, self.padding, count)
    }

    /// Panics if any of the sentinels on either side were overwritten or shifted.
    pub fn assert_sentinels_intact(&self) {
        let len = self.container.len();
        assert!(len >= 2 * self.padding, "sentinels were removed");
        let header = &self.container[..self.padding];
        let footer = &self.container[len - self.padding..];
        assert!(
            header.iter().chain(footer).all(|item| *item == self.sentinel),
            "sentinels were overwritten: {header:?} .. {footer:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mutable, assert_eq2};

    #[test]
    fn test_sentinels_surround_items() {
        let mut fixture = SentinelWrapped::new([1, 2, 3], -1, 2);
        assert_eq2!(fixture.container, vec![-1, -1, 1, 2, 3, -1, -1]);
        assert_eq2!(fixture.items(), &[1, 2, 3]);
        fixture.assert_sentinels_intact();

        fixture.view_mut().unwrap().add(4).unwrap();
        assert_eq2!(fixture.items(), &[1, 2, 3, 4]);
        fixture.assert_sentinels_intact();
    }

    #[test]
    #[should_panic(expected = "sentinels were overwritten")]
    fn test_detects_overwrite() {
        let mut fixture = SentinelWrapped::new([1, 2], 0, 1);
        Mutable::swap(&mut fixture.container, 0, 1);
        fixture.assert_sentinels_intact();
    }
}
