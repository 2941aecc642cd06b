// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::Readable;

/// Borrowing iterator returned by [`Readable::items`]. Works for any [`Readable`], so
/// views and containers can be used in a `for` loop the same way.
#[derive(Debug)]
pub struct ReadableIter<'a, R: ?Sized> {
    source: &'a R,
    front: usize,
    back: usize,
}

impl<R: ?Sized> Clone for ReadableIter<'_, R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, R: Readable + ?Sized> ReadableIter<'a, R> {
    pub fn new(source: &'a R) -> Self {
        Self {
            source,
            front: 0,
            back: source.len(),
        }
    }

    /// Iterate over the absolute positions `start..end` of `source` only. Used by views
    /// to hand out iterators that borrow the backing container directly.
    pub(crate) fn with_range(source: &'a R, start: usize, end: usize) -> Self {
        Self {
            source,
            front: start,
            back: end,
        }
    }
}

impl<'a, R: Readable + ?Sized> Iterator for ReadableIter<'a, R> {
    type Item = &'a R::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.source.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<R: Readable + ?Sized> DoubleEndedIterator for ReadableIter<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.source.get(self.back)
    }
}

impl<R: Readable + ?Sized> ExactSizeIterator for ReadableIter<'_, R> {}

impl<R: Readable + ?Sized> FusedIterator for ReadableIter<'_, R> {}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_items_front_and_back() {
        let deque: VecDeque<i32> = [1, 2, 3, 4].into_iter().collect();
        let mut iter = deque.items();
        assert_eq2!(iter.len(), 4);
        assert_eq2!(iter.next(), Some(&1));
        assert_eq2!(iter.next_back(), Some(&4));
        assert_eq2!(iter.len(), 2);
        assert_eq2!(iter.collect::<Vec<_>>(), vec![&2, &3]);
    }

    #[test]
    fn test_items_empty() {
        let empty: [u8; 0] = [];
        let mut iter = empty.items();
        assert_eq2!(iter.next(), None);
        assert_eq2!(iter.next_back(), None);
    }
}
