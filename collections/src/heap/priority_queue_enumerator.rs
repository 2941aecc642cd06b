// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering,
          fmt::{Debug, Formatter},
          iter::FusedIterator};

use tracing::debug;

use super::priority_queue::{QueueVersion, pop_root};
use crate::{CollectionError, CollectionResult};

/// Snapshot iterator over a [`super::PriorityQueue`], created by
/// [`super::PriorityQueue::enumerator`].
///
/// It owns a clone of the queue's heap and drains it one root at a time, so items come
/// out in descending priority without touching the live queue. Before every step the
/// live queue's version is compared with the one captured at creation. On a mismatch the
/// enumerator yields a single [`CollectionError::CollectionModified`] and then ends.
///
/// Any number of enumerators can be live at once. They do not interfere with each other
/// or with read-only queue operations.
pub struct PriorityQueueEnumerator<T, F> {
    snapshot: Vec<T>,
    compare: F,
    expected_version: u64,
    live_version: QueueVersion,
    finished: bool,
}

impl<T, F> PriorityQueueEnumerator<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub(crate) fn new(snapshot: Vec<T>, compare: F, live_version: QueueVersion) -> Self {
        Self {
            snapshot,
            compare,
            expected_version: live_version.get(),
            live_version,
            finished: false,
        }
    }

    /// Items left in the snapshot.
    #[must_use]
    pub fn remaining(&self) -> usize { self.snapshot.len() }
}

impl<T, F> Iterator for PriorityQueueEnumerator<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Item = CollectionResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let actual = self.live_version.get();
        if actual != self.expected_version {
            debug!(
                message = "priority queue modified during enumeration",
                expected = self.expected_version,
                actual
            );
            self.finished = true;
            return Some(Err(CollectionError::CollectionModified {
                expected: self.expected_version,
                actual,
            }));
        }

        if let Some(item) = pop_root(&mut self.snapshot, &mut self.compare) {
            Some(Ok(item))
        } else {
            self.finished = true;
            None
        }
    }
}

impl<T, F> FusedIterator for PriorityQueueEnumerator<T, F> where
    F: FnMut(&T, &T) -> Ordering
{
}

impl<T: Debug, F> Debug for PriorityQueueEnumerator<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueueEnumerator")
            .field("snapshot", &self.snapshot)
            .field("expected_version", &self.expected_version)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CollectionError, CommonResult, PriorityQueue, assert_eq2, ok};

    #[test]
    fn test_enumerates_in_descending_priority() -> CommonResult<()> {
        let queue = PriorityQueue::from_items([4, 9, 1, 7]);
        let items = queue.enumerator().collect::<Result<Vec<_>, _>>()?;
        assert_eq2!(items, vec![9, 7, 4, 1]);
        assert_eq2!(queue.len(), 4);

        let mut from_loop = vec![];
        for item in &queue {
            from_loop.push(item?);
        }
        assert_eq2!(from_loop, items);
        ok!()
    }

    #[test]
    fn test_modified_before_first_item() {
        let mut queue = PriorityQueue::from_items([1, 2, 3]);
        let mut enumerator = queue.enumerator();
        queue.enqueue(4);
        assert_eq2!(
            enumerator.next(),
            Some(Err(CollectionError::CollectionModified {
                expected: 0,
                actual: 1,
            }))
        );
        assert_eq2!(enumerator.next(), None);
    }

    #[test]
    fn test_modified_after_first_item() -> CommonResult<()> {
        let mut queue = PriorityQueue::from_items([1, 2, 3]);
        let mut enumerator = queue.enumerator();
        assert_eq2!(enumerator.next().transpose()?, Some(3));
        let _unused = queue.dequeue()?;
        assert!(matches!(
            enumerator.next(),
            Some(Err(CollectionError::CollectionModified { .. }))
        ));
        assert_eq2!(enumerator.next(), None);
        ok!()
    }

    #[test]
    fn test_two_enumerators_are_independent() -> CommonResult<()> {
        let queue = PriorityQueue::from_items(["b", "d", "a", "c"]);
        let mut first = queue.enumerator();
        let mut second = queue.enumerator();

        assert_eq2!(first.next().transpose()?, Some("d"));
        assert_eq2!(first.next().transpose()?, Some("c"));
        assert_eq2!(second.next().transpose()?, Some("d"));
        assert_eq2!(first.remaining(), 2);
        assert_eq2!(second.remaining(), 3);

        // Read-only operations do not invalidate.
        assert!(queue.contains(&"a"));
        let _unused = queue.peek()?;
        let _unused = queue.to_vec();

        assert_eq2!(first.collect::<Result<Vec<_>, _>>()?, vec!["b", "a"]);
        assert_eq2!(second.collect::<Result<Vec<_>, _>>()?, vec!["c", "b", "a"]);
        ok!()
    }
}
