// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Priority queue built from a [`Vec`] store, the heap engine, and a version counter.
//!
//! ## Features
//!
//! - Max-priority first under a configurable comparator. A reversed comparator gives
//!   min-priority first.
//! - O(log n) [`PriorityQueue::enqueue`] and [`PriorityQueue::dequeue`], O(n)
//!   [`PriorityQueue::from_items`].
//! - Non-destructive, descending-priority snapshots via
//!   [`PriorityQueue::enumerator`], [`PriorityQueue::copy_to`], and
//!   [`PriorityQueue::to_vec`].
//!
//! ## Enumerator invalidation
//!
//! Every structural mutation (enqueue, dequeue, clear) bumps a version counter that is
//! shared with enumerators. An enumerator captures the version when it is created and
//! compares it on every step. This is cooperative, single-writer detection on a single
//! thread, not a form of concurrency control.
//!
//! ## Example
//!
//! ```
//! use r3bl_collections::{CommonResult, PriorityQueue};
//!
//! fn main() -> CommonResult<()> {
//!     let mut queue: PriorityQueue<u32> = [3, 9, 4].into_iter().collect();
//!     queue.enqueue(7);
//!     assert_eq!(*queue.peek()?, 9);
//!     assert_eq!(queue.dequeue()?, 9);
//!     assert_eq!(queue.dequeue()?, 7);
//!     assert_eq!(queue.len(), 2);
//!     Ok(())
//! }
//! ```

use std::{cell::Cell,
          cmp::Ordering,
          fmt::{Debug, Formatter},
          rc::Rc};

use super::{PriorityQueueEnumerator, heap_add_by, heap_remove_by, make_heap_by};
use crate::{CollectionError, CollectionResult, common::bounds_check::checked_destination};

/// Monotonically increasing mutation counter, shared between a queue and the
/// enumerators created from it.
#[derive(Debug, Clone, Default)]
pub struct QueueVersion(Rc<Cell<u64>>);

impl QueueVersion {
    #[must_use]
    pub fn get(&self) -> u64 { self.0.get() }

    fn bump(&self) { self.0.set(self.0.get().wrapping_add(1)); }

    /// A new, unshared counter that starts at the same value.
    fn detached(&self) -> Self { Self(Rc::new(Cell::new(self.get()))) }
}

/// Comparator used when none is supplied: the natural ordering of `T`.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

pub struct PriorityQueue<T, F = NaturalOrder<T>> {
    store: Vec<T>,
    compare: F,
    version: QueueVersion,
}

mod constructor {
    use super::*;

    impl<T: Ord> PriorityQueue<T> {
        #[must_use]
        pub fn new() -> Self { Self::with_capacity(0) }

        #[must_use]
        pub fn with_capacity(capacity: usize) -> Self {
            let compare: NaturalOrder<T> = T::cmp;
            Self::with_capacity_and_comparer(capacity, compare)
        }

        /// Heapify `items` in linear time.
        pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
            let compare: NaturalOrder<T> = T::cmp;
            Self::from_items_with_comparer(items, compare)
        }
    }

    impl<T, F> PriorityQueue<T, F>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        pub fn with_comparer(compare: F) -> Self {
            Self::with_capacity_and_comparer(0, compare)
        }

        pub fn with_capacity_and_comparer(capacity: usize, compare: F) -> Self {
            Self {
                store: Vec::with_capacity(capacity),
                compare,
                version: QueueVersion::default(),
            }
        }

        pub fn from_items_with_comparer(
            items: impl IntoIterator<Item = T>,
            mut compare: F,
        ) -> Self {
            let mut store: Vec<T> = items.into_iter().collect();
            make_heap_by(&mut store, &mut compare);
            Self {
                store,
                compare,
                version: QueueVersion::default(),
            }
        }
    }

    impl<T: Ord> Default for PriorityQueue<T> {
        fn default() -> Self { Self::new() }
    }

    impl<T: Clone, F: Clone> Clone for PriorityQueue<T, F> {
        /// The clone gets its own version counter, so mutating it never invalidates
        /// enumerators of the original.
        fn clone(&self) -> Self {
            Self {
                store: self.store.clone(),
                compare: self.compare.clone(),
                version: self.version.detached(),
            }
        }
    }
}

mod mutator {
    use super::*;

    impl<T, F> PriorityQueue<T, F>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        pub fn enqueue(&mut self, item: T) {
            self.store.push(item);
            heap_add_by(&mut self.store, &mut self.compare);
            self.version.bump();
        }

        /// Remove and return the highest priority item.
        ///
        /// # Errors
        ///
        /// [`CollectionError::EmptyQueue`] if the queue is empty.
        pub fn dequeue(&mut self) -> CollectionResult<T> {
            match pop_root(&mut self.store, &mut self.compare) {
                Some(item) => {
                    self.version.bump();
                    Ok(item)
                }
                None => Err(CollectionError::EmptyQueue {
                    operation: "dequeue",
                }),
            }
        }

        pub fn clear(&mut self) {
            self.store.clear();
            self.version.bump();
        }
    }

    impl<T, F> Extend<T> for PriorityQueue<T, F>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            for item in iter {
                self.enqueue(item);
            }
        }
    }

    impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Self::from_items(iter) }
    }
}

mod size {
    use super::*;

    impl<T, F> PriorityQueue<T, F> {
        #[must_use]
        pub fn len(&self) -> usize { self.store.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.store.is_empty() }

        /// Current value of the mutation counter.
        #[must_use]
        pub fn version(&self) -> u64 { self.version.get() }

        pub(crate) fn version_handle(&self) -> QueueVersion { self.version.clone() }
    }
}

mod access {
    use super::*;

    impl<T, F> PriorityQueue<T, F> {
        /// The highest priority item, without removing it.
        ///
        /// # Errors
        ///
        /// [`CollectionError::EmptyQueue`] if the queue is empty.
        pub fn peek(&self) -> CollectionResult<&T> {
            self.store
                .first()
                .ok_or(CollectionError::EmptyQueue { operation: "peek" })
        }

        /// Linear equality scan over the store. Priority plays no part.
        pub fn contains(&self, item: &T) -> bool
        where
            T: PartialEq,
        {
            self.store.contains(item)
        }
    }

    impl<T, F> PriorityQueue<T, F>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering + Clone,
    {
        /// Snapshot the queue. The enumerator yields items in descending priority, and
        /// yields a [`CollectionError::CollectionModified`] (then stops) if this queue is
        /// mutated before it finishes.
        #[must_use]
        pub fn enumerator(&self) -> PriorityQueueEnumerator<T, F> {
            PriorityQueueEnumerator::new(
                self.store.clone(),
                self.compare.clone(),
                self.version_handle(),
            )
        }

        /// Copy every item into `array` starting at `index`, in descending priority. The
        /// queue itself is left untouched.
        ///
        /// # Arguments
        ///
        /// * `array` - Destination. Needs at least `self.len()` slots after `index`.
        /// * `index` - Where in `array` to put the highest priority item.
        ///
        /// # Errors
        ///
        /// - [`CollectionError::OutOfRange`] if `index > array.len()`.
        /// - [`CollectionError::InsufficientCapacity`] if `array` is too small.
        pub fn copy_to(&self, array: &mut [T], index: usize) -> CollectionResult<()> {
            let destination = checked_destination(array, index, self.len())?;
            let mut snapshot = self.store.clone();
            let mut compare = self.compare.clone();
            for slot in destination {
                if let Some(item) = pop_root(&mut snapshot, &mut compare) {
                    *slot = item;
                }
            }
            Ok(())
        }

        /// Every item in descending priority. The queue itself is left untouched.
        #[must_use]
        pub fn to_vec(&self) -> Vec<T> {
            let mut snapshot = self.store.clone();
            let mut compare = self.compare.clone();
            let mut acc = Vec::with_capacity(snapshot.len());
            while let Some(item) = pop_root(&mut snapshot, &mut compare) {
                acc.push(item);
            }
            acc
        }
    }

    impl<'a, T, F> IntoIterator for &'a PriorityQueue<T, F>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering + Clone,
    {
        type Item = CollectionResult<T>;
        type IntoIter = PriorityQueueEnumerator<T, F>;

        fn into_iter(self) -> Self::IntoIter { self.enumerator() }
    }
}

impl<T: Debug, F> Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("store", &self.store)
            .field("version", &self.version.get())
            .finish_non_exhaustive()
    }
}

/// Pop the highest priority item off a heap ordered store.
pub(crate) fn pop_root<T, F>(store: &mut Vec<T>, compare: &mut F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if store.is_empty() {
        return None;
    }
    heap_remove_by(store, &mut *compare);
    store.pop()
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{CollectionErrorKind, CommonResult, assert_eq2, is_heap_by, ok};

    #[test]
    fn test_empty_queue() {
        let mut queue: PriorityQueue<i32> = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq2!(
            queue.peek().unwrap_err(),
            CollectionError::EmptyQueue { operation: "peek" }
        );
        let error = queue.dequeue().unwrap_err();
        assert_eq2!(error.kind(), CollectionErrorKind::InvalidOperation);
        assert_eq2!(queue.version(), 0);
    }

    #[test]
    fn test_enqueue_dequeue_descending() -> CommonResult<()> {
        let mut queue = PriorityQueue::with_capacity(8);
        for value in [5, 1, 4, 2, 3, 5] {
            queue.enqueue(value);
        }
        assert_eq2!(queue.len(), 6);
        assert_eq2!(*queue.peek()?, 5);

        let mut drained = vec![];
        while !queue.is_empty() {
            drained.push(queue.dequeue()?);
        }
        assert_eq2!(drained, vec![5, 5, 4, 3, 2, 1]);
        ok!()
    }

    #[test]
    fn test_random_interleaving_is_non_increasing() -> CommonResult<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut queue = PriorityQueue::new();
        let mut last_dequeued: Option<i64> = None;

        for _ in 0..500 {
            let len_before = queue.len();
            if queue.is_empty() || rng.random_bool(0.6) {
                queue.enqueue(rng.random_range(-50..50_i64));
                assert_eq2!(queue.len(), len_before + 1);
                last_dequeued = None;
            } else {
                let item = queue.dequeue()?;
                assert_eq2!(queue.len(), len_before - 1);
                if let Some(previous) = last_dequeued {
                    assert!(item <= previous);
                }
                last_dequeued = Some(item);
            }
            assert!(is_heap_by(&queue.store, i64::cmp));
        }
        ok!()
    }

    #[test]
    fn test_reversed_comparator_is_min_queue() -> CommonResult<()> {
        let mut queue = PriorityQueue::with_comparer(|a: &u8, b: &u8| b.cmp(a));
        queue.extend([9, 3, 7, 1]);
        assert_eq2!(queue.dequeue()?, 1);
        assert_eq2!(queue.to_vec(), vec![3, 7, 9]);
        ok!()
    }

    #[test]
    fn test_from_items_and_contains() {
        let queue = PriorityQueue::from_items(vec![2, 8, 5, 1]);
        assert_eq2!(queue.peek().ok(), Some(&8));
        assert!(queue.contains(&1));
        assert!(!queue.contains(&3));
        assert_eq2!(queue.version(), 0);
    }

    #[test]
    fn test_copy_to_leaves_queue_untouched() -> CommonResult<()> {
        let queue: PriorityQueue<i32> = (1..=5).collect();
        let mut array = [0; 5];
        queue.copy_to(&mut array, 0)?;
        assert_eq2!(array, [5, 4, 3, 2, 1]);
        assert_eq2!(queue.len(), 5);
        assert_eq2!(*queue.peek()?, 5);

        let mut larger = [0; 7];
        queue.copy_to(&mut larger, 2)?;
        assert_eq2!(larger, [0, 0, 5, 4, 3, 2, 1]);

        assert_eq2!(
            queue.copy_to(&mut larger, 3).unwrap_err(),
            CollectionError::InsufficientCapacity {
                param: "array",
                required: 5,
                available: 4,
            }
        );
        assert_eq2!(
            queue.copy_to(&mut larger, 8).unwrap_err(),
            CollectionError::OutOfRange {
                param: "index",
                value: 8,
                max: 7,
            }
        );
        ok!()
    }

    #[test]
    fn test_clear_bumps_version() {
        let mut queue = PriorityQueue::from_items([1, 2, 3]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq2!(queue.version(), 1);
    }

    #[test]
    fn test_clone_has_independent_version() -> CommonResult<()> {
        let queue = PriorityQueue::from_items([1, 2, 3]);
        let mut enumerator = queue.enumerator();
        let mut cloned = queue.clone();
        cloned.enqueue(10);
        assert_eq2!(enumerator.next().transpose()?, Some(3));
        assert_eq2!(queue.version(), 0);
        assert_eq2!(cloned.version(), 1);
        ok!()
    }
}
