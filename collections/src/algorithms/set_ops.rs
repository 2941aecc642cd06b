// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Set operations over two sorted ranges.
//!
//! Every operation walks both sources once, in lockstep, comparing the current item of
//! each. Both sources must already be sorted under the comparator that is passed in (or
//! under [`Ord`] for the natural-order variants). Unsorted input is not detected, and
//! produces unspecified output.
//!
//! | Operation              | `a < b`      | `a > b`       | `a == b`                      | tails copied |
//! | :--------------------- | :----------- | :------------ | :---------------------------- | :----------- |
//! | union                  | emit `a`     | emit `b`      | emit `a`, advance both        | both         |
//! | intersection           | skip `a`     | skip `b`      | emit `a`, advance both        | none         |
//! | difference             | emit `a`     | skip `b`      | advance both                  | first        |
//! | symmetric difference   | emit `a`     | emit `b`      | advance both                  | both         |
//! | merge                  | emit `a`     | emit `b`      | emit `a`, advance first only  | both         |
//!
//! There are two flavors of each operation:
//!
//! 1. `copy_*` writes into a fixed size [`Mutable`] destination. It stops as soon as
//!    the destination is full and an item still needs to be written, and reports how far
//!    every range advanced as a [`CopyTwoSourcesResult`]. Steps that emit nothing never
//!    stop the walk, so e.g. the symmetric difference of two identical ranges consumes
//!    both sources even with a zero capacity destination. A source whose remaining items
//!    can not produce output (e.g. the second source of a difference) is not walked to
//!    its end.
//! 2. `add_*` appends to a [`Resizable`] destination, never stops early, and returns the
//!    number of items appended.
//!
//! [`make_set`] removes adjacent duplicates from a sorted range in place.

use std::cmp::Ordering;

use strum_macros::Display;
use tracing::debug;

use super::CopyTwoSourcesResult;
use crate::{Mutable, Readable, Resizable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum SetOperation {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
    Merge,
}

impl SetOperation {
    /// Emit the first source's item when it is the smaller one, and copy the first
    /// source's tail.
    fn keeps_first_only(self) -> bool { !matches!(self, Self::Intersection) }

    /// Emit the second source's item when it is the smaller one, and copy the second
    /// source's tail.
    fn keeps_second_only(self) -> bool {
        matches!(self, Self::Union | Self::SymmetricDifference | Self::Merge)
    }
}

/// Where the walk writes its output.
trait Sink<T> {
    /// Write `item`, or return `false` if there is no room for it.
    fn emit(&mut self, item: &T) -> bool;

    fn written(&self) -> usize;
}

struct CopySink<'d, D: ?Sized> {
    destination: &'d mut D,
    offset: usize,
}

impl<T: Clone, D: Mutable<Item = T> + ?Sized> Sink<T> for CopySink<'_, D> {
    fn emit(&mut self, item: &T) -> bool {
        match self.destination.get_mut(self.offset) {
            Some(slot) => {
                slot.clone_from(item);
                self.offset += 1;
                true
            }
            None => false,
        }
    }

    fn written(&self) -> usize { self.offset }
}

struct AddSink<'d, D: ?Sized> {
    destination: &'d mut D,
    added: usize,
}

impl<T: Clone, D: Resizable<Item = T> + ?Sized> Sink<T> for AddSink<'_, D> {
    fn emit(&mut self, item: &T) -> bool {
        self.destination.push_back(item.clone());
        self.added += 1;
        true
    }

    fn written(&self) -> usize { self.added }
}

/// The single merge walk behind every operation in this module.
fn walk<T, S1, S2, K, F>(
    operation: SetOperation,
    first: &S1,
    second: &S2,
    sink: &mut K,
    mut compare: F,
) -> CopyTwoSourcesResult
where
    S1: Readable<Item = T> + ?Sized,
    S2: Readable<Item = T> + ?Sized,
    K: Sink<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let (len1, len2) = (first.len(), second.len());
    let (mut offset1, mut offset2) = (0, 0);
    let mut stopped_early = false;

    while offset1 < len1 && offset2 < len2 {
        let (Some(a), Some(b)) = (first.get(offset1), second.get(offset2)) else {
            break;
        };
        match compare(a, b) {
            Ordering::Less => {
                if operation.keeps_first_only() && !sink.emit(a) {
                    stopped_early = true;
                    break;
                }
                offset1 += 1;
            }
            Ordering::Greater => {
                if operation.keeps_second_only() && !sink.emit(b) {
                    stopped_early = true;
                    break;
                }
                offset2 += 1;
            }
            Ordering::Equal => match operation {
                SetOperation::Union | SetOperation::Intersection => {
                    if !sink.emit(a) {
                        stopped_early = true;
                        break;
                    }
                    offset1 += 1;
                    offset2 += 1;
                }
                SetOperation::Difference | SetOperation::SymmetricDifference => {
                    offset1 += 1;
                    offset2 += 1;
                }
                SetOperation::Merge => {
                    if !sink.emit(a) {
                        stopped_early = true;
                        break;
                    }
                    offset1 += 1;
                }
            },
        }
    }

    if !stopped_early && operation.keeps_first_only() {
        stopped_early = !copy_tail(first, &mut offset1, sink);
    }
    if !stopped_early && operation.keeps_second_only() {
        stopped_early = !copy_tail(second, &mut offset2, sink);
    }

    let result = CopyTwoSourcesResult::new(offset1, offset2, sink.written());
    if stopped_early {
        debug!(
            message = "set operation stopped early, destination is full",
            %operation,
            source_offset1 = result.source_offset1,
            source_offset2 = result.source_offset2,
            destination_offset = result.destination_offset
        );
    }
    result
}

/// Emit `source[*offset..]`. Returns `false` if the sink filled up first.
fn copy_tail<T, S, K>(source: &S, offset: &mut usize, sink: &mut K) -> bool
where
    S: Readable<Item = T> + ?Sized,
    K: Sink<T>,
{
    while let Some(item) = source.get(*offset) {
        if !sink.emit(item) {
            return false;
        }
        *offset += 1;
    }
    true
}

/// Generates the four public functions of one set operation: `copy_*`, `copy_*_by`,
/// `add_*`, and `add_*_by`.
macro_rules! set_operation_fns {
    (
        $operation:expr,
        $summary:literal,
        $copy:ident,
        $copy_by:ident,
        $add:ident,
        $add_by:ident
    ) => {
        #[doc = concat!("Copy the ", $summary, " of two sorted ranges into `destination`, ")]
        #[doc = "stopping early if it fills up. Uses the natural ordering of `T`."]
        pub fn $copy<T, S1, S2, D>(
            first: &S1,
            second: &S2,
            destination: &mut D,
        ) -> CopyTwoSourcesResult
        where
            T: Ord + Clone,
            S1: Readable<Item = T> + ?Sized,
            S2: Readable<Item = T> + ?Sized,
            D: Mutable<Item = T> + ?Sized,
        {
            $copy_by(first, second, destination, T::cmp)
        }

        #[doc = concat!("Copy the ", $summary, " of two ranges sorted by `compare` into ")]
        #[doc = "`destination`, stopping early if it fills up."]
        pub fn $copy_by<T, S1, S2, D, F>(
            first: &S1,
            second: &S2,
            destination: &mut D,
            compare: F,
        ) -> CopyTwoSourcesResult
        where
            T: Clone,
            S1: Readable<Item = T> + ?Sized,
            S2: Readable<Item = T> + ?Sized,
            D: Mutable<Item = T> + ?Sized,
            F: FnMut(&T, &T) -> Ordering,
        {
            let mut sink = CopySink {
                destination,
                offset: 0,
            };
            walk($operation, first, second, &mut sink, compare)
        }

        #[doc = concat!("Append the ", $summary, " of two sorted ranges to `destination`. ")]
        #[doc = "Returns the number of items appended."]
        pub fn $add<T, S1, S2, D>(first: &S1, second: &S2, destination: &mut D) -> usize
        where
            T: Ord + Clone,
            S1: Readable<Item = T> + ?Sized,
            S2: Readable<Item = T> + ?Sized,
            D: Resizable<Item = T> + ?Sized,
        {
            $add_by(first, second, destination, T::cmp)
        }

        #[doc = concat!("Append the ", $summary, " of two ranges sorted by `compare` to ")]
        #[doc = "`destination`. Returns the number of items appended."]
        pub fn $add_by<T, S1, S2, D, F>(
            first: &S1,
            second: &S2,
            destination: &mut D,
            compare: F,
        ) -> usize
        where
            T: Clone,
            S1: Readable<Item = T> + ?Sized,
            S2: Readable<Item = T> + ?Sized,
            D: Resizable<Item = T> + ?Sized,
            F: FnMut(&T, &T) -> Ordering,
        {
            let mut sink = AddSink {
                destination,
                added: 0,
            };
            walk($operation, first, second, &mut sink, compare).destination_offset
        }
    };
}

set_operation_fns!(
    SetOperation::Union,
    "union",
    copy_union,
    copy_union_by,
    add_union,
    add_union_by
);

set_operation_fns!(
    SetOperation::Intersection,
    "intersection",
    copy_intersection,
    copy_intersection_by,
    add_intersection,
    add_intersection_by
);

set_operation_fns!(
    SetOperation::Difference,
    "difference (items of `first` that are not in `second`)",
    copy_difference,
    copy_difference_by,
    add_difference,
    add_difference_by
);

set_operation_fns!(
    SetOperation::SymmetricDifference,
    "symmetric difference (items in exactly one of the two ranges)",
    copy_symmetric_difference,
    copy_symmetric_difference_by,
    add_symmetric_difference,
    add_symmetric_difference_by
);

set_operation_fns!(
    SetOperation::Merge,
    "merge (every item of both ranges, duplicates kept)",
    copy_merge,
    copy_merge_by,
    add_merge,
    add_merge_by
);

/// Compact the distinct items of a sorted range to its front. Returns the number of
/// distinct items. Items past that count are left in an unspecified order, so shrink the
/// view (or truncate the container) to it.
pub fn make_set<V>(view: &mut V) -> usize
where
    V: Mutable + ?Sized,
    V::Item: Ord,
{
    make_set_by(view, Ord::cmp)
}

pub fn make_set_by<V, F>(view: &mut V, mut compare: F) -> usize
where
    V: Mutable + ?Sized,
    F: FnMut(&V::Item, &V::Item) -> Ordering,
{
    let len = view.len();
    if len == 0 {
        return 0;
    }
    let mut last_kept = 0;
    for index in 1..len {
        let is_duplicate = match (view.get(last_kept), view.get(index)) {
            (Some(kept), Some(candidate)) => compare(kept, candidate) == Ordering::Equal,
            _ => false,
        };
        if !is_duplicate {
            last_kept += 1;
            if last_kept != index {
                view.swap(last_kept, index);
            }
        }
    }
    last_kept + 1
}
