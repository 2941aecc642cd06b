// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised by views, algorithms, the priority queue, and the best-effort
//! converter. For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use strum_macros::Display;

/// Type alias to make it easy to work with [`CollectionError`] in library APIs.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Type alias to make it easy to compose calls that return different error types, eg in
/// tests and applications. It is basically `miette::Result<T, miette::Report>`, and any
/// [`CollectionError`] converts into it via `?`.
pub type CommonResult<T> = miette::Result<T>;

/// Every failure that this crate reports. They are all raised synchronously at the point
/// of the violating call. Nothing is retried or deferred.
///
/// | Variant                  | Kind                                          | Raised by                                      |
/// | :----------------------- | :-------------------------------------------- | :--------------------------------------------- |
/// | [`OutOfRange`]           | [`CollectionErrorKind::OutOfRange`]           | view construction, nesting, indexing, `copy_to` |
/// | [`InsufficientCapacity`] | [`CollectionErrorKind::OutOfRange`]           | `copy_to` into an array that is too small      |
/// | [`EmptyQueue`]           | [`CollectionErrorKind::InvalidOperation`]     | [`PriorityQueue::peek`], [`PriorityQueue::dequeue`] |
/// | [`CollectionModified`]   | [`CollectionErrorKind::InvalidOperation`]     | [`PriorityQueueEnumerator`]                    |
/// | [`InvalidCast`]          | [`CollectionErrorKind::InvalidCast`]          | [`add_converted`] and friends                  |
///
/// [`OutOfRange`]: Self::OutOfRange
/// [`InsufficientCapacity`]: Self::InsufficientCapacity
/// [`EmptyQueue`]: Self::EmptyQueue
/// [`CollectionModified`]: Self::CollectionModified
/// [`InvalidCast`]: Self::InvalidCast
/// [`PriorityQueue::peek`]: crate::PriorityQueue::peek
/// [`PriorityQueue::dequeue`]: crate::PriorityQueue::dequeue
/// [`PriorityQueueEnumerator`]: crate::PriorityQueueEnumerator
/// [`add_converted`]: crate::add_converted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CollectionError {
    /// An offset, count, or index falls outside of what the container (or view window)
    /// allows.
    #[error("`{param}` is out of range: {value} (maximum allowed is {max})")]
    #[diagnostic(
        code(r3bl_collections::out_of_range),
        help("Offsets and counts are relative to the current window of the view.")
    )]
    OutOfRange {
        param: &'static str,
        value: usize,
        max: usize,
    },

    /// A destination does not have enough room left to receive every item.
    #[error(
        "`{param}` does not have enough room: {required} required, {available} available"
    )]
    #[diagnostic(code(r3bl_collections::insufficient_capacity))]
    InsufficientCapacity {
        param: &'static str,
        required: usize,
        available: usize,
    },

    /// [`PriorityQueue::peek`] or [`PriorityQueue::dequeue`] was called on an empty
    /// queue.
    ///
    /// [`PriorityQueue::peek`]: crate::PriorityQueue::peek
    /// [`PriorityQueue::dequeue`]: crate::PriorityQueue::dequeue
    #[error("cannot {operation} an empty priority queue")]
    #[diagnostic(
        code(r3bl_collections::empty_queue),
        help("Check `is_empty()` before calling `peek()` or `dequeue()`.")
    )]
    EmptyQueue { operation: &'static str },

    /// The queue was structurally modified after an enumerator captured its version.
    #[error(
        "the collection was modified after the enumerator was created \
         (version {expected} -> {actual})"
    )]
    #[diagnostic(
        code(r3bl_collections::collection_modified),
        help("Create a new enumerator after enqueueing, dequeueing, or clearing.")
    )]
    CollectionModified { expected: u64, actual: u64 },

    /// A best-effort conversion could not produce a value of the destination type.
    #[error("cannot convert {from} into `{to}`: {reason}")]
    #[diagnostic(code(r3bl_collections::invalid_cast))]
    InvalidCast {
        from: &'static str,
        to: &'static str,
        reason: String,
    },
}

/// Coarse classification of [`CollectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CollectionErrorKind {
    OutOfRange,
    InvalidOperation,
    InvalidCast,
}

impl CollectionError {
    #[must_use]
    pub fn kind(&self) -> CollectionErrorKind {
        match self {
            Self::OutOfRange { .. } | Self::InsufficientCapacity { .. } => {
                CollectionErrorKind::OutOfRange
            }
            Self::EmptyQueue { .. } | Self::CollectionModified { .. } => {
                CollectionErrorKind::InvalidOperation
            }
            Self::InvalidCast { .. } => CollectionErrorKind::InvalidCast,
        }
    }

    /// Shorthand to return an [`CollectionError::OutOfRange`] as a result.
    pub fn out_of_range<T>(
        param: &'static str,
        value: usize,
        max: usize,
    ) -> CollectionResult<T> {
        Err(Self::OutOfRange { param, value, max })
    }
}
