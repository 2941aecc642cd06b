// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_collections
//!
//! Bounded views over arbitrary indexable containers, and a family of in-place
//! algorithms written against those views.
//!
//! ## The pieces
//!
//! ```text
//!                       ┌──────────────────────────────┐
//!                       │ Vec, [T], [T; N], VecDeque,  │
//!                       │ SmallVec, or any view        │ backing container
//!                       └──────────────┬───────────────┘
//!                                      │ Readable ⊂ Mutable ⊂ Resizable
//!                       ┌──────────────▼───────────────┐
//!                       │ BoundedView / BoundedViewMut │ window = (offset, count)
//!                       └──────────────┬───────────────┘
//!           ┌──────────────────────────┼──────────────────────────┐
//!   ┌───────▼───────┐       ┌──────────▼──────────┐      ┌────────▼────────┐
//!   │ heap engine   │       │ range algorithms    │      │ converting copy │
//!   └───────┬───────┘       └─────────────────────┘      └─────────────────┘
//!   ┌───────▼───────┐
//!   │ PriorityQueue │
//!   └───────────────┘
//! ```
//!
//! 1. [`Readable`], [`Mutable`] and [`Resizable`] are the three capability tiers. Every
//!    algorithm asks for the weakest tier it needs.
//! 2. [`BoundedView`] and [`BoundedViewMut`] are non-owning windows over a container.
//!    They implement the tiers themselves, so views compose and nest.
//! 3. The heap engine ([`make_heap`], [`heap_add`], [`heap_remove`]) maintains the
//!    max-heap invariant over a view, and [`PriorityQueue`] is built on top of it.
//! 4. Range algorithms that write into a fixed-size destination stop early when the
//!    destination is full, and report how far every range advanced via [`CopyResult`]
//!    and [`CopyTwoSourcesResult`].
//!
//! ## Example
//!
//! ```
//! use r3bl_collections::{ToBoundedView, copy_symmetric_difference};
//!
//! let first = vec![1, 3, 5];
//! let second = vec![2, 4, 6];
//! let mut destination = vec![0; 3];
//!
//! let result = copy_symmetric_difference(
//!     &first.to_view(),
//!     &second.to_view(),
//!     &mut destination.to_view_mut(),
//! );
//!
//! assert_eq!(destination, vec![1, 2, 3]);
//! assert_eq!(result.source_offset1, 2);
//! assert_eq!(result.source_offset2, 1);
//! assert_eq!(result.destination_offset, 3);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod algorithms;
pub mod bounded_view;
pub mod capability;
pub mod common;
pub mod convert;
pub mod heap;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use algorithms::*;
pub use bounded_view::*;
pub use capability::*;
pub use common::*;
pub use convert::*;
pub use heap::*;
