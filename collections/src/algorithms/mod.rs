// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Generic range algorithms. Each one accepts any container or view through the
//! capability tier it actually needs: [`crate::Readable`] to inspect,
//! [`crate::Mutable`] to rearrange or overwrite, and [`crate::Resizable`] to append.
//!
//! Ordering based algorithms come in pairs: `foo` uses [`Ord`] and `foo_by` takes a
//! comparator `FnMut(&T, &T) -> Ordering`.

// Attach sources.
pub mod compare_and_search;
pub mod copy_and_grow;
pub mod partition;
pub mod progress;
pub mod set_ops;
pub mod sort;
pub mod swap_and_rotate;

// Re-export.
pub use compare_and_search::*;
pub use copy_and_grow::*;
pub use partition::*;
pub use progress::*;
pub use set_ops::*;
pub use sort::*;
pub use swap_and_rotate::*;
