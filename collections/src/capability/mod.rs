// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod container_impls;
pub mod readable_iter;
pub mod tiers;

// Re-export.
pub use readable_iter::*;
pub use tiers::*;
