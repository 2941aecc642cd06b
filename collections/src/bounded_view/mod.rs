// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod mutable_view;
pub mod read_only_view;
pub mod to_view;
pub mod window;

// Re-export.
pub use mutable_view::*;
pub use read_only_view::*;
pub use to_view::*;
pub use window::*;
