// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod heap_engine;
pub mod priority_queue;
pub mod priority_queue_enumerator;

// Re-export.
pub use heap_engine::*;
pub use priority_queue::*;
pub use priority_queue_enumerator::*;
