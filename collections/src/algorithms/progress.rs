// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// How far the source and destination ranges of a single-source copy advanced. The
/// copy may stop before the source is exhausted when the destination fills up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyResult {
    pub source_offset: usize,
    pub destination_offset: usize,
}

/// How far each of the three ranges of a merge-style algorithm advanced. Neither source
/// is necessarily fully consumed: the algorithm stops as soon as the destination is full.
///
/// ```text
/// source 1     [1, 3, 5]      ──▶ source_offset1 = 2
/// source 2     [2, 4, 6]      ──▶ source_offset2 = 1
/// destination  [1, 2, 3]      ──▶ destination_offset = 3 (full, stopped early)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyTwoSourcesResult {
    pub source_offset1: usize,
    pub source_offset2: usize,
    pub destination_offset: usize,
}

impl CopyTwoSourcesResult {
    #[must_use]
    pub fn new(source_offset1: usize, source_offset2: usize, destination_offset: usize) -> Self {
        Self {
            source_offset1,
            source_offset2,
            destination_offset,
        }
    }
}
