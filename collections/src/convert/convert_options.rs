// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

/// How a fractional number is rounded when the destination is an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum FloatToIntRounding {
    /// `2.5 -> 2`, `3.5 -> 4` (banker's rounding).
    #[default]
    TiesToEven,
    /// `2.5 -> 3`, `-2.5 -> -3`.
    TiesAwayFromZero,
    /// `2.9 -> 2`, `-2.9 -> -2`.
    TowardZero,
}

impl FloatToIntRounding {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::TiesToEven => value.round_ties_even(),
            Self::TiesAwayFromZero => value.round(),
            Self::TowardZero => value.trunc(),
        }
    }
}

/// Knobs for the default converter used by [`crate::add_converted_with`].
///
/// ```
/// use r3bl_collections::{ConvertOptions, FloatToIntRounding};
///
/// let options = ConvertOptions {
///     rounding: FloatToIntRounding::TowardZero,
///     ..Default::default()
/// };
/// assert!(options.trim_whitespace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub rounding: FloatToIntRounding,
    /// Trim leading and trailing whitespace from text before parsing it.
    pub trim_whitespace: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            rounding: FloatToIntRounding::default(),
            trim_whitespace: true,
        }
    }
}

impl ConvertOptions {
    pub(crate) fn prepare<'a>(&self, text: &'a str) -> &'a str {
        if self.trim_whitespace { text.trim() } else { text }
    }
}
