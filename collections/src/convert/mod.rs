// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Converting copy between ranges of different item types. Source items are lowered to a
//! [`Scalar`] with [`ToScalar`], then raised into the destination type with
//! [`FromScalar`], which picks a [`ConversionStrategy`] per destination type.

// Attach sources.
pub mod add_converted;
pub mod convert_options;
pub mod from_scalar;
pub mod scalar;

// Re-export.
pub use add_converted::*;
pub use convert_options::*;
pub use from_scalar::*;
pub use scalar::*;
