// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Wrap the given expression in `Ok(..)`. With no arguments, produces `Ok(())`.
///
/// ```
/// use r3bl_collections::{CommonResult, ok};
///
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<u8> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
