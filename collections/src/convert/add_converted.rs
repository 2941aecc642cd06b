// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::debug;

use super::{ConvertOptions, FromScalar, ToScalar};
use crate::{CollectionResult, Readable, Resizable};

/// Append every item of `source` to `destination`, converting each one with the default
/// best-effort converter and [`ConvertOptions::default`].
///
/// ```
/// use r3bl_collections::{CommonResult, add_converted};
///
/// fn main() -> CommonResult<()> {
///     let mut grades: Vec<Option<f64>> = vec![];
///     add_converted(&["3.5", " 4 "], &mut grades)?;
///     add_converted(&[None::<i32>], &mut grades)?;
///     assert_eq!(grades, vec![Some(3.5), Some(4.0), None]);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// See [`add_converted_with`].
pub fn add_converted<S, D>(source: &S, destination: &mut D) -> CollectionResult<usize>
where
    S: Readable + ?Sized,
    S::Item: ToScalar,
    D: Resizable + ?Sized,
    D::Item: FromScalar,
{
    add_converted_with(source, destination, &ConvertOptions::default())
}

/// Append every item of `source` to `destination`, converting each one with the default
/// best-effort converter. Returns the number of items appended.
///
/// # Errors
///
/// [`crate::CollectionError::InvalidCast`] for the first item that can not be converted.
/// Items before it have already been appended, and the ones after it are not visited.
pub fn add_converted_with<S, D>(
    source: &S,
    destination: &mut D,
    options: &ConvertOptions,
) -> CollectionResult<usize>
where
    S: Readable + ?Sized,
    S::Item: ToScalar,
    D: Resizable + ?Sized,
    D::Item: FromScalar,
{
    let destination_type = std::any::type_name::<D::Item>();
    let strategy = <D::Item as FromScalar>::STRATEGY;
    let mut added = 0;
    for (index, item) in source.items().enumerate() {
        let scalar = item.to_scalar();
        let source_kind = scalar.kind_name();
        let converted = <D::Item as FromScalar>::from_scalar(scalar, options)
            .inspect_err(|error| {
                debug!(
                    message = "best-effort conversion failed",
                    index,
                    source_kind,
                    destination_type,
                    %strategy,
                    %error
                );
            })?;
        destination.push_back(converted);
        added += 1;
    }
    Ok(added)
}

/// Append `converter(item)` for every item of `source` to `destination`. Returns the
/// number of items appended.
///
/// ```
/// use r3bl_collections::add_converted_by;
///
/// let mut doubled = vec![];
/// add_converted_by(&[1, 2, 3], &mut doubled, |n: &i32| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn add_converted_by<S, D, C>(source: &S, destination: &mut D, mut converter: C) -> usize
where
    S: Readable + ?Sized,
    D: Resizable + ?Sized,
    C: FnMut(&S::Item) -> D::Item,
{
    for item in source.items() {
        destination.push_back(converter(item));
    }
    source.len()
}
