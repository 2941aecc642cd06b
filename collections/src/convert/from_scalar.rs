// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raising a [`Scalar`] into a concrete destination type.
//!
//! | Strategy    | Destinations                        | Accepts                                      |
//! | :---------- | :---------------------------------- | :------------------------------------------- |
//! | `Numeric`   | `i8..=i64`, `isize`, `u8..=u64`, `usize`, `f32`, `f64` | numbers (range checked), bools as 0/1, parsable text |
//! | `Boolean`   | `bool`                              | bools, numbers (non-zero is `true`), `"true"` / `"false"` |
//! | `Text`      | `String`                            | text, formatted numbers and bools             |
//! | `Nullable`  | `Option<T>`                         | `Null` as `None`, anything `T` accepts        |
//! | `Reference` | `Rc<U>`, `Scalar`                   | an `Object` holding a `U`; `Scalar` takes anything |
//!
//! `Null` into any destination other than `Option<T>` or `Scalar` is an
//! [`CollectionError::InvalidCast`].

use std::{any::{Any, type_name},
          rc::Rc};

use strum_macros::Display;

use super::{ConvertOptions, Scalar};
use crate::{CollectionError, CollectionResult};

/// Which family of rules a destination type converts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConversionStrategy {
    Numeric,
    Boolean,
    Text,
    Nullable,
    Reference,
}

/// Raise a [`Scalar`] into `Self`, as best as possible.
pub trait FromScalar: Sized {
    const STRATEGY: ConversionStrategy;

    /// # Errors
    ///
    /// [`CollectionError::InvalidCast`] if `value` has no meaningful representation as
    /// `Self`.
    fn from_scalar(value: Scalar, options: &ConvertOptions) -> CollectionResult<Self>;
}

/// Build the cast error for converting `from` into `T`.
fn cast_error<T>(from: &Scalar, reason: impl Into<String>) -> CollectionError {
    CollectionError::InvalidCast {
        from: from.kind_name(),
        to: type_name::<T>(),
        reason: reason.into(),
    }
}

fn null_error<T>() -> CollectionError {
    cast_error::<T>(
        &Scalar::Null,
        "null can not be stored in a non-nullable destination",
    )
}

fn object_error<T>(value: &Scalar) -> CollectionError {
    cast_error::<T>(value, "opaque objects only convert into `Rc` or `Scalar`")
}

mod numeric {
    use super::*;

    /// Round `value` per `options`, then range check it against `[min, max_exclusive)`.
    /// The upper bound is exclusive since `u64::MAX as f64` and `i64::MAX as f64` round
    /// up to the next power of two, which does not fit the target.
    fn rounded_within<T>(
        value: f64,
        min: f64,
        max_exclusive: f64,
        options: &ConvertOptions,
    ) -> CollectionResult<f64> {
        let from = Scalar::Float(value);
        if !value.is_finite() {
            return Err(cast_error::<T>(&from, "not a finite number"));
        }
        let rounded = options.rounding.apply(value);
        if rounded < min || rounded >= max_exclusive {
            return Err(cast_error::<T>(&from, "out of range"));
        }
        Ok(rounded)
    }

    macro_rules! impl_from_scalar_for_integer {
        ($($target:ty),+) => {
            $(
                impl FromScalar for $target {
                    const STRATEGY: ConversionStrategy = ConversionStrategy::Numeric;

                    #[allow(
                        clippy::cast_possible_truncation,
                        clippy::cast_precision_loss,
                        clippy::cast_sign_loss
                    )]
                    fn from_scalar(
                        value: Scalar,
                        options: &ConvertOptions,
                    ) -> CollectionResult<Self> {
                        let out_of_range = |from: &Scalar| cast_error::<Self>(from, "out of range");
                        match &value {
                            Scalar::Null => Err(null_error::<Self>()),
                            Scalar::Bool(flag) => Ok(Self::from(*flag)),
                            Scalar::Int(number) => {
                                Self::try_from(*number).map_err(|_| out_of_range(&value))
                            }
                            Scalar::UInt(number) => {
                                Self::try_from(*number).map_err(|_| out_of_range(&value))
                            }
                            Scalar::Float(number) => rounded_within::<Self>(
                                *number,
                                Self::MIN as f64,
                                Self::MAX as f64 + 1.0,
                                options,
                            )
                            .map(|rounded| rounded as Self),
                            Scalar::Text(text) => {
                                let text = options.prepare(text);
                                match text.parse::<Self>() {
                                    Ok(number) => Ok(number),
                                    Err(_) => match text.parse::<f64>() {
                                        Ok(number) => {
                                            Self::from_scalar(Scalar::Float(number), options)
                                        }
                                        Err(error) => {
                                            Err(cast_error::<Self>(&value, error.to_string()))
                                        }
                                    },
                                }
                            }
                            Scalar::Object(_) => Err(object_error::<Self>(&value)),
                        }
                    }
                }
            )+
        };
    }

    impl_from_scalar_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

    macro_rules! impl_from_scalar_for_float {
        ($($target:ty => $narrow:path),+) => {
            $(
                impl FromScalar for $target {
                    const STRATEGY: ConversionStrategy = ConversionStrategy::Numeric;

                    #[allow(clippy::cast_precision_loss)]
                    fn from_scalar(
                        value: Scalar,
                        options: &ConvertOptions,
                    ) -> CollectionResult<Self> {
                        let wide = match &value {
                            Scalar::Null => return Err(null_error::<Self>()),
                            Scalar::Bool(flag) => f64::from(u8::from(*flag)),
                            Scalar::Int(number) => *number as f64,
                            Scalar::UInt(number) => *number as f64,
                            Scalar::Float(number) => *number,
                            Scalar::Text(text) => options
                                .prepare(text)
                                .parse::<f64>()
                                .map_err(|error| cast_error::<Self>(&value, error.to_string()))?,
                            Scalar::Object(_) => return Err(object_error::<Self>(&value)),
                        };
                        if wide.is_finite() && wide.abs() > f64::from(Self::MAX) {
                            return Err(cast_error::<Self>(&value, "out of range"));
                        }
                        Ok($narrow(wide))
                    }
                }
            )+
        };
    }

    /// Callers range check `wide` first.
    #[allow(clippy::cast_possible_truncation)]
    fn narrow_to_f32(wide: f64) -> f32 { wide as f32 }

    impl_from_scalar_for_float!(f32 => narrow_to_f32, f64 => std::convert::identity);
}

impl FromScalar for bool {
    const STRATEGY: ConversionStrategy = ConversionStrategy::Boolean;

    fn from_scalar(value: Scalar, options: &ConvertOptions) -> CollectionResult<Self> {
        match &value {
            Scalar::Null => Err(null_error::<Self>()),
            Scalar::Bool(flag) => Ok(*flag),
            Scalar::Int(number) => Ok(*number != 0),
            Scalar::UInt(number) => Ok(*number != 0),
            Scalar::Float(number) => Ok(*number != 0.0),
            Scalar::Text(text) => {
                let text = options.prepare(text);
                if text.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(cast_error::<Self>(&value, "expected `true` or `false`"))
                }
            }
            Scalar::Object(_) => Err(object_error::<Self>(&value)),
        }
    }
}

impl FromScalar for String {
    const STRATEGY: ConversionStrategy = ConversionStrategy::Text;

    fn from_scalar(value: Scalar, _options: &ConvertOptions) -> CollectionResult<Self> {
        match value {
            Scalar::Null => Err(null_error::<Self>()),
            Scalar::Bool(flag) => Ok(flag.to_string()),
            Scalar::Int(number) => Ok(number.to_string()),
            Scalar::UInt(number) => Ok(number.to_string()),
            Scalar::Float(number) => Ok(number.to_string()),
            Scalar::Text(text) => Ok(text),
            other @ Scalar::Object(_) => Err(object_error::<Self>(&other)),
        }
    }
}

impl<T: FromScalar> FromScalar for Option<T> {
    const STRATEGY: ConversionStrategy = ConversionStrategy::Nullable;

    fn from_scalar(value: Scalar, options: &ConvertOptions) -> CollectionResult<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_scalar(value, options).map(Some)
        }
    }
}

impl<U: Any> FromScalar for Rc<U> {
    const STRATEGY: ConversionStrategy = ConversionStrategy::Reference;

    fn from_scalar(value: Scalar, _options: &ConvertOptions) -> CollectionResult<Self> {
        match value {
            Scalar::Object(object) => object.downcast::<U>().map_err(|object| {
                cast_error::<Self>(&Scalar::Object(object), "object holds another type")
            }),
            Scalar::Null => Err(null_error::<Self>()),
            other => Err(cast_error::<Self>(&other, "only an object can be passed through")),
        }
    }
}

impl FromScalar for Scalar {
    const STRATEGY: ConversionStrategy = ConversionStrategy::Reference;

    fn from_scalar(value: Scalar, _options: &ConvertOptions) -> CollectionResult<Self> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{CollectionErrorKind, CommonResult, ToScalar, assert_eq2, ok};

    fn convert<T: FromScalar>(value: impl ToScalar) -> CollectionResult<T> {
        T::from_scalar(value.to_scalar(), &ConvertOptions::default())
    }

    #[test]
    fn test_numeric_widening_and_narrowing() -> CommonResult<()> {
        assert_eq2!(convert::<i64>(7_i8)?, 7);
        assert_eq2!(convert::<u8>(255_i32)?, 255);
        assert_eq2!(convert::<f64>(3_u16)?, 3.0);
        assert_eq2!(convert::<i32>(true)?, 1);
        assert!(convert::<u8>(256_i32).is_err());
        assert!(convert::<u32>(-1_i64).is_err());
        assert!(convert::<f32>(f64::MAX).is_err());

        // 64 bit edges, where `MAX as f64` is already one past the largest value.
        assert_eq2!(convert::<u64>(1.8e19)?, 18_000_000_000_000_000_000);
        assert_eq2!(convert::<u64>("18446744073709551615")?, u64::MAX);
        assert!(convert::<u64>("18446744073709551616").is_err());
        assert!(convert::<u64>(18_446_744_073_709_551_616.0_f64).is_err());
        assert_eq2!(convert::<i64>(-9.223_372_036_854_775_808e18_f64)?, i64::MIN);
        assert!(convert::<i64>(9.223_372_036_854_775_808e18_f64).is_err());
        assert!(convert::<i64>("9223372036854775808").is_err());
        ok!()
    }

    #[test_case(2.5, 2)]
    #[test_case(3.5, 4)]
    #[test_case(-0.4, 0)]
    fn test_float_to_integer_rounds_ties_to_even(value: f64, expected: i32) {
        assert_eq2!(convert::<i32>(value), Ok(expected));
    }

    #[test]
    fn test_float_to_integer_honors_rounding_option() -> CommonResult<()> {
        let options = ConvertOptions {
            rounding: crate::FloatToIntRounding::TowardZero,
            ..ConvertOptions::default()
        };
        assert_eq2!(i16::from_scalar(Scalar::Float(-7.9), &options)?, -7);
        assert!(i16::from_scalar(Scalar::Float(f64::NAN), &options).is_err());
        ok!()
    }

    #[test]
    fn test_text_parsing() -> CommonResult<()> {
        assert_eq2!(convert::<i32>(" 42 ")?, 42);
        assert_eq2!(convert::<i32>("41.6")?, 42);
        assert_eq2!(convert::<f64>("1e3")?, 1000.0);
        assert_eq2!(convert::<bool>("TRUE")?, true);
        assert!(convert::<u8>("forty").is_err());
        assert!(convert::<bool>("yes").is_err());
        ok!()
    }

    #[test]
    fn test_formatting_into_text() -> CommonResult<()> {
        assert_eq2!(convert::<String>(12_u8)?, "12");
        assert_eq2!(convert::<String>(false)?, "false");
        assert_eq2!(convert::<String>(0.5_f64)?, "0.5");
        ok!()
    }

    #[test]
    fn test_null_handling() -> CommonResult<()> {
        assert_eq2!(convert::<Option<i64>>(None::<i32>)?, None);
        assert_eq2!(convert::<Option<i64>>(Some(3_i32))?, Some(3));

        let error = convert::<i32>(None::<i32>).err();
        assert_eq2!(
            error.as_ref().map(CollectionError::kind),
            Some(CollectionErrorKind::InvalidCast)
        );
        assert!(convert::<String>(None::<&str>).is_err());
        assert!(convert::<Scalar>(None::<i32>)?.is_null());
        ok!()
    }

    #[test]
    fn test_reference_passthrough() -> CommonResult<()> {
        #[derive(Debug, PartialEq)]
        struct Student {
            name: &'static str,
        }

        let student = Rc::new(Student { name: "Ada" });
        let converted = convert::<Rc<Student>>(student.clone())?;
        assert!(Rc::ptr_eq(&student, &converted));
        assert_eq2!(converted.name, "Ada");

        assert!(convert::<Rc<String>>(student).is_err());
        assert!(convert::<Rc<Student>>(5_i32).is_err());
        assert!(convert::<i32>(Rc::new(5_i32)).is_err());
        ok!()
    }

    #[test]
    fn test_strategy_per_destination() {
        assert_eq2!(<u16 as FromScalar>::STRATEGY, ConversionStrategy::Numeric);
        assert_eq2!(<bool as FromScalar>::STRATEGY, ConversionStrategy::Boolean);
        assert_eq2!(<String as FromScalar>::STRATEGY, ConversionStrategy::Text);
        assert_eq2!(
            <Option<bool> as FromScalar>::STRATEGY,
            ConversionStrategy::Nullable
        );
        assert_eq2!(
            <Rc<()> as FromScalar>::STRATEGY,
            ConversionStrategy::Reference
        );
        assert_eq2!(ConversionStrategy::Nullable.to_string(), "Nullable");
    }
}
