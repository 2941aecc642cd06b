// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{any::Any,
          fmt::{Debug, Formatter},
          rc::Rc};

use strum_macros::IntoStaticStr;

/// The common shape every source item is lowered to before the best-effort converter
/// raises it into the destination type. See [`crate::FromScalar`].
///
/// ```text
/// source item ──ToScalar──▶ Scalar ──FromScalar──▶ destination item
///    i32                    Int(7)                     Option<f64> = Some(7.0)
///    Option<u8>::None       Null                       i32 => InvalidCast
///    Rc<Student>            Object(..)                 Rc<Student>
/// ```
#[derive(Clone, IntoStaticStr)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    /// Any other value, passed through by reference and recovered by downcasting.
    Object(Rc<dyn Any>),
}

impl Scalar {
    /// Name of the variant, eg `"Int"`, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str { self.into() }

    #[must_use]
    pub fn is_null(&self) -> bool { matches!(self, Self::Null) }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(value) => write!(f, "Bool({value})"),
            Self::Int(value) => write!(f, "Int({value})"),
            Self::UInt(value) => write!(f, "UInt({value})"),
            Self::Float(value) => write!(f, "Float({value})"),
            Self::Text(value) => write!(f, "Text({value:?})"),
            Self::Object(_) => write!(f, "Object(..)"),
        }
    }
}

/// Lower a value into a [`Scalar`].
pub trait ToScalar {
    fn to_scalar(&self) -> Scalar;
}

macro_rules! impl_to_scalar {
    ($variant:ident as $wide:ty: $($source:ty),+) => {
        $(
            impl ToScalar for $source {
                fn to_scalar(&self) -> Scalar { Scalar::$variant(<$wide>::from(*self)) }
            }
        )+
    };
}

impl_to_scalar!(Int as i64: i8, i16, i32, i64);
impl_to_scalar!(UInt as u64: u8, u16, u32, u64);
impl_to_scalar!(Float as f64: f32, f64);
impl_to_scalar!(Bool as bool: bool);

/// `isize` and `usize` are at most 64 bits wide on every supported target.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
mod pointer_sized {
    use super::{Scalar, ToScalar};

    impl ToScalar for isize {
        fn to_scalar(&self) -> Scalar { Scalar::Int(*self as i64) }
    }

    impl ToScalar for usize {
        fn to_scalar(&self) -> Scalar { Scalar::UInt(*self as u64) }
    }
}

impl ToScalar for char {
    fn to_scalar(&self) -> Scalar { Scalar::Text(self.to_string()) }
}

impl ToScalar for str {
    fn to_scalar(&self) -> Scalar { Scalar::Text(self.to_owned()) }
}

impl ToScalar for String {
    fn to_scalar(&self) -> Scalar { Scalar::Text(self.clone()) }
}

impl ToScalar for Scalar {
    fn to_scalar(&self) -> Scalar { self.clone() }
}

impl<T: ToScalar> ToScalar for Option<T> {
    fn to_scalar(&self) -> Scalar {
        match self {
            Some(value) => value.to_scalar(),
            None => Scalar::Null,
        }
    }
}

impl<U: Any> ToScalar for Rc<U> {
    fn to_scalar(&self) -> Scalar { Scalar::Object(self.clone()) }
}

impl<T: ToScalar + ?Sized> ToScalar for &T {
    fn to_scalar(&self) -> Scalar { (**self).to_scalar() }
}
