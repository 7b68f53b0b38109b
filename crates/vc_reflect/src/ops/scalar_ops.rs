use alloc::borrow::Cow;
use alloc::string::String;

use crate::Reflect;

// -----------------------------------------------------------------------------
// ScalarValue

/// The value of a leaf type, in the widest representation of its family.
///
/// Signed integers become [`Int`](Self::Int), unsigned ones [`UInt`](Self::UInt),
/// floats [`Float`](Self::Float), and `char` and `String` become [`Str`](Self::Str).
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
}

impl ScalarValue<'_> {
    /// Returns a short name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

// -----------------------------------------------------------------------------
// Scalar

/// Read access to a leaf value.
///
/// ```
/// use vc_reflect::ops::{Scalar, ScalarValue};
///
/// assert_eq!(7_u16.as_scalar(), ScalarValue::UInt(7));
/// assert_eq!('x'.as_scalar(), ScalarValue::Str("x".into()));
/// ```
pub trait Scalar: Reflect {
    /// Returns the value as a [`ScalarValue`].
    fn as_scalar(&self) -> ScalarValue<'_>;
}

// -----------------------------------------------------------------------------
// FromScalar

/// Construction of a leaf value from a [`ScalarValue`].
///
/// Numeric conversions succeed whenever the value fits the target type.
///
/// ```
/// use vc_reflect::ops::{FromScalar, ScalarValue};
///
/// assert_eq!(i8::from_scalar(ScalarValue::UInt(12)), Some(12));
/// assert_eq!(i8::from_scalar(ScalarValue::Int(300)), None);
/// assert_eq!(f32::from_scalar(ScalarValue::Int(2)), Some(2.0));
/// assert_eq!(char::from_scalar(ScalarValue::Str("ab".into())), None);
/// ```
pub trait FromScalar: Sized {
    /// Returns `None` if `scalar` cannot represent a value of this type.
    fn from_scalar(scalar: ScalarValue<'_>) -> Option<Self>;
}

macro_rules! impl_from_scalar_int {
    ($($ty:ty),*) => {$(
        impl FromScalar for $ty {
            #[inline]
            fn from_scalar(scalar: ScalarValue<'_>) -> Option<Self> {
                match scalar {
                    ScalarValue::Int(v) => <$ty>::try_from(v).ok(),
                    ScalarValue::UInt(v) => <$ty>::try_from(v).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_from_scalar_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_scalar_float {
    ($($ty:ty),*) => {$(
        impl FromScalar for $ty {
            #[inline]
            fn from_scalar(scalar: ScalarValue<'_>) -> Option<Self> {
                match scalar {
                    ScalarValue::Float(v) => Some(v as $ty),
                    ScalarValue::Int(v) => Some(v as $ty),
                    ScalarValue::UInt(v) => Some(v as $ty),
                    _ => None,
                }
            }
        }
    )*};
}

impl_from_scalar_float!(f32, f64);

impl FromScalar for bool {
    #[inline]
    fn from_scalar(scalar: ScalarValue<'_>) -> Option<Self> {
        match scalar {
            ScalarValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FromScalar for char {
    fn from_scalar(scalar: ScalarValue<'_>) -> Option<Self> {
        let ScalarValue::Str(s) = scalar else {
            return None;
        };
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl FromScalar for String {
    #[inline]
    fn from_scalar(scalar: ScalarValue<'_>) -> Option<Self> {
        match scalar {
            ScalarValue::Str(s) => Some(s.into_owned()),
            _ => None,
        }
    }
}
