use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypePath};
use crate::ops::{FromScalar, ScalarValue};

/// Compile-time information of a scalar type, such as `i32` or `String`.
///
/// Keeps a parser from [`ScalarValue`], which converts between compatible
/// numeric representations and rejects out-of-range values.
///
/// ```
/// use vc_reflect::{info::Typed, ops::ScalarValue};
///
/// let info = u8::type_info().as_scalar().unwrap();
///
/// let v = info.parse(ScalarValue::Int(200)).unwrap();
/// assert_eq!(v.take::<u8>().unwrap(), 200);
///
/// assert!(info.parse(ScalarValue::Int(-1)).is_none());
/// assert!(info.parse(ScalarValue::Bool(true)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    parse: fn(ScalarValue<'_>) -> Option<Box<dyn Reflect>>,
}

impl ScalarInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates the information of the scalar type `T`.
    #[inline]
    pub fn new<T: FromScalar + Reflect + TypePath>() -> Self {
        Self {
            ty: Type::of::<T>(),
            parse: |scalar| Some(Box::new(T::from_scalar(scalar)?) as Box<dyn Reflect>),
        }
    }

    /// Converts `scalar` into a boxed value of the described type.
    #[inline]
    pub fn parse(&self, scalar: ScalarValue<'_>) -> Option<Box<dyn Reflect>> {
        (self.parse)(scalar)
    }
}
