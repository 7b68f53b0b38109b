use alloc::borrow::Cow;
use alloc::string::{String, ToString};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Scalar, ScalarValue};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

macro_rules! impl_scalar {
    ($ty:ty, $path:literal, $name:literal, $module:expr, |$this:ident| $scalar:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Scalar);

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self, f)
            }
        }

        impl Scalar for $ty {
            #[inline]
            fn as_scalar(&self) -> ScalarValue<'_> {
                let $this = self;
                $scalar
            }
        }

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::with_capacity::<Self>(1);
                meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                meta
            }
        }
    };
}

impl_scalar!(bool, "bool", "bool", None, |v| ScalarValue::Bool(*v));

impl_scalar!(i8, "i8", "i8", None, |v| ScalarValue::Int(i64::from(*v)));
impl_scalar!(i16, "i16", "i16", None, |v| ScalarValue::Int(i64::from(*v)));
impl_scalar!(i32, "i32", "i32", None, |v| ScalarValue::Int(i64::from(*v)));
impl_scalar!(i64, "i64", "i64", None, |v| ScalarValue::Int(*v));
impl_scalar!(isize, "isize", "isize", None, |v| ScalarValue::Int(*v as i64));

impl_scalar!(u8, "u8", "u8", None, |v| ScalarValue::UInt(u64::from(*v)));
impl_scalar!(u16, "u16", "u16", None, |v| ScalarValue::UInt(u64::from(*v)));
impl_scalar!(u32, "u32", "u32", None, |v| ScalarValue::UInt(u64::from(*v)));
impl_scalar!(u64, "u64", "u64", None, |v| ScalarValue::UInt(*v));
impl_scalar!(usize, "usize", "usize", None, |v| ScalarValue::UInt(*v as u64));

impl_scalar!(f32, "f32", "f32", None, |v| ScalarValue::Float(f64::from(*v)));
impl_scalar!(f64, "f64", "f64", None, |v| ScalarValue::Float(*v));

impl_scalar!(char, "char", "char", None, |v| ScalarValue::Str(Cow::Owned(
    v.to_string()
)));

impl_scalar!(
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string"),
    |v| ScalarValue::Str(Cow::Borrowed(v.as_str()))
);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::ScalarValue;

    #[test]
    fn scalar_paths() {
        assert_eq!(<u8 as TypePath>::type_path(), "u8");
        assert_eq!(<u8 as TypePath>::module_path(), None);
        assert_eq!(<String as TypePath>::type_name(), "String");
        assert_eq!(<String as TypePath>::module_path(), Some("alloc::string"));
        assert_eq!(f64::type_info().kind(), ReflectKind::Scalar);
    }

    #[test]
    fn scalar_set_and_eq() {
        let mut x = 1_i32;
        x.set(2_i32.into_boxed_reflect()).unwrap();
        assert_eq!(x, 2);

        let rejected = x.set(2_u8.into_boxed_reflect()).unwrap_err();
        assert!(rejected.is::<u8>());

        assert_eq!(x.reflect_partial_eq(&2_i32), Some(true));
        assert_eq!(x.reflect_partial_eq(&2_i64), Some(false));
    }

    #[test]
    fn scalar_parse_roundtrip() {
        let info = i16::type_info().as_scalar().unwrap();
        let value = info.parse(ScalarValue::UInt(300)).unwrap();
        assert_eq!(value.take::<i16>().unwrap(), 300);

        let info = String::type_info().as_scalar().unwrap();
        let value = info.parse(ScalarValue::Str("hi".into())).unwrap();
        assert_eq!(value.reflect_ref().as_scalar().unwrap().as_scalar(), ScalarValue::Str("hi".into()));
    }
}
