use chrono::{DateTime, NaiveDateTime, Utc};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

macro_rules! impl_opaque {
    ($ty:ty, $path:literal, $name:literal, $ident:literal, $module:literal) => {
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
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Opaque);

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self, f)
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

impl_opaque!(
    NaiveDateTime,
    "chrono::NaiveDateTime",
    "NaiveDateTime",
    "NaiveDateTime",
    "chrono"
);

impl_opaque!(
    DateTime<Utc>,
    "chrono::DateTime<chrono::Utc>",
    "DateTime<Utc>",
    "DateTime",
    "chrono"
);

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDateTime, Utc};

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn chrono_types_are_opaque() {
        assert_eq!(NaiveDateTime::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<DateTime<Utc>>::type_path(), "chrono::DateTime<chrono::Utc>");

        let a = NaiveDateTime::default();
        assert_eq!(a.reflect_partial_eq(&NaiveDateTime::default()), Some(true));
        assert!(a.reflect_ref().as_opaque().is_some());
    }
}
