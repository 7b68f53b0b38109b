use crate::impls::ReflectBox;
use crate::info::ReflectKind;
use crate::ops::{List, Map, Optional, Scalar, Struct};
use crate::Reflect;

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, by [kind](ReflectKind).
///
/// Obtained via [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Scalar(&'a dyn Scalar),
    Dynamic(&'a ReflectBox),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, by [kind](ReflectKind).
///
/// Obtained via [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Scalar(&'a mut dyn Scalar),
    Dynamic(&'a mut ReflectBox),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_fn {
    ($($kind:ident => $name:ident : $ty:ty),* $(,)?) => {
        /// Returns the [`ReflectKind`] of the viewed value.
        pub fn kind(&self) -> ReflectKind {
            match self {
                $(Self::$kind(_) => ReflectKind::$kind,)*
            }
        }

        $(
            #[doc = concat!("Returns the inner value if this is a `", stringify!($kind), "`.")]
            #[inline]
            pub fn $name(self) -> Option<$ty> {
                match self {
                    Self::$kind(value) => Some(value),
                    _ => None,
                }
            }
        )*
    };
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn! {
        Struct => as_struct: &'a dyn Struct,
        List => as_list: &'a dyn List,
        Map => as_map: &'a dyn Map,
        Optional => as_optional: &'a dyn Optional,
        Scalar => as_scalar: &'a dyn Scalar,
        Dynamic => as_dynamic: &'a ReflectBox,
        Opaque => as_opaque: &'a dyn Reflect,
    }
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn! {
        Struct => as_struct: &'a mut dyn Struct,
        List => as_list: &'a mut dyn List,
        Map => as_map: &'a mut dyn Map,
        Optional => as_optional: &'a mut dyn Optional,
        Scalar => as_scalar: &'a mut dyn Scalar,
        Dynamic => as_dynamic: &'a mut ReflectBox,
        Opaque => as_opaque: &'a mut dyn Reflect,
    }
}
