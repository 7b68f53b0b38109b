use core::{error, fmt};

use crate::info::{DynamicInfo, ListInfo, MapInfo, OpaqueInfo};
use crate::info::{OptionInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to an access trait in [`ops`](crate::ops),
/// such as [`Struct`](crate::ops::Struct) or [`List`](crate::ops::List).
///
/// Obtained via [`Reflect::reflect_kind`](crate::Reflect::reflect_kind)
/// or [`TypeInfo::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// An ordered collection, see [`List`](crate::ops::List).
    List,
    /// A string-keyed map, see [`Map`](crate::ops::Map).
    Map,
    /// A value that may be absent, see [`Optional`](crate::ops::Optional).
    Optional,
    /// A single leaf value, see [`Scalar`](crate::ops::Scalar).
    Scalar,
    /// A slot holding a value of any reflected type, see [`ReflectBox`](crate::ReflectBox).
    Dynamic,
    /// A type whose internals are not visible to reflection.
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for kinds made of other reflected values
    /// that a generic strategy can walk: [`Struct`](Self::Struct) and [`List`](Self::List).
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Struct | Self::List)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Optional => f.pad("Optional"),
            Self::Scalar => f.pad("Scalar"),
            Self::Dynamic => f.pad("Dynamic"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Every variant carries the [`Type`] of the described type.
/// Container variants also carry the information of their element type,
/// behind a function pointer so that recursive types are fine.
///
/// ```
/// use vc_reflect::info::{ReflectKind, TypeInfo, Typed};
///
/// let info: &TypeInfo = <Vec<Option<String>>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
///
/// let item = info.as_list().unwrap().item_info();
/// assert_eq!(item.kind(), ReflectKind::Optional);
/// assert_eq!(item.type_path(), "core::option::Option<alloc::string::String>");
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Map(MapInfo),
    Optional(OptionInfo),
    Scalar(ScalarInfo),
    Dynamic(DynamicInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_as_fn {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        #[inline]
        pub fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    crate::info::impl_type_fn!(self => match self {
        Self::Struct(info) => info.ty(),
        Self::List(info) => info.ty(),
        Self::Map(info) => info.ty(),
        Self::Optional(info) => info.ty(),
        Self::Scalar(info) => info.ty(),
        Self::Dynamic(info) => info.ty(),
        Self::Opaque(info) => info.ty(),
    });

    /// Returns the [`ReflectKind`] of the described type.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_as_fn!(as_struct: Struct => StructInfo);
    impl_as_fn!(as_list: List => ListInfo);
    impl_as_fn!(as_map: Map => MapInfo);
    impl_as_fn!(as_optional: Optional => OptionInfo);
    impl_as_fn!(as_scalar: Scalar => ScalarInfo);
}
