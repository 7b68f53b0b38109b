use crate::info::{Type, TypePath};

/// Compile-time information of a type whose internals are hidden.
///
/// Opaque types need a dedicated strategy to be serialized.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

/// Compile-time information of a slot that accepts any reflected type.
///
/// The declared type says nothing about the concrete value,
/// see [`ReflectBox`](crate::ReflectBox).
#[derive(Clone, Debug)]
pub struct DynamicInfo {
    ty: Type,
}

impl DynamicInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`DynamicInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
