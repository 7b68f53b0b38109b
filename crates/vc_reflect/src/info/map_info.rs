use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Compile-time information of a map with `String` keys,
/// such as `BTreeMap<String, T>`.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`MapInfo`] for `TMap` holding `TValue`s.
    #[inline]
    pub const fn new<TMap: TypePath, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            value_ty: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the value [`Type`].
    #[inline(always)]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    /// Returns the value [`TypeInfo`].
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
