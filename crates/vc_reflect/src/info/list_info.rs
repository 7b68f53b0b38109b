use crate::info::{Type, TypeInfo, TypePath, Typed};

/// Compile-time information of an ordered collection, such as `Vec<T>`.
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Vec<u8>>::type_info().as_list().unwrap();
/// assert!(info.item_ty().is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`ListInfo`] for `TList` holding `TItem`s.
    #[inline]
    pub const fn new<TList: TypePath, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    /// Creates the information of a type that wraps another list,
    /// sharing its element type.
    #[inline]
    pub const fn wrapping<TList: TypePath>(inner: &ListInfo) -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: inner.item_ty,
            item_info: inner.item_info,
        }
    }

    /// Returns the element [`Type`].
    #[inline(always)]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the element [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
