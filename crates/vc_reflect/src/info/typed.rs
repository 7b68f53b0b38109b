use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_at(1).unwrap().name(), "y");
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] for non-generic types and
/// [`GenericTypeInfoCell`] for generic ones:
///
/// ```
/// use vc_reflect::derive::TypePath;
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{OpaqueInfo, TypeInfo, Typed};
///
/// #[derive(TypePath)]
/// struct Handle(u32);
///
/// impl Typed for Handle {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the static type information.
    ///
    /// Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for types that implement [`Typed`].
pub trait DynamicTyped {
    /// Returns the [`TypeInfo`] of the underlying type.
    ///
    /// ```
    /// use vc_reflect::{Reflect, info::{DynamicTyped, ReflectKind}};
    ///
    /// let a: Box<dyn Reflect> = Box::new(vec![1_u8]);
    /// assert_eq!(a.reflect_type_info().kind(), ReflectKind::List);
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
