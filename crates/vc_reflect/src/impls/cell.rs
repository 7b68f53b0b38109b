//! Containers for static storage of type information.
//!
//! These are used to implement [`Typed`](crate::info::Typed) and
//! [`TypePath`](crate::info::TypePath) by hand.
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] holding one [`TypeInfo`].
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`]: a `static` inside a
//!   generic function is shared by every instantiation, so these keep one
//!   entry per [`TypeId`].
//!
//! There is no `NonGenericTypePathCell`, a string literal does the job.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use vc_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
///
/// See [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for the [`TypeInfo`] of a non-generic type.
///
/// ```
/// use vc_reflect::derive::TypePath;
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
///
/// #[derive(TypePath)]
/// struct Account {
///     owner: String,
/// }
///
/// impl Typed for Account {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<String>("owner")]))
///         })
///     }
/// }
///
/// let info = Account::type_info().as_struct().unwrap();
/// assert_eq!(info.field("owner").unwrap().type_info().type_path(), "alloc::string::String");
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

impl<T: TypedProperty> Default for NonGenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for the [`TypeInfo`] of a generic type.
///
/// ```
/// use vc_reflect::{Reflect, derive::TypePath};
/// use vc_reflect::impls::GenericTypeInfoCell;
/// use vc_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
///
/// #[derive(TypePath)]
/// struct Wrapper<T> {
///     inner: T,
/// }
///
/// impl<T: Reflect + Typed> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<T>("inner")]))
///         })
///     }
/// }
///
/// let a = <Wrapper<u8>>::type_info().as_struct().unwrap();
/// let b = <Wrapper<bool>>::type_info().as_struct().unwrap();
/// assert_eq!(a.field_at(0).unwrap().type_info().type_path(), "u8");
/// assert_eq!(b.field_at(0).unwrap().type_info().type_path(), "bool");
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for the type path strings of a generic type.
///
/// ```
/// use vc_reflect::impls::{self, GenericTypePathCell};
/// use vc_reflect::info::TypePath;
///
/// struct Page<T>(T);
///
/// impl<T: TypePath> TypePath for Page<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["demo::Page<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Page<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str {
///         "Page"
///     }
/// }
///
/// assert_eq!(<Page<i32>>::type_path(), "demo::Page<i32>");
/// assert_eq!(<Page<u8>>::type_name(), "Page<u8>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, creating it with `f` on first use.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl<T: TypedProperty> Default for GenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
