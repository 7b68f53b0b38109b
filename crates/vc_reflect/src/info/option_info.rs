use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed};

/// Compile-time information of `Option<T>`.
///
/// Besides the inner type, it keeps constructors for both variants,
/// so an optional slot can be built from a reflected inner value.
///
/// ```
/// use vc_reflect::{Reflect, info::Typed};
///
/// let info = <Option<u32>>::type_info().as_optional().unwrap();
///
/// let some = info.new_some(Box::new(7_u32)).ok().unwrap();
/// assert_eq!(some.take::<Option<u32>>().unwrap(), Some(7));
///
/// let none = info.new_none();
/// assert_eq!(none.take::<Option<u32>>().unwrap(), None);
/// ```
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    some_ty: Type,
    some_info: fn() -> &'static TypeInfo,
    none: fn() -> Box<dyn Reflect>,
    some: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
}

impl OptionInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates the information of `Option<T>`.
    pub fn new<T: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<Option<T>>(),
            some_ty: Type::of::<T>(),
            some_info: T::type_info,
            none: || Box::new(Option::<T>::None) as Box<dyn Reflect>,
            some: |value| {
                let value = value.take::<T>()?;
                Ok(Box::new(Some(value)) as Box<dyn Reflect>)
            },
        }
    }

    /// Returns the inner [`Type`].
    #[inline(always)]
    pub const fn some_ty(&self) -> &Type {
        &self.some_ty
    }

    /// Returns the inner [`TypeInfo`].
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }

    /// Creates a boxed `None`.
    #[inline]
    pub fn new_none(&self) -> Box<dyn Reflect> {
        (self.none)()
    }

    /// Wraps `value` into a boxed `Some`.
    ///
    /// Returns the value back if it is not of the inner type.
    #[inline]
    pub fn new_some(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.some)(value)
    }
}
