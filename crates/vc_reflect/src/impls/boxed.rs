use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::registry::{GetTypeMeta, TypeMeta};

/// A slot holding a reflected value of any type.
///
/// Use it for fields whose concrete type is only known at runtime.
/// The declared type of such a field is [`ReflectKind::Dynamic`], so the
/// concrete type must be recovered from elsewhere, e.g. a type tag.
///
/// `ReflectBox` never nests: [`from_boxed`](Self::from_boxed) unwraps an inner box
/// and [`set`](Reflect::set) with another box replaces the content.
///
/// ```
/// use vc_reflect::{Reflect, ReflectBox};
///
/// let mut slot = ReflectBox::new(1_u8);
/// assert!(slot.get().is::<u8>());
///
/// slot.set(Box::new(String::from("text"))).unwrap();
/// assert_eq!(slot.get().downcast_ref::<String>().unwrap(), "text");
///
/// let nested = ReflectBox::from_boxed(Box::new(ReflectBox::new(2_i32)));
/// assert!(nested.get().is::<i32>());
/// ```
pub struct ReflectBox(Box<dyn Reflect>);

impl ReflectBox {
    /// Boxes `value`.
    #[inline]
    pub fn new<T: Reflect>(value: T) -> Self {
        Self::from_boxed(Box::new(value))
    }

    /// Wraps a boxed value, unwrapping it first if it is a `ReflectBox` itself.
    pub fn from_boxed(value: Box<dyn Reflect>) -> Self {
        match value.take::<ReflectBox>() {
            Ok(inner) => inner,
            Err(value) => Self(value),
        }
    }

    /// Returns the held value.
    #[inline]
    pub fn get(&self) -> &dyn Reflect {
        &*self.0
    }

    /// Returns the held value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.0
    }

    /// Returns the held value.
    #[inline]
    pub fn into_inner(self) -> Box<dyn Reflect> {
        self.0
    }
}

impl TypePath for ReflectBox {
    #[inline]
    fn type_path() -> &'static str {
        "vc_reflect::ReflectBox"
    }

    #[inline]
    fn type_name() -> &'static str {
        "ReflectBox"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "ReflectBox"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("vc_reflect")
    }
}

impl Typed for ReflectBox {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

impl Reflect for ReflectBox {
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Self::from_boxed(value);
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Dynamic
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Dynamic(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Dynamic(self)
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let other = match other.downcast_ref::<ReflectBox>() {
            Some(other) => other.get(),
            None => other,
        };
        self.0.reflect_partial_eq(other)
    }
}

impl GetTypeMeta for ReflectBox {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

impl PartialEq for ReflectBox {
    fn eq(&self, other: &Self) -> bool {
        self.reflect_partial_eq(other) == Some(true)
    }
}

impl core::fmt::Debug for ReflectBox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ReflectBox").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;

    use crate::info::{ReflectKind, Typed};
    use crate::{Reflect, ReflectBox};

    #[test]
    fn box_kind() {
        assert_eq!(ReflectBox::type_info().kind(), ReflectKind::Dynamic);
        let slot = ReflectBox::new(3_u16);
        assert!(slot.reflect_ref().as_dynamic().is_some());
        assert_eq!(format!("{slot:?}"), "ReflectBox(3)");
    }

    #[test]
    fn box_eq_sees_through() {
        let slot = ReflectBox::new(3_u16);
        assert_eq!(slot.reflect_partial_eq(&3_u16), Some(true));
        assert_eq!(slot, ReflectBox::new(3_u16));
        assert_ne!(slot, ReflectBox::new(3_u32));
    }

    #[test]
    fn box_never_nests() {
        let mut slot = ReflectBox::new(ReflectBox::new(true));
        assert!(slot.get().is::<bool>());

        slot.set(Box::new(ReflectBox::new(1_i8))).unwrap();
        assert!(slot.get().is::<i8>());
        assert!(slot.into_inner().take::<i8>().is_ok());
    }
}
