use alloc::boxed::Box;
use core::any::Any;

/// A capability of a registered type, stored in its [`TypeMeta`].
///
/// Every `Clone + Send + Sync + 'static` type is a `TypeTrait`.
///
/// ```
/// use vc_reflect::registry::{TypeMeta, TypeTrait};
///
/// #[derive(Clone)]
/// struct Label(&'static str);
///
/// let mut meta = TypeMeta::of::<u8>();
/// meta.insert_trait(Label("byte"));
///
/// assert_eq!(meta.get_trait::<Label>().unwrap().0, "byte");
/// ```
///
/// [`TypeMeta`]: crate::registry::TypeMeta
pub trait TypeTrait: Any + Send + Sync {
    /// Clones the type trait into a new box.
    fn clone_type_trait(&self) -> Box<dyn TypeTrait>;
}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {
    #[inline]
    fn clone_type_trait(&self) -> Box<dyn TypeTrait> {
        Box::new(self.clone())
    }
}

impl dyn TypeTrait {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl core::fmt::Debug for dyn TypeTrait {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("TypeTrait")
    }
}
