//! Items referenced by the code generated in `vc_reflect_derive`.
//!
//! Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// A registration function collected at link time.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    inventory::collect!(__AutoRegisterFunc);

    // Always present, so an empty iteration means the platform is unsupported.
    inventory::submit! {
        __AutoRegisterFunc(TypeRegistry::register_scalars)
    }

    pub(crate) fn register_types(registry: &mut TypeRegistry) -> bool {
        let mut available = false;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
            available = true;
        }
        available
    }
}

pub mod macro_utils {
    pub use alloc::boxed::Box;

    use crate::info::{ListInfo, TypeInfo, Typed};
    use crate::ops::List;

    /// Returns the [`ListInfo`] of a list type, for `#[reflect(list)]` wrappers.
    pub fn list_info_of<T: List + Typed>() -> &'static ListInfo {
        match T::type_info() {
            TypeInfo::List(info) => info,
            other => unreachable!("`{}` implements `List` but is a {}", other.type_path(), other.kind()),
        }
    }
}
