use crate::Reflect;
use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{OptionInfo, TypeInfo, TypePath, Typed};
use crate::ops::Optional;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionInfo::new::<T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Optional);

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::optional_partial_eq(self, other)
    }
}

impl<T: Reflect + Typed> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|v| v as &mut dyn Reflect)
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for Option<T> {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::info::ReflectKind;
    use crate::ops::Optional;

    #[test]
    fn option_paths() {
        assert_eq!(
            <Option<String>>::type_path(),
            "core::option::Option<alloc::string::String>"
        );
        assert_eq!(<Option<u8>>::type_name(), "Option<u8>");
        let info = <Option<u8>>::type_info().as_optional().unwrap();
        assert_eq!(info.some_info().type_path(), "u8");
    }

    #[test]
    fn option_ops() {
        let mut x: Option<u8> = Some(1);
        assert_eq!(x.reflect_kind(), ReflectKind::Optional);
        *x.value_mut().unwrap().downcast_mut::<u8>().unwrap() = 9;
        assert_eq!(x, Some(9));

        assert_eq!(x.reflect_partial_eq(&Some(9_u8)), Some(true));
        assert_eq!(x.reflect_partial_eq(&None::<u8>), Some(false));
        assert_eq!(format!("{:?}", x.as_reflect()), "Some(9)");
    }
}
