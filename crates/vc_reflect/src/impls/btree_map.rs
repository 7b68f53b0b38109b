use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::Reflect;
use crate::impls::{self, GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};

impl<T: TypePath> TypePath for BTreeMap<String, T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            impls::concat(&[
                "alloc::collections::BTreeMap<alloc::string::String, ",
                T::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| impls::concat(&["BTreeMap<String, ", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "BTreeMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<T: Reflect + Typed> Typed for BTreeMap<String, T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for BTreeMap<String, T> {
    crate::reflection::impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        impls::map_partial_eq(self, other)
    }
}

impl<T: Reflect + Typed> Map for BTreeMap<String, T> {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        BTreeMap::get(self, key).map(|v| v as &dyn Reflect)
    }

    fn insert_reflect(
        &mut self,
        key: String,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>> {
        let value = value.take::<T>()?;
        BTreeMap::insert(self, key, value);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(k, v)| (k.as_str(), v as &dyn Reflect)))
    }
}

impl<T: Reflect + GetTypeMeta> GetTypeMeta for BTreeMap<String, T> {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(1);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<String>();
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::Map;

    #[test]
    fn map_ops() {
        assert_eq!(<BTreeMap<String, u8>>::type_name(), "BTreeMap<String, u8>");

        let mut map: BTreeMap<String, u8> = BTreeMap::new();
        map.insert_reflect("b".into(), 2_u8.into_boxed_reflect()).unwrap();
        map.insert_reflect("a".into(), 1_u8.into_boxed_reflect()).unwrap();
        assert!(map.insert_reflect("c".into(), 3_i8.into_boxed_reflect()).is_err());

        let keys: alloc::vec::Vec<&str> = Map::iter(&map).map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(format!("{:?}", map.as_reflect()), r#"{"a": 1, "b": 2}"#);

        let mut other = map.clone();
        assert_eq!(map.reflect_partial_eq(&other), Some(true));
        other.insert("a".into(), 5);
        assert_eq!(map.reflect_partial_eq(&other), Some(false));
    }
}
