use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use vc_reflect::Reflect;
use vc_reflect::info::ListInfo;
use vc_reflect::ops::{ReflectMut, ReflectRef};

use crate::{Result, SerialError, Serializer, Strategy, Value};

/// The reflective strategy of an ordered collection.
///
/// A collection is written as `{ items: [...], __type }`. When reading,
/// `null`, `{}` and a map without items all give an empty collection,
/// and a bare list is accepted as the items.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy {
    info: &'static ListInfo,
}

impl ListStrategy {
    /// Creates the strategy of the collection described by `info`.
    #[inline]
    pub const fn new(info: &'static ListInfo) -> Self {
        Self { info }
    }

    /// Returns the described collection.
    #[inline]
    pub const fn info(&self) -> &'static ListInfo {
        self.info
    }
}

impl Strategy for ListStrategy {
    fn to_value(&self, value: &dyn Reflect, serializer: &Serializer) -> Result<Value> {
        let ReflectRef::List(list) = value.reflect_ref() else {
            return Err(SerialError::mismatch(self.info.type_path(), value.reflect_type_path()));
        };

        let items = list
            .iter()
            .map(|item| serializer.serialize_member(item))
            .collect::<Result<_>>()?;

        let config = serializer.config();
        let mut map = BTreeMap::new();
        map.insert(config.items_key.clone(), Value::List(items));
        map.insert(
            config.type_key.clone(),
            Value::String(self.info.type_path().into()),
        );

        Ok(Value::Map(map))
    }

    fn from_value(&self, data: &Value, serializer: &Serializer) -> Result<Box<dyn Reflect>> {
        let items: &[Value] = match data {
            Value::Null => &[],
            Value::List(items) => items,
            Value::Map(map) => match map.get(&serializer.config().items_key) {
                None | Some(Value::Null) => &[],
                Some(Value::List(items)) => items,
                Some(other) => {
                    return Err(SerialError::mismatch("a list of items", other.kind_name()));
                }
            },
            other => return Err(SerialError::mismatch(self.info.type_path(), other.kind_name())),
        };

        let mut value = serializer.construct(self.info.ty())?;
        let ReflectMut::List(list) = value.reflect_mut() else {
            return Err(SerialError::reflection(
                self.info.type_path(),
                "the default constructor does not produce a list",
            ));
        };

        let item_info = self.info.item_info();
        for item in items {
            let element = serializer.deserialize_member(item_info, item)?;
            list.push_reflect(element).map_err(|rejected| {
                SerialError::mismatch(item_info.type_path(), rejected.reflect_type_path())
            })?;
        }

        Ok(value)
    }
}
