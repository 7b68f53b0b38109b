use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;

use vc_reflect::Reflect;
use vc_reflect::info::StructInfo;
use vc_reflect::ops::{ReflectMut, ReflectRef};

use crate::{Result, SerialError, Serializer, Strategy, Value};

/// The reflective strategy of a struct.
///
/// Writes every reflected field by name plus the type tag. Reading starts
/// from the default instance and fills the fields present in the data,
/// absent and null entries keep their default.
///
/// A field named like the configured type key fails both ways with
/// [`SerialError::Reflection`].
#[derive(Debug, Clone, Copy)]
pub struct StructStrategy {
    info: &'static StructInfo,
}

impl StructStrategy {
    /// Creates the strategy of the struct described by `info`.
    #[inline]
    pub const fn new(info: &'static StructInfo) -> Self {
        Self { info }
    }

    /// Returns the described struct.
    #[inline]
    pub const fn info(&self) -> &'static StructInfo {
        self.info
    }

    fn check_type_key(&self, type_key: &str) -> Result<()> {
        match self.info.field(type_key) {
            Some(_) => Err(SerialError::reflection(
                self.info.type_path(),
                alloc::format!("the field `{type_key}` collides with the type key"),
            )),
            None => Ok(()),
        }
    }
}

impl Strategy for StructStrategy {
    fn to_value(&self, value: &dyn Reflect, serializer: &Serializer) -> Result<Value> {
        let ReflectRef::Struct(object) = value.reflect_ref() else {
            return Err(SerialError::mismatch(self.info.type_path(), value.reflect_type_path()));
        };

        let config = serializer.config();
        self.check_type_key(&config.type_key)?;

        let mut map = BTreeMap::new();
        for (name, field) in object.fields() {
            let member = serializer.serialize_member(field)?;
            if member.is_null() && config.skip_null_members {
                continue;
            }
            map.insert(String::from(name), member);
        }
        map.insert(
            config.type_key.clone(),
            Value::String(self.info.type_path().into()),
        );

        Ok(Value::Map(map))
    }

    fn from_value(&self, data: &Value, serializer: &Serializer) -> Result<Box<dyn Reflect>> {
        let empty = BTreeMap::new();
        let map = match data {
            Value::Map(map) => map,
            Value::Null => &empty,
            other => return Err(SerialError::mismatch(self.info.type_path(), other.kind_name())),
        };

        self.check_type_key(&serializer.config().type_key)?;

        let mut value = serializer.construct(self.info.ty())?;
        let ReflectMut::Struct(object) = value.reflect_mut() else {
            return Err(SerialError::reflection(
                self.info.type_path(),
                "the default constructor does not produce a struct",
            ));
        };

        for field in self.info.iter() {
            let name = field.name();
            let data = match map.get(name) {
                None | Some(Value::Null) => continue,
                Some(data) => data,
            };

            let member = serializer.deserialize_member(field.type_info(), data)?;
            let slot = object.field_mut(name).ok_or_else(|| {
                SerialError::reflection(self.info.type_path(), alloc::format!("no field `{name}`"))
            })?;
            slot.set(member).map_err(|rejected| {
                SerialError::mismatch(field.type_path(), rejected.reflect_type_path())
            })?;
        }

        Ok(value)
    }
}
