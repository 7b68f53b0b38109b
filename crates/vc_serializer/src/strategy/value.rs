use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::TypePath;

use crate::{Result, SerialError, Serializer, Strategy, Value};

/// Passes [`Value`] members through untouched.
///
/// Lets a struct carry raw nested data, written without type tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueStrategy;

impl Strategy for ValueStrategy {
    fn to_value(&self, value: &dyn Reflect, _: &Serializer) -> Result<Value> {
        value
            .downcast_ref::<Value>()
            .cloned()
            .ok_or_else(|| SerialError::mismatch(Value::type_path(), value.reflect_type_path()))
    }

    #[inline]
    fn from_value(&self, data: &Value, _: &Serializer) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(data.clone()))
    }
}
