use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};
use vc_reflect::derive::Reflect;
use vc_reflect::ops::ScalarValue;

/// The generic representation produced by serialization.
///
/// Objects become [`Map`](Self::Map)s tagged with their type path,
/// collections become `{ items: [...], __type }` maps.
///
/// `Value` implements serde's `Serialize` and `Deserialize` without any
/// tagging, so it can be carried by any serde format:
///
/// ```
/// use vc_serializer::Value;
///
/// let value: Value = [("name", Value::from("foo")), ("count", Value::from(2_u32))]
///     .into_iter()
///     .collect();
///
/// let json = serde_json::to_string(&value).unwrap();
/// assert_eq!(json, r#"{"count":2,"name":"foo"}"#);
/// assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), value);
/// ```
///
/// Unsigned integers that fit `i64` are stored as [`Int`](Self::Int),
/// so equal numbers compare equal regardless of their origin.
#[derive(Reflect, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[reflect(type_path = "vc_serializer::Value", opaque, default, partial_eq, debug)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string content of a [`Value::String`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a [`Value::List`].
    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the entries of a [`Value::Map`].
    #[inline]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the entry `key` of a [`Value::Map`].
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key)
    }

    /// Returns the type tag stored under `type_key`, if this is a tagged map.
    ///
    /// ```
    /// use vc_serializer::Value;
    ///
    /// let value: Value = [("__type", Value::from("app::Foo"))].into_iter().collect();
    /// assert_eq!(value.type_tag("__type"), Some("app::Foo"));
    /// assert_eq!(Value::Null.type_tag("__type"), None);
    /// ```
    #[inline]
    pub fn type_tag(&self, type_key: &str) -> Option<&str> {
        self.get(type_key)?.as_str()
    }

    /// Returns a short name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Views a leaf value as a [`ScalarValue`].
    ///
    /// Returns `None` for null, lists and maps.
    pub fn as_scalar(&self) -> Option<ScalarValue<'_>> {
        Some(match self {
            Self::Bool(v) => ScalarValue::Bool(*v),
            Self::Int(v) => ScalarValue::Int(*v),
            Self::UInt(v) => ScalarValue::UInt(*v),
            Self::Float(v) => ScalarValue::Float(*v),
            Self::String(v) => ScalarValue::Str(Cow::Borrowed(v)),
            Self::Null | Self::List(_) | Self::Map(_) => return None,
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::UInt(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::String(v) => fmt::Debug::fmt(v, f),
            Self::List(list) => f.debug_list().entries(list).finish(),
            Self::Map(map) => f.debug_map().entries(map).finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl From<ScalarValue<'_>> for Value {
    fn from(value: ScalarValue<'_>) -> Self {
        match value {
            ScalarValue::Bool(v) => Self::Bool(v),
            ScalarValue::Int(v) => Self::Int(v),
            ScalarValue::UInt(v) => Self::from(v),
            ScalarValue::Float(v) => Self::Float(v),
            ScalarValue::Str(v) => Self::String(v.into_owned()),
        }
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::UInt(value),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value.into())
            }
        }
    )*};
}

impl_from! {
    bool => Bool,
    i8 => Int, i16 => Int, i32 => Int, i64 => Int,
    u8 => Int, u16 => Int, u32 => Int,
    f32 => Float, f64 => Float,
    String => String, &str => String,
    Vec<Value> => List,
    BTreeMap<String, Value> => Map,
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::Value;
    use vc_reflect::Reflect;
    use vc_reflect::info::{ReflectKind, TypePath};

    #[test]
    fn unsigned_values_are_canonical() {
        assert_eq!(Value::from(7_u64), Value::Int(7));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_eq!(Value::from(7_u32), Value::from(7_i64));
    }

    #[test]
    fn json_shape() {
        let value: Value = [
            ("none", Value::Null),
            ("list", Value::List(vec![Value::from(1_i32), Value::from("a")])),
            ("float", Value::from(1.5_f64)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"float":1.5,"list":[1,"a"],"none":null}"#);
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), value);

        let big: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(big, Value::UInt(u64::MAX));
        let negative: Value = serde_json::from_str("-3").unwrap();
        assert_eq!(negative, Value::Int(-3));
    }

    #[test]
    fn ron_shape() {
        let value: Value = [("key", Value::from("value"))].into_iter().collect();
        let text = ron::to_string(&value).unwrap();
        assert_eq!(text, r#"{"key":"value"}"#);
        assert_eq!(ron::from_str::<Value>(&text).unwrap(), value);
    }

    #[test]
    fn accessors() {
        let value: Value = [("__type", "app::Foo"), ("name", "foo")].into_iter().collect();
        assert_eq!(value.type_tag("__type"), Some("app::Foo"));
        assert_eq!(value.get("name").and_then(Value::as_str), Some("foo"));
        assert!(value.get("missing").is_none());
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from("x").to_string(), "\"x\"");
    }

    #[test]
    fn reflected_as_opaque() {
        assert_eq!(Value::type_path(), "vc_serializer::Value");
        let value = Value::from(true);
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(value.reflect_partial_eq(&Value::Bool(true)), Some(true));
        assert_eq!(value.reflect_partial_eq(&true), Some(false));
    }
}
