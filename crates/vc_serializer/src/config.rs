use alloc::string::String;

use serde::{Deserialize, Serialize};

/// Settings of a [`Serializer`](crate::Serializer).
///
/// Missing entries fall back to their defaults, so a partial document is enough:
///
/// ```
/// use vc_serializer::SerializerConfig;
///
/// let config: SerializerConfig = serde_json::from_str(r#"{ "type_key": "@type" }"#).unwrap();
///
/// assert_eq!(config.type_key, "@type");
/// assert_eq!(config.items_key, "items");
/// assert_eq!(config.datetime_format, "%Y-%m-%d %H:%M:%S");
/// assert!(!config.skip_null_members);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SerializerConfig {
    /// The reserved key holding the type path of an object. Default `"__type"`.
    pub type_key: String,
    /// The key holding the elements of a collection. Default `"items"`.
    pub items_key: String,
    /// The `strftime` format of date-time literals. Default `"%Y-%m-%d %H:%M:%S"`.
    pub datetime_format: String,
    /// Omit null members instead of writing them as `null`. Default `false`.
    pub skip_null_members: bool,
}

impl SerializerConfig {
    pub const DEFAULT_TYPE_KEY: &'static str = "__type";
    pub const DEFAULT_ITEMS_KEY: &'static str = "items";
    pub const DEFAULT_DATETIME_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            type_key: Self::DEFAULT_TYPE_KEY.into(),
            items_key: Self::DEFAULT_ITEMS_KEY.into(),
            datetime_format: Self::DEFAULT_DATETIME_FORMAT.into(),
            skip_null_members: false,
        }
    }
}
