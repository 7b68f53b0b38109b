use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use tracing::debug;
use vc_reflect::info::{ReflectKind, Type, TypeInfo, TypePath};
use vc_reflect::ops::{ReflectMut, ReflectRef};
use vc_reflect::registry::{GetTypeMeta, TypeRegistry, TypeRegistryArc, TypeTraitDefault};
use vc_reflect::{Reflect, ReflectBox};

use crate::{MemoryCache, ReflectiveBuilder, Result, SerialError, SerializerConfig};
use crate::{Strategy, StrategyBuilder, StrategyCache, StrategyLocator, StrategyRegistry};
use crate::{Value, ValueStrategy};

// -----------------------------------------------------------------------------
// Serializer

/// Converts reflected values to [`Value`]s and back.
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_serializer::{Serializer, Value};
///
/// #[derive(Reflect, Default, PartialEq, Debug)]
/// #[reflect(type_path = "app::Subject", default, partial_eq)]
/// struct Subject {
///     foo: String,
///     bar: String,
/// }
///
/// let serializer = Serializer::builder().register_type::<Subject>().build();
/// let subject = Subject { foo: "foo".into(), bar: "bar".into() };
///
/// let value = serializer.serialize(&subject).unwrap();
/// let expected: Value = [("foo", "foo"), ("bar", "bar"), ("__type", "app::Subject")]
///     .into_iter()
///     .collect();
/// assert_eq!(value, expected);
///
/// let back = serializer.deserialize_as::<Subject>(&value).unwrap();
/// assert_eq!(back, subject);
/// ```
pub struct Serializer {
    types: TypeRegistryArc,
    locator: StrategyLocator,
    config: SerializerConfig,
}

impl Default for Serializer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    /// Creates a serializer with the built-in strategies and all auto-registered types.
    #[inline]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a serializer.
    #[inline]
    pub fn builder() -> SerializerBuilder {
        SerializerBuilder::new()
    }

    #[inline]
    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Returns the registry of reflected types.
    ///
    /// Types added after the first use of the serializer are visible to it,
    /// unlike strategies, see [`StrategyLocator`].
    #[inline]
    pub fn type_registry(&self) -> &TypeRegistryArc {
        &self.types
    }

    #[inline]
    pub fn locator(&self) -> &StrategyLocator {
        &self.locator
    }

    /// Resolves the strategy of `type_path`.
    pub fn resolve(&self, type_path: &str) -> Result<Arc<dyn Strategy>> {
        let types = self.types.read();
        self.locator.resolve(type_path, &types)
    }

    /// Resolves the strategy of the runtime type of `value`.
    ///
    /// Unlike [`resolve`](Self::resolve), this does not need the type to be
    /// registered, its static type information is used instead.
    pub fn resolve_value(&self, value: &dyn Reflect) -> Result<Arc<dyn Strategy>> {
        let types = self.types.read();
        self.locator.resolve_info(value.reflect_type_info(), &types)
    }

    /// Serializes an object.
    ///
    /// The runtime type of `value` selects the strategy, a [`ReflectBox`] is
    /// unwrapped first. The type does not have to be registered.
    ///
    /// Fails with [`SerialError::InvalidArgument`] for scalars, optional
    /// values and maps, which are not objects. A raw [`Value`] is accepted
    /// only if it is a [`Value::Map`].
    pub fn serialize(&self, value: &dyn Reflect) -> Result<Value> {
        let value = match value.reflect_ref() {
            ReflectRef::Dynamic(slot) => slot.get(),
            _ => value,
        };

        if let Some(raw) = value.downcast_ref::<Value>()
            && !matches!(raw, Value::Map(_))
        {
            return Err(SerialError::InvalidArgument(format!(
                "expected an object, found a raw {} value",
                raw.kind_name(),
            )));
        }

        match value.reflect_kind() {
            ReflectKind::Struct | ReflectKind::List | ReflectKind::Opaque => {
                self.resolve_value(value)?.to_value(value, self)
            }
            kind => Err(SerialError::InvalidArgument(format!(
                "expected an object, found a {kind} value of `{}`",
                value.reflect_type_path(),
            ))),
        }
    }

    /// Deserializes an object of the type named by `type_path`.
    ///
    /// Fails with [`SerialError::InvalidArgument`] if `type_path` names
    /// neither a registered strategy nor a registered type.
    pub fn deserialize(&self, type_path: &str, data: &Value) -> Result<Box<dyn Reflect>> {
        let known = self.locator.registry().contains(type_path)
            || self.types.read().get_with_type_path(type_path).is_some();
        if !known {
            return Err(SerialError::InvalidArgument(format!(
                "`{type_path}` is not a known type"
            )));
        }

        self.resolve(type_path)?.from_value(data, self)
    }

    /// Deserializes an object of type `T`.
    pub fn deserialize_as<T: Reflect + TypePath>(&self, data: &Value) -> Result<T> {
        self.deserialize(T::type_path(), data)?
            .take::<T>()
            .map_err(|value| SerialError::mismatch(T::type_path(), value.reflect_type_path()))
    }

    /// Serializes a nested member.
    ///
    /// Unlike [`serialize`](Self::serialize), any value is accepted:
    ///
    /// - scalars are written directly,
    /// - `None` becomes [`Value::Null`] and `Some` is transparent,
    /// - string-keyed maps become untagged maps,
    /// - objects and collections go through their strategy.
    pub fn serialize_member(&self, value: &dyn Reflect) -> Result<Value> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => Ok(Value::from(scalar.as_scalar())),
            ReflectRef::Optional(optional) => match optional.value() {
                Some(inner) => self.serialize_member(inner),
                None => Ok(Value::Null),
            },
            ReflectRef::Map(map) => map
                .iter()
                .map(|(key, item)| Ok((key.to_string(), self.serialize_member(item)?)))
                .collect::<Result<BTreeMap<String, Value>>>()
                .map(Value::Map),
            ReflectRef::Dynamic(slot) => self.serialize_member(slot.get()),
            ReflectRef::Struct(_) | ReflectRef::List(_) | ReflectRef::Opaque(_) => {
                self.resolve_value(value)?.to_value(value, self)
            }
        }
    }

    /// Deserializes a nested member of the `declared` type.
    ///
    /// For objects, collections and [`ReflectBox`] slots, a type tag in `data`
    /// takes precedence over the declared type. A slot without a tag fails
    /// with [`SerialError::Reflection`], as nothing tells its concrete type.
    pub fn deserialize_member(
        &self,
        declared: &'static TypeInfo,
        data: &Value,
    ) -> Result<Box<dyn Reflect>> {
        let kind = declared.kind();
        if matches!(kind, ReflectKind::Struct | ReflectKind::List | ReflectKind::Dynamic)
            && let Some(tag) = data.type_tag(&self.config.type_key)
        {
            let value = self.resolve(tag)?.from_value(data, self)?;
            return Ok(match kind {
                ReflectKind::Dynamic => Box::new(ReflectBox::from_boxed(value)),
                _ => value,
            });
        }

        match declared {
            TypeInfo::Scalar(info) => data
                .as_scalar()
                .and_then(|scalar| info.parse(scalar))
                .ok_or_else(|| SerialError::mismatch(info.type_path(), data)),
            TypeInfo::Optional(info) => {
                if data.is_null() {
                    return Ok(info.new_none());
                }
                let inner = self.deserialize_member(info.some_info(), data)?;
                info.new_some(inner).map_err(|rejected| {
                    SerialError::mismatch(info.some_ty().path(), rejected.reflect_type_path())
                })
            }
            TypeInfo::Map(info) => {
                let empty = BTreeMap::new();
                let entries = match data {
                    Value::Map(entries) => entries,
                    Value::Null => &empty,
                    other => return Err(SerialError::mismatch(info.type_path(), other.kind_name())),
                };

                let mut value = self.construct(declared.ty())?;
                let ReflectMut::Map(map) = value.reflect_mut() else {
                    return Err(SerialError::reflection(
                        info.type_path(),
                        "the default constructor does not produce a map",
                    ));
                };

                let value_info = info.value_info();
                for (key, item) in entries {
                    let item = self.deserialize_member(value_info, item)?;
                    map.insert_reflect(key.clone(), item).map_err(|rejected| {
                        SerialError::mismatch(value_info.type_path(), rejected.reflect_type_path())
                    })?;
                }
                Ok(value)
            }
            TypeInfo::Dynamic(info) => Err(SerialError::reflection(
                info.type_path(),
                format!("the `{}` entry is required to pick a concrete type", self.config.type_key),
            )),
            TypeInfo::Struct(_) | TypeInfo::List(_) | TypeInfo::Opaque(_) => {
                self.resolve(declared.type_path())?.from_value(data, self)
            }
        }
    }

    /// Creates the default value of `ty`.
    ///
    /// Fails with [`SerialError::Reflection`] unless `ty` is registered with
    /// a default constructor (`#[reflect(default)]`).
    pub fn construct(&self, ty: &Type) -> Result<Box<dyn Reflect>> {
        let types = self.types.read();
        let default = types
            .get_type_trait::<TypeTraitDefault>(ty.id())
            .ok_or_else(|| SerialError::reflection(ty.path(), "no registered default constructor"))?;
        Ok(default.default())
    }
}

impl core::fmt::Debug for Serializer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Serializer")
            .field("locator", &self.locator)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// SerializerBuilder

/// Configures a [`Serializer`].
///
/// Built-in strategies are registered up front, so custom strategies for
/// the same types replace them.
///
/// ```
/// use vc_serializer::{MemoryCache, Serializer, SerializerConfig, ValueStrategy};
///
/// let serializer = Serializer::builder()
///     .config(SerializerConfig { type_key: "@type".into(), ..Default::default() })
///     .cache(MemoryCache::new())
///     .strategy_for("app::Raw", std::sync::Arc::new(ValueStrategy))
///     .build();
///
/// assert_eq!(serializer.config().type_key, "@type");
/// assert!(serializer.locator().registry().contains("app::Raw"));
/// ```
pub struct SerializerBuilder {
    types: Option<TypeRegistryArc>,
    pending_types: Vec<fn(&mut TypeRegistry)>,
    registry: StrategyRegistry,
    builder: Box<dyn StrategyBuilder>,
    cache: Box<dyn StrategyCache>,
    config: SerializerConfig,
}

impl Default for SerializerBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SerializerBuilder {
    /// Creates a builder with the built-in strategies.
    pub fn new() -> Self {
        let mut registry = StrategyRegistry::new();
        registry.register_type::<Value>(ValueStrategy);

        #[cfg(feature = "chrono")]
        {
            use crate::TemporalStrategy;
            use chrono::{DateTime, NaiveDateTime, Utc};

            registry.register_type::<NaiveDateTime>(TemporalStrategy::<NaiveDateTime>::new());
            registry.register_type::<DateTime<Utc>>(TemporalStrategy::<DateTime<Utc>>::new());
        }

        Self {
            types: None,
            pending_types: Vec::new(),
            registry,
            builder: Box::new(ReflectiveBuilder),
            cache: Box::new(MemoryCache::new()),
            config: SerializerConfig::default(),
        }
    }

    /// Uses an existing type registry instead of a fresh one.
    ///
    /// A fresh registry holds the scalars and, with the `auto_register`
    /// feature, every `#[reflect(auto_register)]` type.
    pub fn type_registry(mut self, types: TypeRegistryArc) -> Self {
        self.types = Some(types);
        self
    }

    /// Registers `T` and its dependencies in the type registry.
    pub fn register_type<T: GetTypeMeta>(mut self) -> Self {
        self.pending_types.push(TypeRegistry::register::<T>);
        self
    }

    /// Registers a strategy for `T`.
    pub fn strategy<T: TypePath>(mut self, strategy: impl Strategy) -> Self {
        self.registry.register_type::<T>(strategy);
        self
    }

    /// Registers a strategy for a type path.
    pub fn strategy_for(mut self, type_path: impl Into<String>, strategy: Arc<dyn Strategy>) -> Self {
        self.registry.register(type_path, strategy);
        self
    }

    /// Replaces the [`ReflectiveBuilder`].
    pub fn reflective_builder(mut self, builder: impl StrategyBuilder) -> Self {
        self.builder = Box::new(builder);
        self
    }

    /// Replaces the [`MemoryCache`].
    pub fn cache(mut self, cache: impl StrategyCache) -> Self {
        self.cache = Box::new(cache);
        self
    }

    pub fn config(mut self, config: SerializerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Serializer {
        let types = self.types.unwrap_or_else(|| TypeRegistryArc::new(default_types()));

        {
            let mut registry = types.write();
            registry.register::<Value>();

            #[cfg(feature = "chrono")]
            {
                registry.register::<chrono::NaiveDateTime>();
                registry.register::<chrono::DateTime<chrono::Utc>>();
            }

            for register in self.pending_types {
                register(&mut registry);
            }
            debug!(types = registry.len(), strategies = self.registry.len(), "Serializer ready");
        }

        Serializer {
            types,
            locator: StrategyLocator::from_boxed(self.registry, self.builder, self.cache),
            config: self.config,
        }
    }
}

fn default_types() -> TypeRegistry {
    #[cfg_attr(not(feature = "auto_register"), expect(unused_mut, reason = "feature gated"))]
    let mut types = TypeRegistry::new();

    #[cfg(feature = "auto_register")]
    if !types.auto_register() {
        tracing::warn!("Automatic type registration is not supported on this platform");
    }

    types
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    use super::Serializer;
    use crate::{SerialError, Value};

    #[derive(Reflect, Default)]
    #[reflect(type_path = "app::Named", default)]
    struct Named {
        name: String,
    }

    #[test]
    fn serializer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Serializer>();
    }

    #[test]
    fn rejects_non_objects() {
        let serializer = Serializer::new();

        for value in [
            &42_u32 as &dyn vc_reflect::Reflect,
            &String::from("foo"),
            &Some(1_i8),
        ] {
            let err = serializer.serialize(value).unwrap_err();
            assert!(matches!(err, SerialError::InvalidArgument(_)), "{err}");
        }
    }

    #[test]
    fn raw_values_must_be_maps() {
        let serializer = Serializer::new();

        for raw in [Value::Int(3), Value::from("x"), Value::List(Vec::new()), Value::Null] {
            let err = serializer.serialize(&raw).unwrap_err();
            assert!(matches!(err, SerialError::InvalidArgument(_)), "{raw}");
        }

        let raw: Value = [("key", "value")].into_iter().collect();
        assert_eq!(serializer.serialize(&raw).unwrap(), raw);
    }

    #[test]
    fn rejects_unknown_type_paths() {
        let serializer = Serializer::new();
        let err = serializer
            .deserialize("sdfkjsdfkjshdfjhsdf", &Value::Null)
            .unwrap_err();
        assert!(matches!(err, SerialError::InvalidArgument(_)));
    }

    #[test]
    fn scalar_members_are_checked() {
        let serializer = Serializer::builder().register_type::<Named>().build();

        let err = serializer
            .deserialize_member(u8::type_info(), &Value::from(300_i32))
            .unwrap_err();
        assert_eq!(
            err,
            SerialError::Mismatch {
                expected: "u8".into(),
                found: "300".into(),
            }
        );

        let value: Value = [("name", Value::from(1_i32))].into_iter().collect();
        let err = serializer.deserialize("app::Named", &value).unwrap_err();
        assert!(matches!(err, SerialError::Mismatch { .. }));
    }

    #[test]
    fn types_registered_later_are_visible() {
        let serializer = Serializer::builder().build();
        assert!(serializer.deserialize("app::Named", &Value::Null).is_err());

        serializer.type_registry().write().register::<Named>();
        let named = serializer.deserialize("app::Named", &Value::Null).unwrap();
        assert!(named.is::<Named>());
    }
}
