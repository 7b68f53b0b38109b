use alloc::boxed::Box;
use alloc::sync::Arc;

use tracing::{debug, trace};
use vc_reflect::info::TypeInfo;
use vc_reflect::registry::{TypeMeta, TypeRegistry};

use crate::{MemoryCache, ReflectiveBuilder, Result, SerialError, Strategy};
use crate::{StrategyBuilder, StrategyCache, StrategyRegistry};

/// The single source of "which strategy handles this type".
///
/// [`resolve`](Self::resolve) tries, in order:
///
/// 1. the cache,
/// 2. the [`StrategyRegistry`], caching the hit,
/// 3. the [`StrategyBuilder`], caching the result.
///
/// A strategy registered after the first resolution of its type is shadowed
/// by the cached entry, so register custom strategies before first use.
pub struct StrategyLocator {
    registry: StrategyRegistry,
    builder: Box<dyn StrategyBuilder>,
    cache: Box<dyn StrategyCache>,
}

impl StrategyLocator {
    /// Creates a locator with a [`ReflectiveBuilder`] and a [`MemoryCache`].
    #[inline]
    pub fn new(registry: StrategyRegistry) -> Self {
        Self::with_parts(registry, ReflectiveBuilder, MemoryCache::new())
    }

    /// Creates a locator from its parts.
    pub fn with_parts(
        registry: StrategyRegistry,
        builder: impl StrategyBuilder,
        cache: impl StrategyCache,
    ) -> Self {
        Self::from_boxed(registry, Box::new(builder), Box::new(cache))
    }

    pub(crate) fn from_boxed(
        registry: StrategyRegistry,
        builder: Box<dyn StrategyBuilder>,
        cache: Box<dyn StrategyCache>,
    ) -> Self {
        Self {
            registry,
            builder,
            cache,
        }
    }

    #[inline]
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Returns the strategy of `type_path`.
    ///
    /// Building a strategy needs the type to be registered in `types`.
    /// Fails with [`SerialError::Reflection`] if no strategy is registered
    /// and none can be built.
    pub fn resolve(&self, type_path: &str, types: &TypeRegistry) -> Result<Arc<dyn Strategy>> {
        self.resolve_with(type_path, types, || {
            types
                .get_with_type_path(type_path)
                .map(TypeMeta::type_info)
                .ok_or_else(|| SerialError::reflection(type_path, "the type is not registered"))
        })
    }

    /// Returns the strategy of the type described by `info`.
    ///
    /// Same as [`resolve`](Self::resolve), but the type does not have to be
    /// registered. Used when a value is at hand.
    pub fn resolve_info(
        &self,
        info: &'static TypeInfo,
        types: &TypeRegistry,
    ) -> Result<Arc<dyn Strategy>> {
        self.resolve_with(info.type_path(), types, || Ok(info))
    }

    fn resolve_with(
        &self,
        type_path: &str,
        types: &TypeRegistry,
        info: impl FnOnce() -> Result<&'static TypeInfo>,
    ) -> Result<Arc<dyn Strategy>> {
        if let Some(strategy) = self.cache.get(type_path) {
            trace!(type_path, "Strategy cache hit");
            return Ok(strategy);
        }

        if let Some(strategy) = self.registry.lookup(type_path) {
            debug!(type_path, "Strategy registry hit");
            return Ok(self.cache.put(type_path, strategy));
        }

        let strategy = self.builder.build(info()?, types)?;
        Ok(self.cache.put(type_path, strategy))
    }
}

impl core::fmt::Debug for StrategyLocator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StrategyLocator")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use vc_reflect::derive::Reflect;
    use vc_reflect::info::{TypeInfo, Typed};
    use vc_reflect::registry::TypeRegistry;

    use super::StrategyLocator;
    use crate::{MemoryCache, ReflectiveBuilder, Result, SerialError};
    use crate::{Strategy, StrategyBuilder, StrategyRegistry, ValueStrategy};

    #[derive(Reflect, Default)]
    #[reflect(type_path = "app::Subject", default)]
    struct Subject {
        foo: String,
    }

    struct CountingBuilder(Arc<AtomicUsize>);

    impl StrategyBuilder for CountingBuilder {
        fn build(&self, info: &'static TypeInfo, types: &TypeRegistry) -> Result<Arc<dyn Strategy>> {
            self.0.fetch_add(1, Ordering::Relaxed);
            ReflectiveBuilder.build(info, types)
        }
    }

    fn types() -> TypeRegistry {
        let mut types = TypeRegistry::new();
        types.register::<Subject>();
        types
    }

    #[test]
    fn resolution_is_idempotent() {
        let builds = Arc::new(AtomicUsize::new(0));
        let locator = StrategyLocator::with_parts(
            StrategyRegistry::new(),
            CountingBuilder(builds.clone()),
            MemoryCache::new(),
        );
        let types = types();

        let first = locator.resolve("app::Subject", &types).unwrap();
        let second = locator.resolve("app::Subject", &types).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builds.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn registry_wins_over_reflection() {
        let mut registry = StrategyRegistry::new();
        let custom: Arc<dyn Strategy> = Arc::new(ValueStrategy);
        registry.register("app::Subject", custom.clone());

        let locator = StrategyLocator::new(registry);
        let resolved = locator.resolve("app::Subject", &types()).unwrap();
        assert!(Arc::ptr_eq(&resolved, &custom));
    }

    #[test]
    fn unknown_types_fail() {
        let locator = StrategyLocator::new(StrategyRegistry::new());
        let err = locator.resolve("app::Missing", &types()).unwrap_err();
        assert!(matches!(err, SerialError::Reflection { ref type_path, .. } if type_path == "app::Missing"));
    }

    #[test]
    fn static_info_needs_no_registration() {
        let builds = Arc::new(AtomicUsize::new(0));
        let locator = StrategyLocator::with_parts(
            StrategyRegistry::new(),
            CountingBuilder(builds.clone()),
            MemoryCache::new(),
        );
        let empty = TypeRegistry::empty();

        assert!(locator.resolve("app::Subject", &empty).is_err());
        assert_eq!(builds.load(Ordering::Relaxed), 0);

        let first = locator.resolve_info(Subject::type_info(), &empty).unwrap();
        // Cached under its type path for later lookups by name.
        let second = locator.resolve("app::Subject", &empty).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builds.load(Ordering::Relaxed), 1);
    }
}
