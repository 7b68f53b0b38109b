use alloc::string::String;
use alloc::sync::Arc;

use tracing::{debug, warn};
use vc_reflect::info::TypePath;
use vc_utils::hash::HashMap;

use crate::Strategy;

/// Strategies registered for exact type paths.
///
/// There is no inheritance-style matching, a strategy applies to exactly one type.
/// Registration is meant to happen before the first use of a [`Serializer`](crate::Serializer).
///
/// ```
/// use vc_serializer::{StrategyRegistry, ValueStrategy, Value};
///
/// let mut registry = StrategyRegistry::new();
/// registry.register_type::<Value>(ValueStrategy);
///
/// assert!(registry.lookup("vc_serializer::Value").is_some());
/// assert!(registry.lookup("app::Missing").is_none());
/// ```
#[derive(Default, Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `strategy` for `type_path`, returning the strategy it replaces.
    pub fn register(
        &mut self,
        type_path: impl Into<String>,
        strategy: Arc<dyn Strategy>,
    ) -> Option<Arc<dyn Strategy>> {
        let type_path = type_path.into();
        debug!(type_path = %type_path, ?strategy, "Registering strategy");

        let previous = self.strategies.insert(type_path, strategy);
        if let Some(previous) = &previous {
            warn!(?previous, "Strategy registration overwrites an existing one");
        }
        previous
    }

    /// Registers `strategy` for `T`.
    #[inline]
    pub fn register_type<T: TypePath>(
        &mut self,
        strategy: impl Strategy,
    ) -> Option<Arc<dyn Strategy>> {
        self.register(T::type_path(), Arc::new(strategy))
    }

    /// Returns the strategy registered for `type_path`.
    #[inline]
    pub fn lookup(&self, type_path: &str) -> Option<Arc<dyn Strategy>> {
        self.strategies.get(type_path).cloned()
    }

    /// Returns `true` if a strategy is registered for `type_path`.
    #[inline]
    pub fn contains(&self, type_path: &str) -> bool {
        self.strategies.contains_key(type_path)
    }

    /// Returns the registered type paths, in no particular order.
    #[inline]
    pub fn type_paths(&self) -> impl ExactSizeIterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl core::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.strategies.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::StrategyRegistry;
    use crate::{Strategy, ValueStrategy};

    #[test]
    fn later_registration_overwrites() {
        let mut registry = StrategyRegistry::new();
        let first: Arc<dyn Strategy> = Arc::new(ValueStrategy);
        let second: Arc<dyn Strategy> = Arc::new(ValueStrategy);

        assert!(registry.register("app::Foo", first.clone()).is_none());
        let replaced = registry.register("app::Foo", second.clone()).unwrap();

        assert!(Arc::ptr_eq(&replaced, &first));
        assert!(Arc::ptr_eq(&registry.lookup("app::Foo").unwrap(), &second));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.type_paths().collect::<Vec<_>>(), ["app::Foo"]);
    }
}
