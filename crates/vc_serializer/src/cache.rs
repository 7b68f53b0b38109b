use alloc::string::String;
use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use vc_utils::hash::HashMap;

use crate::Strategy;

/// Memoizes resolved strategies by type path.
///
/// Entries are never evicted. Implementations must be safe under concurrent use.
pub trait StrategyCache: Send + Sync + 'static {
    /// Returns the cached strategy of `type_path`.
    fn get(&self, type_path: &str) -> Option<Arc<dyn Strategy>>;

    /// Caches `strategy` for `type_path` and returns the cached entry.
    ///
    /// If an entry already exists it is kept and returned instead.
    fn put(&self, type_path: &str, strategy: Arc<dyn Strategy>) -> Arc<dyn Strategy>;
}

/// An in-memory [`StrategyCache`].
///
/// ```
/// use std::sync::Arc;
/// use vc_serializer::{MemoryCache, Strategy, StrategyCache, ValueStrategy};
///
/// let cache = MemoryCache::new();
/// let first: Arc<dyn Strategy> = Arc::new(ValueStrategy);
///
/// let stored = cache.put("app::Foo", first.clone());
/// assert!(Arc::ptr_eq(&stored, &first));
///
/// // The first writer wins.
/// let stored = cache.put("app::Foo", Arc::new(ValueStrategy));
/// assert!(Arc::ptr_eq(&stored, &first));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Arc<dyn Strategy>>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached strategies.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StrategyCache for MemoryCache {
    fn get(&self, type_path: &str) -> Option<Arc<dyn Strategy>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_path)
            .cloned()
    }

    fn put(&self, type_path: &str, strategy: Arc<dyn Strategy>) -> Arc<dyn Strategy> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(String::from(type_path))
            .or_insert(strategy)
            .clone()
    }
}

impl core::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use std::thread;

    use super::{MemoryCache, StrategyCache};
    use crate::{Strategy, ValueStrategy};

    #[test]
    fn concurrent_puts_keep_one_entry() {
        let cache = MemoryCache::new();

        let stored: Vec<Arc<dyn Strategy>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cache.put("app::Foo", Arc::new(ValueStrategy))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.len(), 1);
        let kept = cache.get("app::Foo").unwrap();
        assert!(stored.iter().all(|s| Arc::ptr_eq(s, &kept)));
        assert!(cache.get("app::Bar").is_none());
    }
}
