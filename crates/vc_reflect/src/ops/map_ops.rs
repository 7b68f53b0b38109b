use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;

/// Access to a map with `String` keys, such as `BTreeMap<String, T>`.
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::ops::Map;
///
/// let mut map: BTreeMap<String, i64> = BTreeMap::new();
/// map.insert_reflect("a".into(), Box::new(1_i64)).unwrap();
///
/// assert_eq!(Map::len(&map), 1);
/// assert!(Map::get(&map, "a").unwrap().is::<i64>());
/// ```
pub trait Map: Reflect {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Inserts a value, replacing any previous one.
    ///
    /// Returns the value back if it is not of the value type.
    fn insert_reflect(
        &mut self,
        key: String,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>>;

    /// Removes all entries.
    fn clear(&mut self);

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over `(key, value)` pairs.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;
}

impl fmt::Debug for dyn Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::map_debug(self, f)
    }
}
