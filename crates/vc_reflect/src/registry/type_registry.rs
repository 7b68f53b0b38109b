use alloc::string::String;
use core::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vc_utils::TypeIdMap;
use vc_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::{TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of [reflected] types.
///
/// This is the central store of type information. [Registering] a type
/// creates a [`TypeMeta`] entry from its [`GetTypeMeta`] implementation.
///
/// Entries can be looked up by [`TypeId`], by full type path or by short
/// type name, as long as the name is not ambiguous.
///
/// ```
/// use vc_reflect::registry::{TypeRegistry, TypeTraitDefault};
/// use vc_reflect::info::DynamicTypePath;
///
/// let registry = TypeRegistry::new();
///
/// let meta = registry.get_with_type_path("alloc::string::String").unwrap();
/// let s = meta.get_trait::<TypeTraitDefault>().unwrap().default();
///
/// assert_eq!(s.reflect_type_name(), "String");
/// ```
///
/// [reflected]: crate
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a type registry with the scalar types registered.
    ///
    /// - `bool` `char` `String`
    /// - `i8 - i64` `isize`
    /// - `u8 - u64` `usize`
    /// - `f32` `f64`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_scalars();
        registry
    }

    pub(crate) fn register_scalars(&mut self) {
        self.register::<bool>();
        self.register::<char>();
        self.register::<u8>();
        self.register::<u16>();
        self.register::<u32>();
        self.register::<u64>();
        self.register::<usize>();
        self.register::<i8>();
        self.register::<i16>();
        self.register::<i32>();
        self.register::<i64>();
        self.register::<isize>();
        self.register::<f32>();
        self.register::<f64>();
        self.register::<String>();
    }

    // The type must not exist yet.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());
    }

    // Returns `false` and does nothing if the id is already registered.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Inserts a [`TypeMeta`], overwriting the type traits of an existing entry.
    ///
    /// This does not register type dependencies.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        if !self.type_meta_table.contains(&type_meta.ty_id()) {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
        }
        self.type_meta_table.insert(type_meta.ty_id(), type_meta);
    }

    /// Registers the type `T` and its dependencies if it is not registered yet.
    ///
    /// Dependencies come from [`GetTypeMeta::register_dependencies`]; for a
    /// derived struct these are its field types.
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use vc_reflect::{derive::Reflect, registry::{TypeRegistry, TypeTraitDefault}};
    /// #[derive(Reflect, Default)]
    /// #[reflect(default)]
    /// struct Foo {
    ///     name: Option<String>,
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Foo>();
    ///
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// assert!(registry.contains(TypeId::of::<Option<String>>()));
    /// assert!(registry.contains(TypeId::of::<i32>()));
    /// assert!(registry.get_type_trait::<TypeTraitDefault>(TypeId::of::<Foo>()).is_some());
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Registers every type annotated with `#[reflect(auto_register)]`.
    ///
    /// Repeated calls are cheap and never insert duplicates.
    ///
    /// Returns `true` if static registration works on the current platform.
    /// Without the `auto_register` feature this does nothing and returns `false`.
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use vc_reflect::{derive::Reflect, registry::TypeRegistry};
    /// #[derive(Reflect, Default)]
    /// #[reflect(default, auto_register)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::register_types(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Adds the type trait `D` to the already registered type `T`.
    ///
    /// Returns `false` if `T` is not registered.
    ///
    /// ```
    /// use vc_reflect::registry::{TypeRegistry, TypeTraitDefault};
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(!registry.register_type_trait::<Vec<u8>, TypeTraitDefault>());
    ///
    /// registry.register::<Vec<u8>>();
    /// assert!(registry.register_type_trait::<Vec<u8>, TypeTraitDefault>());
    /// ```
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) -> bool {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => {
                type_meta.insert_trait(D::from_type());
                true
            }
            None => false,
        }
    }

    /// Whether the type with given [`TypeId`] has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with the given [`TypeId`] mutably.
    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with the given [type path].
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the [`TypeMeta`] of the type with the given [type name].
    ///
    /// Returns `None` if the name is ambiguous.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the given [type name] matches multiple registered types.
    ///
    /// ```
    /// # use vc_reflect::registry::TypeRegistry;
    /// mod foo {
    ///     #[derive(vc_reflect::derive::Reflect)]
    ///     pub struct Item;
    /// }
    /// mod bar {
    ///     #[derive(vc_reflect::derive::Reflect)]
    ///     pub struct Item;
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<foo::Item>();
    /// registry.register::<bar::Item>();
    ///
    /// assert!(registry.is_ambiguous("Item"));
    /// assert!(registry.get_with_type_name("Item").is_none());
    /// ```
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`TypeTrait`] of type `T` registered for the given [`TypeId`].
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    /// Returns the [`TypeInfo`] registered for the given [`TypeId`].
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// Returns an iterator over the registered [`TypeMeta`]s.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shared [`TypeRegistry`] behind a read-write lock.
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::registry::TypeRegistryArc;
///
/// let registry = TypeRegistryArc::default();
/// registry.write().register::<Vec<u8>>();
///
/// let other = registry.clone();
/// assert!(other.read().contains(TypeId::of::<Vec<u8>>()));
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    /// The wrapped [`TypeRegistry`].
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Wraps an existing registry.
    #[inline]
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// Takes a read lock on the underlying [`TypeRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`TypeRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().fmt(f)
    }
}
