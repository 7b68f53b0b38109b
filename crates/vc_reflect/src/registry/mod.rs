//! Type registry for querying type information at runtime.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: A capability supported by a type, stored type-erased.
//! - [`FromType`]: Creates a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: A [`TypeInfo`] plus a table of `TypeTrait`s.
//! - [`GetTypeMeta`]: Creates the `TypeMeta` of a type, implemented by the derive macro.
//! - [`TypeRegistry`]: Stores `TypeMeta`s, indexed by id, type path and type name.
//! - [`TypeRegistryArc`]: A shared, lockable `TypeRegistry`.
//! - [`TypeTraitDefault`]: Constructs the default value of a registered type.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! Static registration is collected with the [`inventory`] crate.
//! On platforms it does not support, `auto_register` returns `false`
//! and the types must be registered by hand.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod default;
mod from_type;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use default::TypeTraitDefault;
pub use from_type::FromType;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;
