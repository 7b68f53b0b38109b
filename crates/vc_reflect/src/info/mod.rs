//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: Stable type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, the unique identifier of the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, may be duplicated.
//!     - [`type_ident`](TypePath::type_ident): The name without generics and module path.
//!     - [`module_path`](TypePath::module_path): Optional module path.
//! - [`DynamicTypePath`]: Dynamic dispatch for `TypePath`.
//! - [`Type`]: A `TypeId` plus a [`TypePathTable`].
//! - [`TypeInfo`]: Static information of a reflected type, one of:
//!     - [`StructInfo`]: Named fields in declaration order.
//!     - [`ListInfo`]: Ordered collections and their element type.
//!     - [`MapInfo`]: `String`-keyed maps and their value type.
//!     - [`OptionInfo`]: `Option<T>`, its inner type and constructors.
//!     - [`ScalarInfo`]: Leaf values and their parser.
//!     - [`DynamicInfo`]: Slots holding any reflected value.
//!     - [`OpaqueInfo`]: Types with hidden internals.
//! - [`NamedField`]: Name and declared type of a struct field.
//! - [`ReflectKind`]: The kind of a reflected type.
//! - [`Typed`] and [`DynamicTyped`]: Static and dynamic access to `TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod option_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::{DynamicInfo, OpaqueInfo};
pub use option_info::OptionInfo;
pub use scalar_info::ScalarInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
