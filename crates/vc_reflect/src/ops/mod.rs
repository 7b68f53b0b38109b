//! Access traits for the kinds of reflected values.
//!
//! ## Menu
//!
//! - [`Struct`]: Named fields (e.g. `A { .. }`).
//! - [`List`]: Ordered collections (e.g. `Vec<i32>`).
//! - [`Map`]: `String`-keyed maps (e.g. `BTreeMap<String, i32>`).
//! - [`Optional`]: Values that may be absent (`Option<T>`).
//! - [`Scalar`] and [`FromScalar`]: Leaf values, viewed as [`ScalarValue`].
//! - [`ReflectRef`] and [`ReflectMut`]: A reflected value viewed by its kind.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod option_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use option_ops::Optional;
pub use scalar_ops::{FromScalar, Scalar, ScalarValue};
pub use struct_ops::{Struct, StructFieldIter};
