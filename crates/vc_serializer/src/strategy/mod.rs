//! Strategies convert values of one type to [`Value`]s and back.
//!
//! - [`Strategy`]: the conversion contract.
//! - [`StructStrategy`] and [`ListStrategy`]: built by reflection, see
//!   [`ReflectiveBuilder`](crate::ReflectiveBuilder).
//! - [`TemporalStrategy`]: date-time literals (`chrono` feature).
//! - [`ValueStrategy`]: raw [`Value`] members, passed through untouched.

// -----------------------------------------------------------------------------
// Modules

mod list;
mod structure;
mod value;

#[cfg(feature = "chrono")]
mod temporal;

// -----------------------------------------------------------------------------
// Exports

pub use list::ListStrategy;
pub use structure::StructStrategy;
pub use value::ValueStrategy;

#[cfg(feature = "chrono")]
pub use temporal::{Temporal, TemporalStrategy};

use alloc::boxed::Box;
use core::fmt::Debug;

use vc_reflect::Reflect;

use crate::{Result, Serializer, Value};

/// The unit of conversion for one type.
///
/// A strategy is immutable once built and shared as `Arc<dyn Strategy>`.
/// Nested members are handed back to the [`Serializer`], see
/// [`Serializer::serialize_member`] and [`Serializer::deserialize_member`].
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_serializer::{Result, SerialError, Serializer, Strategy, Value};
///
/// /// Writes a `u32` as a plain number.
/// #[derive(Debug)]
/// struct Counter;
///
/// impl Strategy for Counter {
///     fn to_value(&self, value: &dyn Reflect, _: &Serializer) -> Result<Value> {
///         match value.downcast_ref::<u32>() {
///             Some(v) => Ok(Value::from(*v)),
///             None => Err(SerialError::Mismatch {
///                 expected: "u32".into(),
///                 found: value.reflect_type_path().into(),
///             }),
///         }
///     }
///
///     fn from_value(&self, data: &Value, _: &Serializer) -> Result<Box<dyn Reflect>> {
///         match data {
///             Value::Int(v) => Ok(Box::new(*v as u32)),
///             other => Err(SerialError::Mismatch {
///                 expected: "integer".into(),
///                 found: other.kind_name().into(),
///             }),
///         }
///     }
/// }
/// ```
pub trait Strategy: Debug + Send + Sync + 'static {
    /// Converts `value` into its serialized form.
    fn to_value(&self, value: &dyn Reflect, serializer: &Serializer) -> Result<Value>;

    /// Rebuilds a value from its serialized form.
    fn from_value(&self, data: &Value, serializer: &Serializer) -> Result<Box<dyn Reflect>>;
}
