use alloc::sync::Arc;

use tracing::debug;
use vc_reflect::info::TypeInfo;
use vc_reflect::registry::TypeRegistry;

use crate::{ListStrategy, Result, SerialError, Strategy, StructStrategy};

/// Builds strategies for types without a registered one.
pub trait StrategyBuilder: Send + Sync + 'static {
    /// Builds the strategy of the type described by `info`.
    ///
    /// `types` is the serializer's type registry, for builders that need
    /// more than the static type information.
    fn build(&self, info: &'static TypeInfo, types: &TypeRegistry) -> Result<Arc<dyn Strategy>>;
}

/// Builds [`StructStrategy`] and [`ListStrategy`] from reflected type information.
///
/// Any struct or ordered collection qualifies. Writing needs nothing else,
/// reading also needs the type registered with a default constructor
/// (`#[reflect(default)]`).
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed, registry::TypeRegistry};
/// use vc_serializer::{ReflectiveBuilder, SerialError, StrategyBuilder};
///
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "app::Subject", default)]
/// struct Subject {
///     foo: String,
/// }
///
/// let types = TypeRegistry::new();
/// assert!(ReflectiveBuilder.build(Subject::type_info(), &types).is_ok());
///
/// // Scalars are not composite.
/// let err = ReflectiveBuilder.build(String::type_info(), &types).unwrap_err();
/// assert!(matches!(err, SerialError::Reflection { .. }));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ReflectiveBuilder;

impl StrategyBuilder for ReflectiveBuilder {
    fn build(&self, info: &'static TypeInfo, _types: &TypeRegistry) -> Result<Arc<dyn Strategy>> {
        let strategy: Arc<dyn Strategy> = match info {
            TypeInfo::Struct(info) => Arc::new(StructStrategy::new(info)),
            TypeInfo::List(info) => Arc::new(ListStrategy::new(info)),
            other => {
                return Err(SerialError::reflection(
                    other.type_path(),
                    alloc::format!("a {} is not a struct or a collection", other.kind()),
                ));
            }
        };

        debug!(type_path = info.type_path(), "Built reflective strategy");
        Ok(strategy)
    }
}
