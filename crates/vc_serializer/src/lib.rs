#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod cache;
mod config;
mod error;
mod locator;
mod registry;
mod serializer;
mod value;

pub mod strategy;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use builder::{ReflectiveBuilder, StrategyBuilder};
pub use cache::{MemoryCache, StrategyCache};
pub use config::SerializerConfig;
pub use error::{Result, SerialError};
pub use locator::StrategyLocator;
pub use registry::StrategyRegistry;
pub use serializer::{Serializer, SerializerBuilder};
pub use strategy::{ListStrategy, Strategy, StructStrategy, ValueStrategy};
pub use value::Value;

#[cfg(feature = "chrono")]
pub use strategy::{Temporal, TemporalStrategy};

#[cfg(all(test, feature = "chrono"))]
mod tests;
