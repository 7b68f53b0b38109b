//! Errors of the serializer.

use alloc::string::{String, ToString};

use thiserror::Error;

/// The result type of this crate.
pub type Result<T, E = SerialError> = core::result::Result<T, E>;

/// Errors raised while serializing or deserializing.
///
/// Errors surface immediately, no partial result is returned.
/// Missing or null members are never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerialError {
    /// The top-level input has the wrong shape, e.g. a scalar passed to
    /// `serialize` or an unknown type path passed to `deserialize`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The type cannot be introspected, or it is abstract and no type tag is present.
    #[error("Cannot reflect `{type_path}`: {reason}")]
    Reflection { type_path: String, reason: String },

    /// A built-in strategy cannot parse its literal.
    #[error("Cannot parse {input:?} as `{type_path}`: {message}")]
    Format {
        type_path: String,
        input: String,
        message: String,
    },

    /// The data does not fit the declared type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    Mismatch { expected: String, found: String },
}

impl SerialError {
    pub(crate) fn reflection(type_path: &str, reason: impl ToString) -> Self {
        Self::Reflection {
            type_path: type_path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn mismatch(expected: impl ToString, found: impl ToString) -> Self {
        Self::Mismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
