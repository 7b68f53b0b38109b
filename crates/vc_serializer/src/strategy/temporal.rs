use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt::{Debug, Write};
use core::marker::PhantomData;

use chrono::{DateTime, NaiveDateTime, ParseResult, Utc};
use vc_reflect::Reflect;
use vc_reflect::info::TypePath;

use crate::{Result, SerialError, Serializer, Strategy, Value};

/// A point in time written as a string literal.
pub trait Temporal: Reflect + TypePath + Sized {
    /// Renders the value with a `strftime` format.
    fn write_formatted(&self, format: &str, out: &mut String) -> core::fmt::Result;

    /// Parses a literal written with the same format.
    fn parse_formatted(input: &str, format: &str) -> ParseResult<Self>;
}

impl Temporal for NaiveDateTime {
    #[inline]
    fn write_formatted(&self, format: &str, out: &mut String) -> core::fmt::Result {
        write!(out, "{}", self.format(format))
    }

    #[inline]
    fn parse_formatted(input: &str, format: &str) -> ParseResult<Self> {
        NaiveDateTime::parse_from_str(input, format)
    }
}

impl Temporal for DateTime<Utc> {
    #[inline]
    fn write_formatted(&self, format: &str, out: &mut String) -> core::fmt::Result {
        write!(out, "{}", self.format(format))
    }

    // The literal carries no offset, it is read as UTC.
    #[inline]
    fn parse_formatted(input: &str, format: &str) -> ParseResult<Self> {
        NaiveDateTime::parse_from_str(input, format).map(|naive| naive.and_utc())
    }
}

/// Writes a [`Temporal`] value as an untagged literal in
/// [`SerializerConfig::datetime_format`](crate::SerializerConfig::datetime_format).
///
/// ```
/// use chrono::NaiveDate;
/// use vc_serializer::{Serializer, Value};
///
/// let serializer = Serializer::new();
/// let date = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
///
/// assert_eq!(serializer.serialize(&date).unwrap(), Value::from("2015-01-01 12:00:00"));
/// ```
pub struct TemporalStrategy<T>(PhantomData<fn() -> T>);

impl<T> TemporalStrategy<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TemporalStrategy<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Temporal> Debug for TemporalStrategy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "TemporalStrategy<{}>", T::type_path())
    }
}

impl<T: Temporal> Strategy for TemporalStrategy<T> {
    fn to_value(&self, value: &dyn Reflect, serializer: &Serializer) -> Result<Value> {
        let Some(value) = value.downcast_ref::<T>() else {
            return Err(SerialError::mismatch(T::type_path(), value.reflect_type_path()));
        };

        let format = &serializer.config().datetime_format;
        let mut out = String::new();
        value
            .write_formatted(format, &mut out)
            .map_err(|_| SerialError::Format {
                type_path: T::type_path().to_string(),
                input: format.clone(),
                message: "invalid date-time format".to_string(),
            })?;

        Ok(Value::String(out))
    }

    fn from_value(&self, data: &Value, serializer: &Serializer) -> Result<Box<dyn Reflect>> {
        let Value::String(input) = data else {
            return Err(SerialError::mismatch("a date-time literal", data.kind_name()));
        };

        match T::parse_formatted(input, &serializer.config().datetime_format) {
            Ok(value) => Ok(Box::new(value)),
            Err(err) => Err(SerialError::Format {
                type_path: T::type_path().to_string(),
                input: input.clone(),
                message: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use vc_reflect::Reflect;

    use crate::{SerialError, Serializer, SerializerConfig, Value};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2011, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn both_variants_use_the_same_literal() {
        let serializer = Serializer::new();
        let naive = noon();
        let utc: DateTime<Utc> = naive.and_utc();

        assert_eq!(serializer.serialize(&naive).unwrap(), Value::from("2011-01-01 12:00:00"));
        assert_eq!(serializer.serialize(&utc).unwrap(), Value::from("2011-01-01 12:00:00"));

        let back = serializer
            .deserialize("chrono::DateTime<chrono::Utc>", &Value::from("2011-01-01 12:00:00"))
            .unwrap();
        assert_eq!(back.take::<DateTime<Utc>>().unwrap(), utc);
    }

    #[test]
    fn parse_failures() {
        let serializer = Serializer::new();

        let err = serializer
            .deserialize("chrono::NaiveDateTime", &Value::from("yesterday"))
            .unwrap_err();
        assert!(matches!(err, SerialError::Format { ref input, .. } if input == "yesterday"));

        let err = serializer
            .deserialize("chrono::NaiveDateTime", &Value::from(12_i32))
            .unwrap_err();
        assert!(matches!(err, SerialError::Mismatch { .. }));
    }

    #[test]
    fn configured_format() {
        let serializer = Serializer::builder()
            .config(SerializerConfig {
                datetime_format: "%d/%m/%Y %H:%M".into(),
                ..SerializerConfig::default()
            })
            .build();

        let value = serializer.serialize(&noon()).unwrap();
        assert_eq!(value, Value::from("01/01/2011 12:00"));

        let back = serializer.deserialize_as::<NaiveDateTime>(&value).unwrap();
        assert_eq!(back, noon());
        assert!(back.reflect_partial_eq(&noon()).unwrap());
    }
}
