//! Reflection for common types, and utilities for implementing it.
//!
//! - [`concat`]: String concatenation for `TypePath` implementations.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]:
//!   static storage for hand-written `Typed` and `TypePath`.
//! - `xxx_partial_eq` and `xxx_debug`: default behavior of
//!   [`Reflect::reflect_partial_eq`] and [`Reflect::reflect_debug`] by kind.
//! - [`ReflectBox`]: a slot holding any reflected value.
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `char`, `String`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//! - `Option<T>`
//! - `Vec<T>`
//! - `BTreeMap<String, T>`
//! - chrono ("chrono" feature): `NaiveDateTime`, `DateTime<Utc>`
//!
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod btree_map;
mod cell;
mod option;
mod primitives;
mod vec;

#[cfg(feature = "chrono")]
mod chrono;

// -----------------------------------------------------------------------------
// Exports

pub use boxed::ReflectBox;
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

use core::fmt;

use crate::Reflect;
use crate::ops::{List, Map, Optional, ReflectRef, Struct};

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// ```
/// use vc_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

/// Compares two values field by field.
///
/// Returns `None` if any field pair cannot be compared.
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };
    if x.ty_id() != y.ty_id() || x.field_len() != y.field_len() {
        return Some(false);
    }
    for (name, value) in x.fields() {
        let Some(other) = y.field(name) else {
            return Some(false);
        };
        if !value.reflect_partial_eq(other)? {
            return Some(false);
        }
    }
    Some(true)
}

/// Prints a struct as `Name { field: value, .. }`.
pub fn struct_debug(x: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(x.reflect_type_name());
    for (name, value) in x.fields() {
        debug.field(name, &value);
    }
    debug.finish()
}

/// Compares two lists element by element.
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::List(y) = y.reflect_ref() else {
        return Some(false);
    };
    if x.len() != y.len() {
        return Some(false);
    }
    for (a, b) in x.iter().zip(y.iter()) {
        if !a.reflect_partial_eq(b)? {
            return Some(false);
        }
    }
    Some(true)
}

/// Prints a list as `[a, b, ..]`.
pub fn list_debug(x: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(x.iter()).finish()
}

/// Compares two maps entry by entry.
pub fn map_partial_eq(x: &dyn Map, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Map(y) = y.reflect_ref() else {
        return Some(false);
    };
    if x.len() != y.len() {
        return Some(false);
    }
    for (key, value) in x.iter() {
        let Some(other) = y.get(key) else {
            return Some(false);
        };
        if !value.reflect_partial_eq(other)? {
            return Some(false);
        }
    }
    Some(true)
}

/// Prints a map as `{"key": value, ..}`.
pub fn map_debug(x: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(x.iter()).finish()
}

/// Compares two optional values.
pub fn optional_partial_eq(x: &dyn Optional, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Optional(y) = y.reflect_ref() else {
        return Some(false);
    };
    match (x.value(), y.value()) {
        (Some(a), Some(b)) => a.reflect_partial_eq(b),
        (None, None) => Some(true),
        _ => Some(false),
    }
}

/// Prints an optional value as `Some(value)` or `None`.
pub fn optional_debug(x: &dyn Optional, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match x.value() {
        Some(value) => f.debug_tuple("Some").field(&value).finish(),
        None => f.write_str("None"),
    }
}
