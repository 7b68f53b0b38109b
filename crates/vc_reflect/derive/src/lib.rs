//! See following macros:
//!
//! - [`Reflect`]
//! - [`TypePath`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `GetTypeMeta`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
/// - `List` (for `#[reflect(list)] struct T(Vec<Item>);`)
///
/// Unit structs are structs without fields. Tuple structs and enums
/// must choose `list` or `opaque`.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::model::Foo")]
/// struct Foo { /* ... */ }
/// ```
///
/// The path does not include generics, they are appended automatically.
/// The last segment must be the type name.
///
/// ### Shapes
///
/// - `#[reflect(opaque)]`: internals are hidden, a dedicated strategy is required to serialize it.
/// - `#[reflect(list)]`: a newtype whose only field is a list, exposed as a list itself.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(list)]
/// struct Items(Vec<Item>);
/// ```
///
/// ### Available Traits
///
/// - `default`: registers `TypeTraitDefault`, required to construct the type while decoding.
/// - `partial_eq`: `reflect_partial_eq` uses `PartialEq`.
/// - `debug`: `reflect_debug` uses `Debug`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, PartialEq, Debug)]
/// #[reflect(default, partial_eq, debug)]
/// struct Foo { /* ... */ }
/// ```
///
/// ### Auto Register
///
/// `#[reflect(auto_register)]` submits the type to `TypeRegistry::auto_register`.
/// Not available for generic types.
///
/// ## Field Attributes
///
/// `#[reflect(skip)]` hides a field. Skipped fields are neither encoded nor decoded,
/// they keep their default value.
///
/// ## Generics
///
/// Type parameters are bounded by `Reflect + GetTypeMeta`.
/// Lifetime and const parameters are not supported.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// # Derive TypePath Trait
///
/// Only `#[reflect(type_path = "...")]` is used, other attributes are ignored.
///
/// ```rust, ignore
/// #[derive(TypePath)]
/// struct A;
///
/// #[derive(TypePath)]
/// #[reflect(type_path = "crate_name::foo::C")]
/// struct C<T>(T);
/// ```
#[proc_macro_derive(TypePath, attributes(reflect))]
pub fn derive_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, TypeAttributes, TypeParser};

    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);

    let type_attributes = match TypeAttributes::parse_attrs(&ast.attrs) {
        Ok(v) => v,
        Err(err) => return err.into_compile_error().into(),
    };

    let type_parser = TypeParser::new(&ast.ident, type_attributes.type_path.clone(), &ast.generics);
    if let Err(err) = type_parser.check_generics() {
        return err.into_compile_error().into();
    }

    let meta = ReflectMeta::new(type_attributes, type_parser);
    impls::impl_trait_type_path(&meta).into()
}
