//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

/// How the fields of a type are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeRepr {
    /// Derived from the shape of the type.
    Auto,
    /// `#[reflect(opaque)]`: internals are hidden.
    Opaque,
    /// `#[reflect(list)]`: a newtype over a list.
    List,
}

/// Attributes on the type itself.
#[derive(Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "my_crate::foo::Bar")]`
    pub type_path: Option<Path>,
    pub repr: TypeRepr,
    /// `Default` is available.
    pub default: Option<Span>,
    /// `PartialEq` is available.
    pub partial_eq: Option<Span>,
    /// `Debug` is available.
    pub debug: Option<Span>,
    pub auto_register: Option<Span>,
}

impl Default for TypeAttributes {
    fn default() -> Self {
        Self {
            type_path: None,
            repr: TypeRepr::Auto,
            default: None,
            partial_eq: None,
            debug: None,
            auto_register: None,
        }
    }
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| res.parse_meta(meta))?;
            }
        }
        Ok(res)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.get_ident().map_or_else(Span::call_site, |ident| ident.span());

        if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            let path: Path = lit.parse()?;
            if path.leading_colon.is_some() || path.segments.len() < 2 {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected a full path without leading `::`, e.g. `my_crate::Foo`",
                ));
            }
            self.type_path = Some(path);
        } else if meta.path.is_ident("opaque") {
            self.set_repr(TypeRepr::Opaque, span)?;
        } else if meta.path.is_ident("list") {
            self.set_repr(TypeRepr::List, span)?;
        } else if meta.path.is_ident("default") {
            self.default = Some(span);
        } else if meta.path.is_ident("partial_eq") {
            self.partial_eq = Some(span);
        } else if meta.path.is_ident("debug") {
            self.debug = Some(span);
        } else if meta.path.is_ident("auto_register") {
            self.auto_register = Some(span);
        } else {
            return Err(meta.error(
                "unsupported reflect attribute, expected one of: \
                 `type_path`, `opaque`, `list`, `default`, `partial_eq`, `debug`, `auto_register`",
            ));
        }
        Ok(())
    }

    fn set_repr(&mut self, repr: TypeRepr, span: Span) -> syn::Result<()> {
        if self.repr != TypeRepr::Auto && self.repr != repr {
            return Err(syn::Error::new(span, "`opaque` and `list` cannot be combined"));
        }
        self.repr = repr;
        Ok(())
    }
}

/// Attributes on a field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`: the field is invisible to reflection.
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        res.skip = Some(meta.path.segments[0].ident.span());
                        Ok(())
                    } else {
                        Err(meta.error("unsupported field attribute, expected `skip`"))
                    }
                })?;
            }
        }
        Ok(res)
    }
}
