use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Member};

use super::{FieldAttributes, ReflectMeta, ReflectStruct, StructField};
use super::{TypeAttributes, TypeParser, TypeRepr};

/// The reflected shape of a type, parsed from the derive input.
pub(crate) enum ReflectDerive<'a> {
    /// A struct with named fields, or a unit struct.
    Struct(ReflectStruct<'a>),
    /// `#[reflect(list)] struct Items(Vec<T>);`
    List(ReflectStruct<'a>),
    /// `#[reflect(opaque)]`
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let repr = attrs.repr;

        let parser = TypeParser::new(&input.ident, attrs.type_path.clone(), &input.generics);
        parser.check_generics()?;
        let meta = ReflectMeta::new(attrs, parser);

        if repr == TypeRepr::Opaque {
            return Ok(Self::Opaque(meta));
        }

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "enums can only be reflected with `#[reflect(opaque)]`",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "unions can only be reflected with `#[reflect(opaque)]`",
                ));
            }
        };

        let fields = collect_fields(&data.fields)?;

        match (repr, &data.fields) {
            (TypeRepr::List, Fields::Unnamed(unnamed)) if unnamed.unnamed.len() == 1 => {
                if meta.impl_with_generic() {
                    return Err(syn::Error::new(
                        input.generics.span(),
                        "`#[reflect(list)]` cannot be used on generic types",
                    ));
                }
                Ok(Self::List(ReflectStruct::new(meta, fields)))
            }
            (TypeRepr::List, _) => Err(syn::Error::new(
                data.fields.span(),
                "`#[reflect(list)]` expects a newtype, e.g. `struct Items(Vec<Item>);`",
            )),
            (_, Fields::Named(_) | Fields::Unit) => Ok(Self::Struct(ReflectStruct::new(meta, fields))),
            (_, Fields::Unnamed(unnamed)) => Err(syn::Error::new(
                unnamed.span(),
                "tuple structs can only be reflected with `#[reflect(list)]` or `#[reflect(opaque)]`",
            )),
        }
    }
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<StructField<'_>>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(index.into()),
            };
            Ok(StructField {
                member,
                ty: &field.ty,
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
            })
        })
        .collect()
}
