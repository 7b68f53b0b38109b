use proc_macro2::TokenStream;
use quote::quote;
use syn::{Member, Type};

use super::{FieldAttributes, ReflectMeta};

/// A field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub member: Member,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// Returns the field name as written in the type information.
    pub fn name(&self) -> String {
        match &self.member {
            Member::Named(ident) => ident.to_string(),
            Member::Unnamed(index) => index.index.to_string(),
        }
    }
}

/// A struct and its fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub(super) fn new(mut meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> Self {
        let active_types = fields
            .iter()
            .filter(|field| field.attrs.skip.is_none())
            .map(|field| field.ty.clone())
            .collect();
        meta.set_active_types(active_types);
        Self { meta, fields }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields that are not skipped, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.skip.is_none())
    }

    /// Generates `TypeInfo::Struct(StructInfo::new::<Self>(&[...]))`.
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let struct_info_ = crate::path::struct_info_(vc_reflect_path);
        let named_field_ = crate::path::named_field_(vc_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = field.ty;
            let name = field.name();
            quote! {
                #named_field_::new::<#ty>(#name)
            }
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[ #(#fields),* ]))
        }
    }
}
