use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{ImplGenerics, Path, Type, TypeGenerics};

use super::{TypeAttributes, TypeParser};
use crate::utils::StringExpr;

/// Everything about a reflected type except its fields.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // Field types, bounded in generic impls.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("real_ident", &self.real_ident())
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            vc_reflect_path: crate::path::vc_reflect(),
            attrs,
            type_parser,
            active_types: Vec::new(),
        }
    }

    #[inline]
    pub(super) fn set_active_types(&mut self, active_types: Vec<Type>) {
        self.active_types = active_types;
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.type_parser.impl_with_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    #[inline]
    pub fn module_path(&self) -> StringExpr {
        self.type_parser.module_path()
    }

    #[inline]
    pub fn type_ident(&self) -> StringExpr {
        self.type_parser.type_ident()
    }

    #[inline]
    pub fn type_name(&self) -> StringExpr {
        self.type_parser.type_name(&self.vc_reflect_path)
    }

    #[inline]
    pub fn type_path(&self) -> StringExpr {
        self.type_parser.type_path(&self.vc_reflect_path)
    }

    /// Splits generics for an `impl` block.
    ///
    /// With `reflect_bounds`, type parameters and field types are bounded by
    /// `Reflect + GetTypeMeta`, otherwise type parameters are bounded by `TypePath`.
    pub fn split_generics(
        &self,
        reflect_bounds: bool,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let generics = self.type_parser.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let mut predicates: Vec<TokenStream> = where_clause
            .map(|clause| {
                clause
                    .predicates
                    .iter()
                    .map(ToTokens::to_token_stream)
                    .collect()
            })
            .unwrap_or_default();

        let vc_reflect_path = &self.vc_reflect_path;
        if reflect_bounds {
            let reflect_ = crate::path::reflect_(vc_reflect_path);
            let get_type_meta_ = crate::path::get_type_meta_(vc_reflect_path);

            for param in generics.type_params() {
                let ident = &param.ident;
                predicates.push(quote! { #ident: #reflect_ + #get_type_meta_ });
            }
            if self.impl_with_generic() {
                for ty in &self.active_types {
                    predicates.push(quote! { #ty: #reflect_ + #get_type_meta_ });
                }
            }
        } else {
            let type_path_ = crate::path::type_path_(vc_reflect_path);
            for param in generics.type_params() {
                let ident = &param.ident;
                predicates.push(quote! { #ident: #type_path_ });
            }
        }

        let where_clause = if predicates.is_empty() {
            crate::utils::empty()
        } else {
            quote! { where #(#predicates,)* }
        };

        (impl_generics, ty_generics, where_clause)
    }
}
