use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{GenericParam, Generics, Ident, LitStr, Path};

use crate::utils::StringExpr;

/// Resolves the type path and generic parameters of a local type.
///
/// Only a part of [`ReflectMeta`](crate::derive_data::ReflectMeta).
pub(crate) struct TypeParser<'a> {
    ident: &'a Ident,
    custom_path: Option<Path>,
    generics: &'a Generics,
}

impl<'a> TypeParser<'a> {
    pub(crate) fn new(ident: &'a Ident, custom_path: Option<Path>, generics: &'a Generics) -> Self {
        Self {
            ident,
            custom_path,
            generics,
        }
    }

    /// Rejects generic parameters that reflection cannot express.
    ///
    /// Reflected types are `'static` and type paths only name type parameters.
    pub(crate) fn check_generics(&self) -> syn::Result<()> {
        for param in &self.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(param) => {
                    return Err(syn::Error::new(
                        param.span(),
                        "reflected types cannot have lifetime parameters",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new(
                        param.span(),
                        "reflected types cannot have const parameters",
                    ));
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub(super) fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// Whether an implementation of `Typed` or `TypePath` should be generic.
    #[inline]
    pub(super) fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    #[inline]
    pub(super) fn real_ident(&self) -> TokenStream {
        self.ident.to_token_stream()
    }

    fn get_ident(&self) -> &Ident {
        match &self.custom_path {
            Some(path) => path.segments.last().map_or(self.ident, |segment| &segment.ident),
            None => self.ident,
        }
    }

    pub(super) fn module_path(&self) -> StringExpr {
        match &self.custom_path {
            Some(path) => {
                let module = path
                    .segments
                    .iter()
                    .take(path.segments.len() - 1)
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                StringExpr::from_lit(&LitStr::new(&module, path.span()))
            }
            None => StringExpr::Const(quote! {
                ::core::module_path!()
            }),
        }
    }

    pub(super) fn type_ident(&self) -> StringExpr {
        let ident = self.get_ident();
        StringExpr::from_lit(&LitStr::new(&ident.to_string(), ident.span()))
    }

    /// Joins the type parameters as `A, B, C`, each mapped by `param_fn`.
    fn reduce_generics(
        &self,
        param_fn: impl Fn(&Ident) -> StringExpr,
        vc_reflect_path: &Path,
    ) -> StringExpr {
        let mut exprs = Vec::new();
        for (index, param) in self.generics.type_params().enumerate() {
            if index > 0 {
                exprs.push(StringExpr::from_str(", "));
            }
            exprs.push(param_fn(&param.ident));
        }
        StringExpr::from_iter(exprs, vc_reflect_path)
    }

    /// For `Page<u8>`, this is `"Page<u8>"`.
    pub(super) fn type_name(&self, vc_reflect_path: &Path) -> StringExpr {
        let type_ident = self.type_ident();
        if !self.impl_with_generic() {
            return type_ident;
        }

        let type_path_ = crate::path::type_path_(vc_reflect_path);
        let generics = self.reduce_generics(
            |ident| StringExpr::Borrowed(quote! { <#ident as #type_path_>::type_name() }),
            vc_reflect_path,
        );

        StringExpr::from_iter(
            [
                type_ident,
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ],
            vc_reflect_path,
        )
    }

    /// For `Page<u8>`, this is `"my_crate::module::Page<u8>"`.
    pub(super) fn type_path(&self, vc_reflect_path: &Path) -> StringExpr {
        let prefix = [
            self.module_path(),
            StringExpr::from_str("::"),
            self.type_ident(),
        ];
        if !self.impl_with_generic() {
            return StringExpr::from_iter(prefix, vc_reflect_path);
        }

        let type_path_ = crate::path::type_path_(vc_reflect_path);
        let generics = self.reduce_generics(
            |ident| StringExpr::Borrowed(quote! { <#ident as #type_path_>::type_path() }),
            vc_reflect_path,
        );

        StringExpr::from_iter(
            prefix.into_iter().chain([
                StringExpr::from_str("<"),
                generics,
                StringExpr::from_str(">"),
            ]),
            vc_reflect_path,
        )
    }
}
