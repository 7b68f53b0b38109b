use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
///
/// `reflect_kind_token` is the variant name shared by `ReflectKind`, `ReflectRef` and `ReflectMut`.
/// `fallback_eq_tokens` is the body of `reflect_partial_eq` used without `#[reflect(partial_eq)]`,
/// empty to keep the trait default.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    fallback_eq_tokens: TokenStream,
) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_reflect_path);

    let reflect_partial_eq_tokens = match meta.attrs().partial_eq {
        Some(span) => quote_spanned! { span =>
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(
                    match <dyn #reflect_>::downcast_ref::<Self>(other) {
                        ::core::option::Option::Some(other) => ::core::cmp::PartialEq::eq(self, other),
                        ::core::option::Option::None => false,
                    }
                )
            }
        },
        None if fallback_eq_tokens.is_empty() => crate::utils::empty(),
        None => quote! {
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
                #fallback_eq_tokens
            }
        },
    };

    let reflect_debug_tokens = match meta.attrs().debug {
        Some(span) => quote_spanned! { span =>
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        },
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> ::core::result::Result<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }

            #reflect_partial_eq_tokens

            #reflect_debug_tokens
        }
    }
}
