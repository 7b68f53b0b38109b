use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_get_type_meta, impl_trait_reflect};
use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectMeta;

/// Implement reflect for `#[reflect(opaque)]` types.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(vc_reflect_path);

    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Opaque(#opaque_info_::new::<Self>())
        },
    );

    // Without `partial_eq` an opaque value cannot be compared.
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Opaque), crate::utils::empty());

    let get_type_meta_tokens = impl_trait_get_type_meta(meta, core::iter::empty());

    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}
