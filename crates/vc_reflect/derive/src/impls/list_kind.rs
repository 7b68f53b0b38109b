use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_get_type_meta, impl_trait_reflect};
use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implement full reflect for `#[reflect(list)]` newtypes.
///
/// Every list operation is forwarded to the wrapped field.
pub(crate) fn impl_list(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let impls_ = crate::path::impls_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let list_info_ = crate::path::list_info_(vc_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);
    let list_ = crate::path::list_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);

    let Some(inner) = info.active_fields().next() else {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "the wrapped field of `#[reflect(list)]` cannot be skipped",
        )
        .into_compile_error();
    };
    let inner_ty = inner.ty;

    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::List(#list_info_::wrapping::<Self>(
                #macro_utils_::list_info_of::<#inner_ty>()
            ))
        },
    );

    let real_ident = meta.real_ident();
    let list_trait_tokens = quote! {
        impl #list_ for #real_ident {
            #[inline]
            fn get(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                #list_::get(&self.0, index)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                #list_::get_mut(&mut self.0, index)
            }

            #[inline]
            fn push_reflect(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> ::core::result::Result<(), #macro_utils_::Box<dyn #reflect_>> {
                #list_::push_reflect(&mut self.0, value)
            }

            #[inline]
            fn clear(&mut self) {
                #list_::clear(&mut self.0)
            }

            #[inline]
            fn len(&self) -> usize {
                #list_::len(&self.0)
            }
        }
    };

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(List),
        quote! { #impls_::list_partial_eq(self, other) },
    );

    let get_type_meta_tokens = impl_trait_get_type_meta(meta, core::iter::once(inner_ty));

    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #list_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}
