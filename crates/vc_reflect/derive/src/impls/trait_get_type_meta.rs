use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// `dependencies` are the types registered along with this one, usually the field types.
pub(crate) fn impl_trait_get_type_meta<'t>(
    meta: &ReflectMeta,
    dependencies: impl Iterator<Item = &'t syn::Type>,
) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(vc_reflect_path);
    let type_meta_ = crate::path::type_meta_(vc_reflect_path);
    let from_type_ = crate::path::from_type_(vc_reflect_path);
    let type_registry_ = crate::path::type_registry_(vc_reflect_path);

    let (trait_counter, insert_default) = match meta.attrs().default {
        Some(span) => {
            let type_trait_default_ = crate::path::type_trait_default_(vc_reflect_path);
            (
                1usize,
                quote_spanned! { span =>
                    #type_meta_::insert_trait(&mut meta, <#type_trait_default_ as #from_type_<Self>>::from_type());
                },
            )
        }
        None => (0usize, crate::utils::empty()),
    };

    let dependencies: Vec<_> = dependencies.collect();
    let register_deps_tokens = if dependencies.is_empty() {
        crate::utils::empty()
    } else {
        quote! {
            fn register_dependencies(registry: &mut #type_registry_) {
                #( registry.register::<#dependencies>(); )*
            }
        }
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, mut where_clause) = meta.split_generics(true);

    // `TypeTraitDefault` needs `Self: Default`, which a derived `Default`
    // only provides under bounds on the type parameters.
    if meta.attrs().default.is_some() && meta.impl_with_generic() {
        where_clause = quote! { #where_clause Self: ::core::default::Default };
    }

    quote! {
        impl #impl_generics #get_type_meta_ for #real_ident #ty_generics #where_clause {
            fn get_type_meta() -> #type_meta_ {
                let mut meta = #type_meta_::with_capacity::<Self>(#trait_counter);
                #insert_default
                meta
            }

            #register_deps_tokens
        }
    }
}
