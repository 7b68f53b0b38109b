use crate::derive_data::ReflectMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };

    // Generic types have no single concrete type to register.
    if meta.impl_with_generic() {
        return syn::Error::new(span, "`auto_register` cannot be used on generic types")
            .into_compile_error();
    }

    let vc_reflect_path = meta.vc_reflect_path();
    let auto_register_ = crate::path::auto_register_(vc_reflect_path);
    let real_ident = meta.real_ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#real_ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
