use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::LitStr;

/// A string expression in generated code.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// Known at compile time: a literal or a macro such as `module_path!()`.
    Const(TokenStream),
    /// A `&'static str` computed at runtime, e.g. `<T as TypePath>::type_path()`.
    Borrowed(TokenStream),
    /// A [`String`].
    Owned(TokenStream),
}

impl StringExpr {
    /// Creates a constant expression from a literal.
    pub fn from_lit(lit: &LitStr) -> Self {
        Self::Const(lit.to_token_stream())
    }

    /// Creates a constant expression from a string slice.
    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Returns tokens for a `&str`.
    ///
    /// An owned string must only be borrowed inside the scope it is created in.
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote! {
                &#owned as &str
            },
        }
    }

    /// Returns tokens for a `String`.
    pub fn into_owned(self, vc_reflect_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => {
                let impls_ = crate::path::impls_(vc_reflect_path);
                quote! {
                    #impls_::concat(&[#tokens])
                }
            }
            Self::Owned(owned) => owned,
        }
    }

    fn is_const(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// Concatenates expressions.
    ///
    /// If all of them are constant, the result is a `concat!` and stays constant.
    pub fn from_iter<T: IntoIterator<Item = StringExpr>>(
        iter: T,
        vc_reflect_path: &syn::Path,
    ) -> Self {
        let exprs: Vec<StringExpr> = iter.into_iter().collect();

        if exprs.iter().all(StringExpr::is_const) {
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);
            Self::Const(quote! {
                ::core::concat!( #(#inner),* )
            })
        } else {
            let impls_ = crate::path::impls_(vc_reflect_path);
            let inner = exprs.into_iter().map(StringExpr::into_borrowed);
            Self::Owned(quote! {
                #impls_::concat(&[ #(#inner),* ])
            })
        }
    }
}
