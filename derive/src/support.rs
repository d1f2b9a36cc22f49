use proc_macro::TokenStream;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

/// Convert `syn::Error` into a TokenStream that emits a compiler error.
pub fn to_compile_error(err: syn::Error) -> TokenStream {
    err.to_compile_error().into()
}

/// Create a `syn::Error` pointing at `tokens`.
pub fn error_spanned<T: quote::ToTokens>(tokens: &T, msg: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, msg.into())
}

/// Return the named fields of a struct; anything else is an error.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Envstruct can only be derived for structs",
            ));
        }
    };
    match fields {
        Fields::Named(named) => Ok(named),
        _ => Err(syn::Error::new(
            fields.span(),
            "Envstruct requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
    }
}
