use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, DeriveInput, Expr, Lit, LitStr, Meta, Type, parse_macro_input};

use crate::support;

pub fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => support::to_compile_error(e),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let fields = support::require_named_fields(&input)?;

    let mut descriptors = Vec::new();
    let mut assign_arms = Vec::new();
    let mut render_arms = Vec::new();

    for (index, field) in fields.named.iter().enumerate() {
        let Some(ident) = &field.ident else {
            return Err(support::error_spanned(field, "expected a named field"));
        };
        let ty = &field.ty;
        let name = ident.unraw().to_string();
        let tag = field_tag(&field.attrs)?.unwrap_or_default();
        let type_name = type_name(ty);

        descriptors.push(quote! {
            ::envstruct::FieldDescriptor {
                name: #name,
                type_name: #type_name,
                tag: #tag,
                kind: <::envstruct::__private::Field<#ty>>::KIND,
            }
        });
        assign_arms.push(quote! {
            #index => <::envstruct::__private::Field<#ty>>::assign(&mut self.#ident, value),
        });
        render_arms.push(quote! {
            #index => (&&&::envstruct::__private::Shown(&self.#ident)).shown(),
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::envstruct::Envstruct for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::envstruct::FieldDescriptor] = {
                #[allow(unused_imports)]
                use ::envstruct::__private::Unsupported as _;
                &[
                    #(#descriptors),*
                ]
            };

            fn assign(
                &mut self,
                index: usize,
                value: ::envstruct::Value,
            ) -> ::std::result::Result<(), ::envstruct::ConversionError> {
                #[allow(unused_imports)]
                use ::envstruct::__private::Unsupported as _;
                match index {
                    #(#assign_arms)*
                    _ => {
                        let _ = value;
                        ::std::result::Result::Ok(())
                    }
                }
            }

            fn render_field(&self, index: usize) -> ::std::string::String {
                #[allow(unused_imports)]
                use ::envstruct::__private::{ShowDebug as _, ShowOpaque as _, ShowRender as _};
                match index {
                    #(#render_arms)*
                    _ => ::std::string::String::new(),
                }
            }
        }
    })
}

/// Read the raw tag from `#[env("...")]` or `#[env = "..."]`.
fn field_tag(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut tag: Option<LitStr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("env")) {
        if tag.is_some() {
            return Err(support::error_spanned(attr, "duplicate `#[env]` attribute"));
        }
        let lit = match &attr.meta {
            Meta::List(_) => attr.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => s.clone(),
                    other => return Err(support::error_spanned(other, "expected a string tag")),
                },
                other => return Err(support::error_spanned(other, "expected a string tag")),
            },
            Meta::Path(_) => {
                return Err(support::error_spanned(
                    attr,
                    "expected `#[env(\"KEY[,required][,noreport]\")]`",
                ));
            }
        };
        tag = Some(lit);
    }

    Ok(tag.map(|lit| lit.value()))
}

/// The declared type as source text, without token spacing.
fn type_name(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn message(input: DeriveInput) -> String {
        expand(input).unwrap_err().to_string()
    }

    #[test]
    fn list_and_name_value_tags() {
        let list: Vec<Attribute> = vec![parse_quote!(#[env("port,required")])];
        assert_eq!(field_tag(&list).unwrap().as_deref(), Some("port,required"));

        let name_value: Vec<Attribute> = vec![parse_quote!(#[env = "port"])];
        assert_eq!(field_tag(&name_value).unwrap().as_deref(), Some("port"));

        let other: Vec<Attribute> = vec![parse_quote!(#[serde(default)])];
        assert_eq!(field_tag(&other).unwrap(), None);
    }

    #[test]
    fn duplicate_tag_rejected() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env("a")]), parse_quote!(#[env("b")])];
        let err = field_tag(&attrs).unwrap_err();
        assert_eq!(err.to_string(), "duplicate `#[env]` attribute");
    }

    #[test]
    fn bare_tag_rejected() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env])];
        let err = field_tag(&attrs).unwrap_err();
        assert_eq!(err.to_string(), "expected `#[env(\"KEY[,required][,noreport]\")]`");
    }

    #[test]
    fn non_string_tag_rejected() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env = 5])];
        assert_eq!(field_tag(&attrs).unwrap_err().to_string(), "expected a string tag");

        let attrs: Vec<Attribute> = vec![parse_quote!(#[env = PORT])];
        assert_eq!(field_tag(&attrs).unwrap_err().to_string(), "expected a string tag");

        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(5)])];
        assert!(field_tag(&attrs).is_err());
    }

    #[test]
    fn bad_field_tag_fails_the_derive() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[env]
                port: u16,
            }
        };
        assert!(message(input).starts_with("expected `#[env("));
    }

    #[test]
    fn tuple_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Config(u16);
        };
        assert_eq!(
            message(input),
            "Envstruct requires a struct with named fields (e.g. `struct X { ... }`)"
        );
    }

    #[test]
    fn unit_struct_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Config;
        };
        assert!(message(input).starts_with("Envstruct requires a struct with named fields"));
    }

    #[test]
    fn enum_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Config {
                A,
            }
        };
        assert_eq!(message(input), "Envstruct can only be derived for structs");
    }

    #[test]
    fn kinds_are_left_to_the_type_system() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[env("timeout")]
                timeout: chrono::Duration,
            }
        };
        let out = expand(input).unwrap().to_string();
        assert!(out.contains("__private :: Field < chrono :: Duration"));
        assert!(!out.contains("where"));
    }

    #[test]
    fn type_name_strips_spacing() {
        let ty: Type = parse_quote!(Option<Vec<std::string::String>>);
        assert_eq!(type_name(&ty), "Option<Vec<std::string::String>>");
    }
}
