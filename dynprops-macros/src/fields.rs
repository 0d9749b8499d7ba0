//! `#[derive(Fields)]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type, parse_macro_input};

struct StaticField {
    ident: Ident,
    name: String,
    ty: Type,
}

/// Implementation of `#[derive(Fields)]`.
pub fn derive_fields_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return expand(name, &input, &[]).into();
            }
            Fields::Unnamed(_) => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "#[derive(Fields)] requires named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "#[derive(Fields)] can only be used on structs")
                .to_compile_error()
                .into();
        }
    };

    let mut declared = Vec::new();
    for field in named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let mut skip = false;
        let mut rename = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("fields") {
                continue;
            }
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    rename = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown fields attribute, expected `skip` or `rename`"))
                }
            });
            if let Err(e) = parsed {
                return e.to_compile_error().into();
            }
        }

        if skip {
            continue;
        }

        let declared_name = rename.unwrap_or_else(|| {
            let raw = ident.to_string();
            raw.strip_prefix("r#").map(str::to_owned).unwrap_or(raw)
        });
        declared.push(StaticField {
            ident,
            name: declared_name,
            ty: field.ty.clone(),
        });
    }

    expand(name, &input, &declared).into()
}

fn expand(name: &Ident, input: &DeriveInput, fields: &[StaticField]) -> proc_macro2::TokenStream {
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    let idents: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let tys: Vec<_> = fields.iter().map(|f| &f.ty).collect();

    quote! {
        impl #impl_generics ::dynprops::Fields for #name #ty_generics #where_clause {
            const FIELD_NAMES: &'static [&'static str] = &[#(#names),*];

            fn get_field(&self, name: &str) -> ::core::option::Option<::dynprops::Value> {
                match name {
                    #(
                        #names => ::core::option::Option::Some(
                            ::dynprops::Value::from(::core::clone::Clone::clone(&self.#idents))
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn set_field(
                &mut self,
                name: &str,
                value: ::dynprops::Value,
            ) -> ::core::result::Result<(), ::dynprops::AccessError> {
                match name {
                    #(
                        #names => {
                            let found = value.kind();
                            self.#idents = <#tys as ::core::convert::TryFrom<::dynprops::Value>>::try_from(value)
                                .map_err(|_| ::dynprops::AccessError::TypeMismatch {
                                    field: ::std::borrow::ToOwned::to_owned(name),
                                    expected: ::core::stringify!(#tys),
                                    found,
                                })?;
                            ::core::result::Result::Ok(())
                        }
                    )*
                    _ => ::core::result::Result::Err(::dynprops::AccessError::NoSuchField {
                        name: ::std::borrow::ToOwned::to_owned(name),
                    }),
                }
            }
        }
    }
}
