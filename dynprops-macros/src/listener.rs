//! `#[listener]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, FnArg, Ident, ItemFn, LitStr, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[listener]` macro.
pub(crate) struct ListenerArgs {
    pub name: Option<String>,
    pub filter: Option<Expr>,
}

impl Parse for ListenerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut filter = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                "filter" => {
                    let expr: Expr = input.parse()?;
                    filter = Some(expr);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(ListenerArgs { name, filter })
    }
}

/// Implementation of the `#[listener]` attribute macro.
pub fn listener_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ListenerArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;

    if input.sig.asyncness.is_some() {
        return syn::Error::new_spanned(
            &input.sig.asyncness,
            "listeners run synchronously; remove `async`",
        )
        .to_compile_error()
        .into();
    }

    let inputs = &input.sig.inputs;
    let (event_pat, event_type) = match inputs.first() {
        Some(FnArg::Typed(pat_type)) if inputs.len() == 1 => {
            if let Type::Reference(type_ref) = &*pat_type.ty {
                (&pat_type.pat, &type_ref.elem)
            } else {
                return syn::Error::new_spanned(
                    &pat_type.ty,
                    "listener event argument must be a reference (&Event)",
                )
                .to_compile_error()
                .into();
            }
        }
        _ => {
            return syn::Error::new_spanned(
                inputs,
                "listener function must take exactly one argument: fn(event: &Event)",
            )
            .to_compile_error()
            .into();
        }
    };

    let struct_name = if let Some(ref custom_name) = args.name {
        Ident::new(custom_name, fn_name.span())
    } else {
        fn_name.clone()
    };

    let filter_check = args.filter.as_ref().map(|filter_expr| {
        quote! {
            if !(#filter_expr)(#event_pat) {
                return ::core::result::Result::Ok(());
            }
        }
    });

    let expanded = quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Auto-generated Hook from `#[dynprops::listener]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl ::dynprops::Hook<#event_type> for #struct_name {
            fn on_event(
                &self,
                #event_pat: &#event_type,
            ) -> ::core::result::Result<(), ::dynprops::BoxError> {
                #filter_check
                #fn_block
            }
        }
    };

    TokenStream::from(expanded)
}
