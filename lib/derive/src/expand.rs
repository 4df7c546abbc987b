//! Shared expansion for `#[state]` and `#[request]`.
//!
//! The two macros differ only in the derives they guarantee: state structs
//! get `PartialEq` on top of `Debug, Clone` so stores can diff writes.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemStruct;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    State,
    Request,
}

impl Kind {
    fn guaranteed_derives(self) -> &'static [&'static str] {
        match self {
            Kind::State => &["Debug", "Clone", "PartialEq"],
            Kind::Request => &["Debug", "Clone"],
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Kind::State => "state",
            Kind::Request => "request",
        }
    }
}

pub fn expand(attr: TokenStream, item: ItemStruct, kind: Kind) -> syn::Result<TokenStream> {
    let path = parse_path(attr, kind)?;

    let struct_name = &item.ident;
    let vis = &item.vis;

    // Split the struct's attributes: docs stay on top, user derive attrs are
    // kept as written, everything else follows the derive block.
    let mut doc_attrs = Vec::new();
    let mut user_derive_attrs = Vec::new();
    let mut other_attrs = Vec::new();
    let mut user_derives = Vec::new();
    for attr in &item.attrs {
        if attr.path().is_ident("doc") {
            doc_attrs.push(attr);
        } else if attr.path().is_ident("derive") {
            if let Ok(paths) = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
            ) {
                for path in paths {
                    if let Some(ident) = path.get_ident() {
                        user_derives.push(ident.to_string());
                    }
                }
            }
            user_derive_attrs.push(attr);
        } else {
            other_attrs.push(attr);
        }
    }

    let missing: Vec<TokenStream> = kind
        .guaranteed_derives()
        .iter()
        .filter(|name| !user_derives.iter().any(|d| d == *name))
        .map(|name| {
            let ident = proc_macro2::Ident::new(name, proc_macro2::Span::call_site());
            quote!(#ident)
        })
        .collect();

    let derive_attrs = if missing.is_empty() {
        quote! { #(#user_derive_attrs)* }
    } else {
        quote! {
            #(#user_derive_attrs)*
            #[derive(#(#missing),*)]
        }
    };

    // Named structs carry their own braces; tuple and unit structs need the
    // trailing semicolon restored.
    let fields = &item.fields;
    let struct_body = match fields {
        syn::Fields::Named(_) => quote! { #fields },
        syn::Fields::Unnamed(_) => {
            let semi = item.semi_token.map(|_| quote!(;)).unwrap_or_default();
            quote! { #fields #semi }
        }
        syn::Fields::Unit => quote! { ; },
    };

    let path_doc = format!("Tree path this {} is keyed under.", kind.noun());

    Ok(quote! {
        #(#doc_attrs)*
        #derive_attrs
        #(#other_attrs)*
        #vis struct #struct_name #struct_body

        impl #struct_name {
            #[doc = #path_doc]
            pub const PATH: &'static str = #path;
        }
    })
}

fn parse_path(attr: TokenStream, kind: Kind) -> syn::Result<String> {
    let lit: syn::LitStr = syn::parse2(attr)?;
    let path = lit.value();
    if path.is_empty() {
        return Err(syn::Error::new(
            lit.span(),
            format!("{} path cannot be empty", kind.noun()),
        ));
    }
    Ok(path)
}

// ==== tests ====
