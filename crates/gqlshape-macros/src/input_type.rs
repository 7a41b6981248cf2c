use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, LitStr};

use crate::attrs::ContainerAttrs;

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::parse(&input.attrs)?;
    let ident = &input.ident;
    let name = container
        .name
        .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));

    if name.value().is_empty() {
        return Err(syn::Error::new(name.span(), "input type name must not be empty"));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::gqlshape::InputType for #ident #ty_generics #where_clause {
            fn argument_type() -> ::gqlshape::ArgumentType {
                ::gqlshape::ArgumentType::named(#name)
            }
        }
    })
}
