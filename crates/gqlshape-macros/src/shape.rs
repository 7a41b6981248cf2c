use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, LitStr, Type, parse_quote};

use crate::attrs::{ContainerAttrs, FieldAttrs};

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::parse(&input.attrs)?;
    let ident = &input.ident;

    let (body, field_types) = if container.scalar {
        (quote!(::gqlshape::TypeDescriptor::Scalar), Vec::new())
    } else {
        match &input.data {
            Data::Struct(data) => record(ident, &data.fields)?,
            // Enums decode from a single JSON value, like GraphQL enums.
            Data::Enum(_) => (quote!(::gqlshape::TypeDescriptor::Scalar), Vec::new()),
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "Shape cannot be derived for unions",
                ));
            }
        }
    };

    let generics = with_bounds(input.generics.clone(), &field_types);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::gqlshape::Shape for #ident #ty_generics #where_clause {
            fn descriptor() -> ::gqlshape::TypeDescriptor {
                #body
            }
        }
    })
}

fn record(ident: &syn::Ident, fields: &Fields) -> syn::Result<(TokenStream, Vec<Type>)> {
    let name = LitStr::new(&ident.unraw().to_string(), ident.span());
    let mut descriptors = Vec::new();
    let mut field_types = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::parse(&field.attrs)?;
        let ty = &field.ty;

        // Unnamed fields are anonymous: embedded unless explicitly selected.
        let (field_name, anonymous) = match &field.ident {
            Some(field_ident) => (field_ident.unraw().to_string(), false),
            None => (index.to_string(), true),
        };
        let field_name = LitStr::new(&field_name, proc_macro2::Span::call_site());

        let selection = match &attrs.selection {
            Some(lit) => quote!(::core::option::Option::Some(#lit)),
            None => quote!(::core::option::Option::None),
        };
        let recursion_limit = match attrs.recurse {
            Some(limit) => quote!(::core::option::Option::Some(#limit)),
            None => quote!(::core::option::Option::None),
        };
        let embed = attrs.flatten || anonymous;

        descriptors.push(quote! {
            .field(
                ::gqlshape::FieldDescriptor::new::<#ty>(#field_name).with_config(
                    ::gqlshape::FieldConfig {
                        selection: #selection,
                        recursion_limit: #recursion_limit,
                        embed: #embed,
                    },
                ),
            )
        });
        field_types.push(ty.clone());
    }

    let body = quote! {
        ::gqlshape::TypeDescriptor::Record(
            ::gqlshape::RecordDescriptor::new::<Self>(#name)
                #(#descriptors)*
        )
    };
    Ok((body, field_types))
}

/// Generic shapes need `'static` parameters and shaped fields.
fn with_bounds(mut generics: Generics, field_types: &[Type]) -> Generics {
    if generics.type_params().next().is_none() {
        return generics;
    }

    for param in &mut generics.params {
        if let GenericParam::Type(param) = param {
            param.bounds.push(parse_quote!('static));
        }
    }
    let where_clause = generics.make_where_clause();
    for ty in field_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::gqlshape::Shape));
    }
    generics
}
