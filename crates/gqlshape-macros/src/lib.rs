//! Derive macros for gqlshape.
//!
//! Generated code refers to items through the `gqlshape` facade crate.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod input_type;
mod shape;

/// Derive `gqlshape::Shape`.
///
/// Structs become records. Enums and `#[graphql(scalar)]` containers become
/// self-decoding scalars.
///
/// Field attributes:
/// - `#[graphql(selection = "user(login:$login)")]` emits the literal token
///   instead of the camelCased field name.
/// - `#[graphql(recurse = 3)]` allows up to three nested occurrences of the
///   field before it is dropped from the selection.
/// - `#[graphql(flatten)]` splices the field's own fields into the parent.
///
/// Tuple struct fields are anonymous and embedded unless they carry a
/// selection override.
#[proc_macro_derive(Shape, attributes(graphql))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    shape::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `gqlshape::InputType` as a named GraphQL input type.
///
/// The type name defaults to the Rust identifier; override it with
/// `#[graphql(name = "ReviewInput")]`.
#[proc_macro_derive(InputType, attributes(graphql))]
pub fn derive_input_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    input_type::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
