//! `#[graphql(...)]` attribute parsing.

use syn::{Attribute, LitInt, LitStr};

/// Container-level options.
#[derive(Default)]
pub struct ContainerAttrs {
    pub scalar: bool,
    pub name: Option<LitStr>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("graphql")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("scalar") {
                    out.scalar = true;
                    return Ok(());
                }
                if meta.path.is_ident("name") {
                    out.name = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                Err(meta.error("unsupported graphql container attribute"))
            })?;
        }
        Ok(out)
    }
}

/// Field-level options.
#[derive(Default)]
pub struct FieldAttrs {
    pub selection: Option<LitStr>,
    pub recurse: Option<u32>,
    pub flatten: bool,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("graphql")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("selection") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "selection must not be empty"));
                    }
                    out.selection = Some(lit);
                    return Ok(());
                }
                if meta.path.is_ident("recurse") {
                    let lit: LitInt = meta.value()?.parse()?;
                    let limit: u32 = lit.base10_parse()?;
                    if limit < 2 {
                        return Err(syn::Error::new(
                            lit.span(),
                            "recurse only makes sense for values greater than 1",
                        ));
                    }
                    out.recurse = Some(limit);
                    return Ok(());
                }
                if meta.path.is_ident("flatten") {
                    out.flatten = true;
                    return Ok(());
                }
                Err(meta.error("unsupported graphql field attribute"))
            })?;
        }
        Ok(out)
    }
}
