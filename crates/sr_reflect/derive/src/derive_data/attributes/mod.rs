//! Provide some tools for parsing `#[reflect(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::{FieldList, TypeAttributes};

use syn::Attribute;

/// Runs `parse` on the arguments of every `#[reflect(...)]` attribute.
fn for_each_reflect_attr(
    attrs: &[Attribute],
    mut parse: impl FnMut(syn::parse::ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    let mut errors: Option<syn::Error> = None;

    for attr in attrs {
        if !attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME) {
            continue;
        }
        if let Err(err) = attr.parse_args_with(&mut parse) {
            match &mut errors {
                Some(errors) => errors.combine(err),
                None => errors = Some(err),
            }
        }
    }

    match errors {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
