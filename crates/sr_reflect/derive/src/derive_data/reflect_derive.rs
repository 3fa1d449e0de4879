use syn::{Data, DeriveInput, Fields};

use super::{FieldAttributes, ReflectMeta, ReflectStruct, StructField, TypeAttributes, TypeParser};

/// Type data used to generate the implementations.
pub(crate) enum ReflectDerive<'a> {
    /// `struct T { ... }`
    Struct(ReflectStruct<'a>),
    /// Any type marked with `#[reflect(Opaque)]`.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    /// Parse the input of `#[derive(Reflect)]`.
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let type_parser = TypeParser::new_local(&input.ident, &input.generics);

        if attrs.is_opaque.is_some() {
            Self::reject_field_attrs(input)?;
            return Ok(Self::Opaque(ReflectMeta::new(attrs, type_parser)));
        }

        let ident = &input.ident;
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        format_args!(
                            "`#[derive(Reflect)]` requires named fields, \
                             add `#[reflect(Opaque)]` to reflect the tuple struct `{ident}` as a leaf"
                        ),
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        format_args!(
                            "`#[derive(Reflect)]` requires named fields, \
                             add `#[reflect(Opaque)]` to reflect the unit struct `{ident}` as a leaf"
                        ),
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    format_args!(
                        "`#[derive(Reflect)]` does not support enums, \
                         add `#[reflect(Opaque)]` to reflect `{ident}` as a leaf"
                    ),
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    format_args!(
                        "`#[derive(Reflect)]` does not support unions, \
                         add `#[reflect(Opaque)]` to reflect `{ident}` as a leaf"
                    ),
                ));
            }
        };

        let mut errors: Option<syn::Error> = None;
        let mut fields = Vec::with_capacity(named.named.len());
        for data in &named.named {
            match FieldAttributes::parse_attrs(&data.attrs) {
                Ok(attrs) => fields.push(StructField { data, attrs }),
                Err(err) => match &mut errors {
                    Some(errors) => errors.combine(err),
                    None => errors = Some(err),
                },
            }
        }
        if let Some(err) = errors {
            return Err(err);
        }

        let meta = ReflectMeta::new(attrs, type_parser);
        ReflectStruct::new(meta, fields, input.ident.span()).map(Self::Struct)
    }

    /// Opaque types do not look at fields, attributes on them would be ignored.
    fn reject_field_attrs(input: &DeriveInput) -> syn::Result<()> {
        let fields: Box<dyn Iterator<Item = &syn::Field>> = match &input.data {
            Data::Struct(data) => Box::new(data.fields.iter()),
            Data::Enum(data) => Box::new(data.variants.iter().flat_map(|v| v.fields.iter())),
            Data::Union(data) => Box::new(data.fields.named.iter()),
        };

        for field in fields {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if let Some(span) = attrs.first_span {
                return Err(syn::Error::new(
                    span,
                    "field attributes have no effect on `Opaque` types",
                ));
            }
        }
        Ok(())
    }
}
