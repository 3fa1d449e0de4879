use proc_macro2::Span;
use syn::{Field, Ident, Type, spanned::Spanned};

use super::{FieldAttributes, FieldList, ReflectMeta};

/// A field of a `struct T { ... }`, with its parsed attributes.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The `#[reflect(...)]` attributes of the field.
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    #[inline]
    pub fn ident(&self) -> &Ident {
        self.data
            .ident
            .as_ref()
            .expect("Struct should not have unnamed fields.")
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }

    /// `#[reflect(opaque)]`: handed to visitors as a leaf, whatever its type.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.attrs.opaque.is_some()
    }
}

/// The reflected part of a struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
    /// Positions in `fields` of the reflected fields, in reflection order.
    order: Vec<usize>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(
        mut meta: ReflectMeta<'a>,
        fields: Vec<StructField<'a>>,
        span: Span,
    ) -> syn::Result<Self> {
        let order = match &meta.attrs().fields {
            Some(list) => Self::listed_order(&fields, list)?,
            None => fields
                .iter()
                .enumerate()
                .filter(|(_, field)| field.attrs.skip.is_none())
                .map(|(index, _)| index)
                .collect(),
        };

        if order.is_empty() {
            return Err(syn::Error::new(
                span,
                "a reflectable struct needs at least one reflected field",
            ));
        }

        if order.len() > crate::MAX_FIELDS {
            let extra = &fields[order[crate::MAX_FIELDS]];
            return Err(syn::Error::new(
                extra.data.span(),
                format_args!(
                    "reflection does not support more than {} fields",
                    crate::MAX_FIELDS
                ),
            ));
        }

        meta.set_active_types(order.iter().map(|&index| {
            let field = &fields[index];
            (field.ty().clone(), field.is_opaque())
        }));

        Ok(Self {
            meta,
            fields,
            order,
        })
    }

    /// Resolves a `fields(...)` list into positions.
    fn listed_order(fields: &[StructField], list: &FieldList) -> syn::Result<Vec<usize>> {
        let mut errors: Option<syn::Error> = None;
        let mut push_error = |err: syn::Error| match &mut errors {
            Some(errors) => errors.combine(err),
            None => errors = Some(err),
        };

        for field in fields {
            if let Some(span) = field.attrs.skip {
                push_error(syn::Error::new(
                    span,
                    "`skip` cannot be combined with an explicit `fields(...)` list",
                ));
            }
        }

        let mut order = Vec::with_capacity(list.names.len());
        for name in &list.names {
            match fields.iter().position(|field| field.ident() == name) {
                Some(index) if order.contains(&index) => push_error(syn::Error::new(
                    name.span(),
                    format_args!("field `{name}` is listed more than once"),
                )),
                Some(index) => order.push(index),
                None => push_error(syn::Error::new(
                    name.span(),
                    format_args!("no field named `{name}`"),
                )),
            }
        }

        match errors {
            Some(err) => Err(err),
            None => Ok(order),
        }
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// The reflected fields, in reflection order.
    ///
    /// The position in this iterator is the field index.
    pub fn active_fields(&self) -> impl ExactSizeIterator<Item = &StructField<'a>> {
        self.order.iter().map(|&index| &self.fields[index])
    }
}
