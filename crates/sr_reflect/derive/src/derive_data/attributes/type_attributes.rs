use proc_macro2::Span;
use syn::{Attribute, Ident, Token, parenthesized, parse::ParseStream, punctuated::Punctuated};

/// An explicit `#[reflect(fields(a, b, ...))]` list.
#[derive(Debug)]
pub(crate) struct FieldList {
    pub span: Span,
    pub names: Vec<Ident>,
}

/// Type level attributes.
///
/// - `#[reflect(Opaque)]`
/// - `#[reflect(fields(a, b, ...))]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// The span of the `Opaque` flag, if present.
    pub is_opaque: Option<Span>,
    /// The explicit field list, if present.
    pub fields: Option<FieldList>,
}

impl TypeAttributes {
    /// Attributes implied by `impl_reflect_opaque!`.
    #[inline]
    pub fn opaque() -> Self {
        Self {
            is_opaque: Some(Span::call_site()),
            fields: None,
        }
    }

    /// Parse every `#[reflect(...)]` of a type.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        super::for_each_reflect_attr(attrs, |input| this.parse_stream(input))?;
        this.validity()?;
        Ok(this)
    }

    /// Parse the content of one `#[reflect(...)]`, comma separated.
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            if ident == "Opaque" {
                self.is_opaque = Some(ident.span());
            } else if ident == "fields" {
                if self.fields.is_some() {
                    return Err(syn::Error::new(
                        ident.span(),
                        "`fields(...)` may only be specified once",
                    ));
                }
                let content;
                parenthesized!(content in input);
                let names = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
                self.fields = Some(FieldList {
                    span: ident.span(),
                    names: names.into_iter().collect(),
                });
            } else if ident == "skip" {
                return Err(syn::Error::new(
                    ident.span(),
                    "`skip` can only be applied to fields",
                ));
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format_args!("unknown attribute `{ident}`, expected `Opaque` or `fields(...)`"),
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }

    /// Rejects combinations that cannot be honored.
    pub fn validity(&self) -> syn::Result<()> {
        if let (Some(_), Some(list)) = (self.is_opaque, &self.fields) {
            return Err(syn::Error::new(
                list.span,
                "`fields(...)` cannot be combined with `Opaque`",
            ));
        }
        Ok(())
    }
}
