use proc_macro2::Span;
use syn::{Attribute, Ident, Token, parse::ParseStream, spanned::Spanned};

/// Field level attributes.
///
/// - `#[reflect(skip)]`
/// - `#[reflect(opaque)]`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// The span of the `skip` flag, if present.
    pub skip: Option<Span>,
    /// The span of the `opaque` flag, if present.
    pub opaque: Option<Span>,
    /// The span of the first `#[reflect(...)]` on this field.
    pub first_span: Option<Span>,
}

impl FieldAttributes {
    /// Parse every `#[reflect(...)]` of a field.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        this.first_span = attrs
            .iter()
            .find(|attr| attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME))
            .map(Spanned::span);
        super::for_each_reflect_attr(attrs, |input| this.parse_stream(input))?;

        if let (Some(_), Some(span)) = (this.skip, this.opaque) {
            return Err(syn::Error::new(
                span,
                "`opaque` has no effect on a skipped field",
            ));
        }
        Ok(this)
    }

    fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            if ident == "skip" {
                self.skip = Some(ident.span());
            } else if ident == "opaque" {
                self.opaque = Some(ident.span());
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format_args!("unknown field attribute `{ident}`, expected `skip` or `opaque`"),
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }
}
