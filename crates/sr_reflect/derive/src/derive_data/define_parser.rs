use syn::{Generics, Ident, Path, parse::ParseStream};

// -----------------------------------------------------------------------------
// Opaque Parser

/// The input of [`impl_reflect_opaque`](crate::impl_reflect_opaque).
pub(crate) struct ReflectOpaqueParser {
    pub type_ident: Ident,
    pub type_path: Path,
    pub generics: Generics,
}

impl ReflectOpaqueParser {
    /// Format: `::module::path::Ident<Generics> where ...` or `primitive`.
    pub fn parse(input: ParseStream) -> syn::Result<Self> {
        let type_path = Path::parse_mod_style(input)?;

        let type_ident = match type_path.segments.last() {
            Some(segment) => segment.ident.clone(),
            None => return Err(input.error("expected a type path")),
        };

        let mut generics = input.parse::<Generics>()?;
        generics.where_clause = input.parse()?;

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the type"));
        }

        Ok(Self {
            type_ident,
            type_path,
            generics,
        })
    }
}
