use quote::ToTokens;
use syn::{GenericParam, Generics, Ident, Path, punctuated::Punctuated};

/// A container used to parse the type path and generic parameters.
///
/// The container will only be a part of [`ReflectMeta`](crate::derive_data::ReflectMeta),
/// so no interfaces will be exposed.
pub(crate) enum TypeParser<'a> {
    /// Types without a crate/module that can be named from any scope (e.g. `bool`).
    Primitive(&'a Ident),
    /// The type can be reached with just its ident, `#[derive(Reflect)]`.
    Local {
        ident: &'a Ident,
        generics: &'a Generics,
    },
    /// The user provides the complete path, using `::my_crate::foo::Bar` syntax.
    Foreign {
        path: &'a Path,
        generics: &'a Generics,
    },
}

impl core::fmt::Debug for TypeParser<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.real_ident(), f)
    }
}

impl<'a> TypeParser<'a> {
    /// See [`ReflectDerive::from_input`](crate::derive_data::ReflectDerive::from_input)
    #[inline]
    pub(crate) fn new_local(ident: &'a Ident, generics: &'a Generics) -> TypeParser<'a> {
        TypeParser::Local { ident, generics }
    }

    /// See [`impl_reflect_opaque`](crate::impl_reflect_opaque)
    pub(crate) fn new_foreign(
        ident: &'a Ident,
        path: &'a Path,
        generics: &'a Generics,
    ) -> TypeParser<'a> {
        if path.leading_colon.is_none() {
            TypeParser::Primitive(ident)
        } else {
            TypeParser::Foreign { path, generics }
        }
    }

    pub(super) fn generics(&self) -> &'a Generics {
        // Use a constant because we need to return a reference of at least 'a.
        const EMPTY_GENERICS: &Generics = &Generics {
            gt_token: None,
            lt_token: None,
            where_clause: None,
            params: Punctuated::new(),
        };

        match self {
            Self::Local { generics, .. } | Self::Foreign { generics, .. } => generics,
            Self::Primitive(_) => EMPTY_GENERICS,
        }
    }

    /// Whether the implementation is generic, lifetimes included.
    pub(super) fn impl_with_generic(&self) -> bool {
        !self.generics().params.is_empty()
    }

    /// Whether there are type parameters, which may need extra bounds.
    pub(super) fn has_type_params(&self) -> bool {
        self.generics()
            .params
            .iter()
            .any(|param| matches!(param, GenericParam::Type(_)))
    }

    /// This name is used in `impl ... for #real_ident {...}`.
    pub(super) fn real_ident(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Local { ident, .. } | Self::Primitive(ident) => ident.to_token_stream(),
            Self::Foreign { path, .. } => path.to_token_stream(),
        }
    }

    #[inline]
    pub(super) fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }
}
