use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, ImplGenerics, Path, Type, TypeGenerics};

use super::{TypeAttributes, TypeParser};

pub(crate) struct ReflectMeta<'a> {
    sr_reflect_path: Path,
    attrs: TypeAttributes,
    type_parser: TypeParser<'a>,
    // Reflected field types, deduplicated, in first-seen order.
    active_types: Vec<Type>,
    // Types of `#[reflect(opaque)]` fields, same rules.
    opaque_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("sr_reflect_path", &self.sr_reflect_path.to_token_stream())
            .field("type_parser", &self.type_parser)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_parser: TypeParser<'a>) -> Self {
        Self {
            attrs,
            type_parser,
            sr_reflect_path: crate::path::sr_reflect(),
            active_types: Vec::new(),
            opaque_types: Vec::new(),
        }
    }

    /// Used for [`ReflectStruct`](crate::derive_data::ReflectStruct),
    /// set the active field types during initialization.
    ///
    /// Each item is a field type and whether the field is `#[reflect(opaque)]`.
    pub(super) fn set_active_types(&mut self, types: impl IntoIterator<Item = (Type, bool)>) {
        for (ty, is_opaque) in types {
            let list = if is_opaque {
                &mut self.opaque_types
            } else {
                &mut self.active_types
            };
            if !list.contains(&ty) {
                list.push(ty);
            }
        }
    }

    #[inline]
    pub fn sr_reflect_path(&self) -> &Path {
        &self.sr_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.type_parser.generics()
    }

    #[inline]
    pub fn real_ident(&self) -> TokenStream {
        self.type_parser.real_ident()
    }

    /// For `impl_reflect_opaque!(u8)`, ensure the ident names a type.
    ///
    /// Only checked in debug builds.
    #[inline]
    pub fn assert_ident_tokens(&self) -> TokenStream {
        #[cfg(debug_assertions)]
        if self.type_parser.is_primitive() {
            let ident = self.real_ident();
            return quote! {
                mod __assert_primitive_ident {
                    type AssertIdentValidity = #ident;
                }
            };
        }
        crate::utils::empty()
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// ## Type Itself
    ///
    /// `Reflect` requires `Any`, so a generic type is labeled with `'static`.
    /// Opaque types additionally require `Debug`, they are handed out as leaves.
    ///
    /// ## Field Type (with type params)
    ///
    /// Every reflected field type mentioning a type parameter requires
    /// `Reflect`. Other field types are checked where they are used.
    pub fn split_generics(
        &self,
        add_field_bounds: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::DebugFP;

        let generics = self.generics();

        let mut generic_where_clause = quote! { where };

        if self.attrs.is_opaque.is_some() {
            generic_where_clause.extend(quote! { Self: #DebugFP + 'static, });
        } else if self.type_parser.impl_with_generic() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        if add_field_bounds {
            generic_where_clause.extend(self.field_type_predicates());
        }

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn field_type_predicates(&self) -> TokenStream {
        use crate::path::fp::DebugFP;

        if !self.type_parser.has_type_params() {
            return crate::utils::empty();
        }

        let type_param_idents = self
            .generics()
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect::<Vec<syn::Ident>>();

        let reflect_ = crate::path::reflect_(&self.sr_reflect_path);

        // Do any of the identifiers in `idents` appear in `token_stream`?
        fn is_any_ident_in_token_stream(idents: &[syn::Ident], token_stream: TokenStream) -> bool {
            for token_tree in token_stream {
                match token_tree {
                    proc_macro2::TokenTree::Ident(ident) => {
                        if idents.contains(&ident) {
                            return true;
                        }
                    }
                    proc_macro2::TokenTree::Group(group) => {
                        if is_any_ident_in_token_stream(idents, group.stream()) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
            false
        }

        let is_generic =
            |ty: &&Type| is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream());

        let predicates = self.active_types.iter().filter(is_generic);
        let opaque_predicates = self.opaque_types.iter().filter(is_generic);

        let debug_fp = DebugFP;

        quote! {
            #(#predicates: #reflect_,)*
            #(#opaque_predicates: #debug_fp + 'static,)*
        }
    }
}
