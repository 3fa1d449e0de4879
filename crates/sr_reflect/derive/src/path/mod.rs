//! This independent module is used to provide the required path.
//! So as to minimize changes when the `sr_reflect` structure is modified.
//!
//! The only special feature is the path of sr_reflect itself,
//! See [`sr_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `sr_reflect` crate.
///
/// Not all crates can access the reflection crate itself through `sr_reflect`,
/// we have to scan the builder's `Cargo.toml`.
///
/// 1. For crates that depend on `sr_reflect`, `::sr_reflect` is returned here.
/// 2. For crates that depend on `sr_core`, `::sr_core::reflect` is returned here.
/// 3. For crates that depend on `sr`, `::sr::reflect` is returned here.
/// 4. For other situations, `::sr_reflect` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is mainly obtained through parameter passing rather than reacquiring.
pub(crate) fn sr_reflect() -> syn::Path {
    sr_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sr_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn reflect_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn struct_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn field_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::ops::Field
    }
}

#[inline(always)]
pub(crate) fn member_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::ops::Member
    }
}

#[inline(always)]
pub(crate) fn field_info_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn visitor_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::visit::Visitor
    }
}

#[inline(always)]
pub(crate) fn visitor_mut_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::visit::VisitorMut
    }
}

#[inline(always)]
pub(crate) fn impls_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::impls
    }
}
