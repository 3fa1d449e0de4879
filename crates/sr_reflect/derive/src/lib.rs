//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_reflect_opaque`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

/// Keep in sync with `sr_reflect::ops::MAX_FIELDS`.
const MAX_FIELDS: usize = 32;

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Compile-time Reflection Derivation
///
/// `#[derive(Reflect)]` on a struct with named fields implements:
///
/// - `Reflect`, with `KIND = ReflectKind::Struct`;
/// - `ops::Struct`, listing the reflected fields in order;
/// - `ops::Field<N>` for every reflected field, `N` being its index.
///
/// Every reflected field type must implement `Reflect` itself: either it is
/// a reflectable struct (and is walked recursively), or it is a leaf. Fields
/// marked `#[reflect(opaque)]` are the exception, see below.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
/// ```
///
/// A struct may reflect at most 32 fields, and at least one.
///
/// ## Skipping Fields
///
/// `#[reflect(skip)]` removes a field from reflection: it is not counted,
/// has no index and is never visited. Its type does not need to implement
/// `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Data {
///     foo: String,
///     #[reflect(skip)]
///     bar: Vec<i32>,
///     baz: Vec<f32>,
/// }
/// // `foo` is field 0, `baz` is field 1.
/// ```
///
/// This attribute can only be applied to fields.
///
/// ## Opaque Fields
///
/// `#[reflect(opaque)]` hands a field to visitors as a leaf, whatever its
/// type. The type only needs `Debug + 'static`, so foreign types without a
/// `Reflect` implementation can be reflected, and a reflectable struct can
/// be kept from being walked into.
///
/// ```rust, ignore
/// #[derive(Debug)]
/// struct Celsius(f32); // no `Reflect`
///
/// #[derive(Reflect)]
/// struct Sensor {
///     #[reflect(opaque)]
///     reading: Celsius,
///     id: u32,
/// }
/// ```
///
/// Not to be confused with the type level `#[reflect(Opaque)]` below.
/// `opaque` and `skip` cannot be combined.
///
/// ## Explicit Field List
///
/// `#[reflect(fields(a, b, ...))]` reflects exactly the listed fields, in the
/// listed order. Unlisted fields are skipped.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(fields(baz, foo))]
/// struct Data {
///     foo: String,
///     bar: Vec<i32>,
///     baz: Vec<f32>,
/// }
/// // `baz` is field 0, `foo` is field 1.
/// ```
///
/// Every listed name must be a field of the struct and appear once. It
/// cannot be combined with `#[reflect(skip)]`.
///
/// This attribute can only be applied at the type level.
///
/// ## Opaque Types
///
/// `#[reflect(Opaque)]` turns the type into a leaf: the macro does not look
/// at its content, and visitors receive the whole value. The type must
/// implement `Debug`. This is also the only way to derive `Reflect` for
/// tuple structs, unit structs, enums and unions.
///
/// ```rust, ignore
/// #[derive(Reflect, Debug)]
/// #[reflect(Opaque)]
/// enum Mode {
///     Fast,
///     Slow,
/// }
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Generics
///
/// Generic structs are supported. The implementations require `Self: 'static`
/// and `Reflect` for every reflected field type that mentions a type
/// parameter.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast).into()
}

/// Implements `Reflect` for foreign types, as leaves.
///
/// Syntax: `ident` for primitives, or `::full::path<Generics> where ...`.
///
/// The type must implement `Debug`, and be `'static`.
///
/// ## Example
///
/// ```rust, ignore
/// impl_reflect_opaque!(u64);
/// impl_reflect_opaque!(::alloc::string::String);
/// impl_reflect_opaque!(::alloc::vec::Vec<T>);
/// impl_reflect_opaque!(::alloc::boxed::Box<T: ?Sized>);
/// ```
///
/// Paths starting without `::` are treated as primitive types.
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, ReflectOpaqueParser, TypeAttributes, TypeParser};

    let ReflectOpaqueParser {
        type_ident,
        type_path,
        generics,
    } = parse_macro_input!(input with ReflectOpaqueParser::parse);

    let parser = TypeParser::new_foreign(&type_ident, &type_path, &generics);

    let meta = ReflectMeta::new(TypeAttributes::opaque(), parser);

    let assert_tokens = meta.assert_ident_tokens();
    let reflect_impls = impls::impl_opaque(&meta);

    quote! {
        const _: () = {
            #assert_tokens
            #reflect_impls
        };
    }
    .into()
}
