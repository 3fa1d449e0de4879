use core::any::Any;

use crate::info::{FieldInfo, ReflectKind};
use crate::visit::{Visitor, VisitorMut};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of [`sr_reflect`]: a type that may appear as a
/// reflected field.
///
/// Every field named by `#[derive(Reflect)]` must have a type implementing
/// this trait. The implementation decides what the traversal engine does
/// when it reaches such a field:
///
/// - reflectable structs ([`ReflectKind::Struct`]) call
///   [`Visitor::enter`], walk their own fields, then call [`Visitor::exit`];
/// - leaves ([`ReflectKind::Opaque`]) call [`Visitor::visit`] with
///   themselves.
///
/// All dispatch is static: the engine calls `walk` on the *declared* type of
/// each field, so no runtime type check is involved.
///
/// # Implementing
///
/// Do not implement this trait by hand. Use:
///
/// - `#[derive(Reflect)]` for structs with named fields;
/// - `#[derive(Reflect)]` with `#[reflect(Opaque)]` for own leaf types;
/// - [`impl_reflect_opaque!`] for foreign leaf types.
///
/// ```
/// use sr_reflect::{Reflect, derive::Reflect, info::ReflectKind};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// #[derive(Reflect, Debug)]
/// #[reflect(Opaque)]
/// struct Rgb(u8, u8, u8);
///
/// assert_eq!(<Point as Reflect>::KIND, ReflectKind::Struct);
/// assert_eq!(<Rgb as Reflect>::KIND, ReflectKind::Opaque);
/// assert_eq!(<f32 as Reflect>::KIND, ReflectKind::Opaque);
/// ```
///
/// [`sr_reflect`]: crate
/// [`impl_reflect_opaque!`]: crate::derive::impl_reflect_opaque
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a reflected field",
    label = "missing `Reflect` implementation",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`",
    note = "leaf types need `#[reflect(Opaque)]` and a `Debug` implementation",
    note = "a foreign type can be kept as a leaf with `#[reflect(opaque)]` on the field"
)]
pub trait Reflect: Any + Sized {
    /// How the traversal engine treats a field of this type.
    const KIND: ReflectKind;

    /// Walk `self`, reached through the field described by `info`.
    fn walk<V: Visitor>(&self, info: &'static FieldInfo, visitor: &mut V);

    /// Walk `self` mutably, reached through the field described by `info`.
    fn walk_mut<V: VisitorMut>(&mut self, info: &'static FieldInfo, visitor: &mut V);
}
