//! The traversal engine.
//!
//! ## Menu
//!
//! - [`walk`] / [`walk_mut`]: drive a [`Visitor`] / [`VisitorMut`] over a reflectable struct.
//! - [`visit`] / [`visit_mut`]: call a closure for every leaf.
//! - [`visit_with`] / [`visit_mut_with`]: same, plus `enter`/`exit` hooks for nested structs.
//! - [`FieldRef`] / [`FieldMut`]: the leaf descriptors handed to visitors.
//!
//! ## Order
//!
//! Fields are walked in ascending index order. When a field is itself a
//! reflectable struct, the engine calls `enter`, walks that struct's fields,
//! then calls `exit`; the leaf callback is never called for the nested
//! struct itself. `enter`/`exit` pairs are therefore properly nested, and
//! never emitted for the object the walk starts from.
//!
//! ```text
//! Points { pt1: Point { x, y }, pt2: Point { x, y } }
//!
//! enter(pt1) leaf(x) leaf(y) exit(pt1) enter(pt2) leaf(x) leaf(y) exit(pt2)
//! ```
//!
//! Only types implementing [`Struct`] can be walked:
//!
//! ```compile_fail
//! struct Plain {
//!     x: i32,
//! }
//!
//! sr_reflect::visit::visit(&Plain { x: 1 }, |_| {});
//! ```

// -----------------------------------------------------------------------------
// Modules

mod closure;
mod field_ref;
mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use field_ref::{FieldMut, FieldRef};
pub use visitor::{Visitor, VisitorMut};

use crate::Leaf;
use crate::info::FieldInfo;
use crate::ops::Struct;

use closure::{FnVisitor, FnVisitorMut};

// -----------------------------------------------------------------------------
// Entry points

/// Drive `visitor` over the reflected fields of `object`.
///
/// See [`Visitor`] for an example.
#[inline]
pub fn walk<T: Struct, V: Visitor>(visitor: &mut V, object: &T) {
    object.visit_fields(visitor);
}

/// Drive `visitor` over the reflected fields of `object`, with exclusive access.
#[inline]
pub fn walk_mut<T: Struct, V: VisitorMut>(visitor: &mut V, object: &mut T) {
    object.visit_fields_mut(visitor);
}

/// Call `callback` for every leaf field of `object`, recursing into nested
/// reflectable structs.
///
/// # Example
///
/// ```
/// use sr_reflect::{derive::Reflect, visit};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let mut names = Vec::new();
/// visit::visit(&Point { x: 0.0, y: 1.0 }, |field| {
///     names.push(format!("{} = {:?}", field.name(), field.get()));
/// });
///
/// assert_eq!(names, ["x = 0.0", "y = 1.0"]);
/// ```
#[inline]
pub fn visit<T, F>(object: &T, callback: F)
where
    T: Struct,
    F: FnMut(FieldRef<'_, dyn Leaf>),
{
    visit_with(object, callback, |_| {}, |_| {});
}

/// Like [`visit`], and calls `enter` / `exit` around every nested
/// reflectable struct.
///
/// # Example
///
/// ```
/// use sr_reflect::{derive::Reflect, visit};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// #[derive(Reflect)]
/// struct Points {
///     pt1: Point,
///     pt2: Point,
///     pt3: Point,
/// }
///
/// let points = Points {
///     pt1: Point { x: 1.0, y: 2.0 },
///     pt2: Point { x: 3.0, y: 4.0 },
///     pt3: Point { x: 5.0, y: 6.0 },
/// };
///
/// let events = core::cell::RefCell::new(Vec::new());
/// visit::visit_with(
///     &points,
///     |field| events.borrow_mut().push(format!("{:?}", field.get())),
///     |info| events.borrow_mut().push(format!("enter {}", info.name())),
///     |info| events.borrow_mut().push(format!("exit {}", info.name())),
/// );
///
/// assert_eq!(events.into_inner(), [
///     "enter pt1", "1.0", "2.0", "exit pt1",
///     "enter pt2", "3.0", "4.0", "exit pt2",
///     "enter pt3", "5.0", "6.0", "exit pt3",
/// ]);
/// ```
#[inline]
pub fn visit_with<T, F, En, Ex>(object: &T, callback: F, enter: En, exit: Ex)
where
    T: Struct,
    F: FnMut(FieldRef<'_, dyn Leaf>),
    En: FnMut(&'static FieldInfo),
    Ex: FnMut(&'static FieldInfo),
{
    let mut visitor = FnVisitor {
        callback,
        enter,
        exit,
    };
    walk(&mut visitor, object);
}

/// Call `callback` for every leaf field of `object` with exclusive access,
/// recursing into nested reflectable structs.
///
/// # Example
///
/// ```
/// use sr_reflect::{derive::Reflect, visit};
///
/// #[derive(Reflect)]
/// struct Stats {
///     hp: i32,
///     name: String,
///     mp: i32,
/// }
///
/// let mut stats = Stats { hp: 1, name: "orc".into(), mp: 2 };
///
/// visit::visit_mut(&mut stats, |mut field| {
///     if let Some(v) = field.downcast_mut::<i32>() {
///         *v *= 10;
///     }
/// });
///
/// assert_eq!((stats.hp, stats.mp), (10, 20));
/// assert_eq!(stats.name, "orc");
/// ```
#[inline]
pub fn visit_mut<T, F>(object: &mut T, callback: F)
where
    T: Struct,
    F: FnMut(FieldMut<'_, dyn Leaf>),
{
    visit_mut_with(object, callback, |_| {}, |_| {});
}

/// Like [`visit_mut`], and calls `enter` / `exit` around every nested
/// reflectable struct.
#[inline]
pub fn visit_mut_with<T, F, En, Ex>(object: &mut T, callback: F, enter: En, exit: Ex)
where
    T: Struct,
    F: FnMut(FieldMut<'_, dyn Leaf>),
    En: FnMut(&'static FieldInfo),
    Ex: FnMut(&'static FieldInfo),
{
    let mut visitor = FnVisitorMut {
        callback,
        enter,
        exit,
    };
    walk_mut(&mut visitor, object);
}

#[cfg(test)]
mod tests;
