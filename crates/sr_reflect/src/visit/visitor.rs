use crate::Leaf;
use crate::info::FieldInfo;
use crate::visit::{FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// Visitor

/// Receives the leaves of a reflectable struct, in field order.
///
/// Driven by [`walk`](crate::visit::walk). For every reflected field:
///
/// - a leaf is passed to [`visit`](Visitor::visit) with its concrete type;
/// - a nested reflectable struct triggers [`enter`](Visitor::enter), the
///   walk of its own fields, then [`exit`](Visitor::exit).
///
/// `enter` and `exit` are never called for the object the walk starts from.
///
/// # Example
///
/// ```
/// use sr_reflect::{Leaf, derive::Reflect, info::FieldInfo};
/// use sr_reflect::visit::{self, FieldRef, Visitor};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// #[derive(Reflect)]
/// struct Line {
///     from: Point,
///     to: Point,
/// }
///
/// #[derive(Default)]
/// struct Sum {
///     total: f32,
///     depth: usize,
///     max_depth: usize,
/// }
///
/// impl Visitor for Sum {
///     fn visit<T: Leaf>(&mut self, field: FieldRef<'_, T>) {
///         if let Some(v) = field.erase().downcast_ref::<f32>() {
///             self.total += v;
///         }
///     }
///
///     fn enter(&mut self, _: &'static FieldInfo) {
///         self.depth += 1;
///         self.max_depth = self.max_depth.max(self.depth);
///     }
///
///     fn exit(&mut self, _: &'static FieldInfo) {
///         self.depth -= 1;
///     }
/// }
///
/// let line = Line {
///     from: Point { x: 1.0, y: 2.0 },
///     to: Point { x: 3.0, y: 4.0 },
/// };
///
/// let mut sum = Sum::default();
/// visit::walk(&mut sum, &line);
///
/// assert_eq!(sum.total, 10.0);
/// assert_eq!((sum.depth, sum.max_depth), (0, 1));
/// ```
pub trait Visitor {
    /// Called for every leaf field.
    fn visit<T: Leaf>(&mut self, field: FieldRef<'_, T>);

    /// Called before the fields of a nested reflectable struct are walked.
    #[inline]
    fn enter(&mut self, _info: &'static FieldInfo) {}

    /// Called after the fields of a nested reflectable struct are walked.
    #[inline]
    fn exit(&mut self, _info: &'static FieldInfo) {}
}

impl<V: Visitor> Visitor for &mut V {
    #[inline]
    fn visit<T: Leaf>(&mut self, field: FieldRef<'_, T>) {
        (**self).visit(field);
    }

    #[inline]
    fn enter(&mut self, info: &'static FieldInfo) {
        (**self).enter(info);
    }

    #[inline]
    fn exit(&mut self, info: &'static FieldInfo) {
        (**self).exit(info);
    }
}

// -----------------------------------------------------------------------------
// VisitorMut

/// Receives the leaves of a reflectable struct with exclusive access.
///
/// The mutable counterpart of [`Visitor`], driven by
/// [`walk_mut`](crate::visit::walk_mut). The call order is identical.
pub trait VisitorMut {
    /// Called for every leaf field.
    fn visit<T: Leaf>(&mut self, field: FieldMut<'_, T>);

    /// Called before the fields of a nested reflectable struct are walked.
    #[inline]
    fn enter(&mut self, _info: &'static FieldInfo) {}

    /// Called after the fields of a nested reflectable struct are walked.
    #[inline]
    fn exit(&mut self, _info: &'static FieldInfo) {}
}

impl<V: VisitorMut> VisitorMut for &mut V {
    #[inline]
    fn visit<T: Leaf>(&mut self, field: FieldMut<'_, T>) {
        (**self).visit(field);
    }

    #[inline]
    fn enter(&mut self, info: &'static FieldInfo) {
        (**self).enter(info);
    }

    #[inline]
    fn exit(&mut self, info: &'static FieldInfo) {
        (**self).exit(info);
    }
}
