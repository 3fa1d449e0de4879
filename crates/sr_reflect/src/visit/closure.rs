use crate::Leaf;
use crate::info::FieldInfo;
use crate::visit::{FieldMut, FieldRef, Visitor, VisitorMut};

/// Adapts a leaf closure and two hooks into a [`Visitor`].
pub(super) struct FnVisitor<F, En, Ex> {
    pub callback: F,
    pub enter: En,
    pub exit: Ex,
}

impl<F, En, Ex> Visitor for FnVisitor<F, En, Ex>
where
    F: FnMut(FieldRef<'_, dyn Leaf>),
    En: FnMut(&'static FieldInfo),
    Ex: FnMut(&'static FieldInfo),
{
    #[inline]
    fn visit<T: Leaf>(&mut self, field: FieldRef<'_, T>) {
        (self.callback)(field.erase());
    }

    #[inline]
    fn enter(&mut self, info: &'static FieldInfo) {
        (self.enter)(info);
    }

    #[inline]
    fn exit(&mut self, info: &'static FieldInfo) {
        (self.exit)(info);
    }
}

/// Adapts a leaf closure and two hooks into a [`VisitorMut`].
pub(super) struct FnVisitorMut<F, En, Ex> {
    pub callback: F,
    pub enter: En,
    pub exit: Ex,
}

impl<F, En, Ex> VisitorMut for FnVisitorMut<F, En, Ex>
where
    F: FnMut(FieldMut<'_, dyn Leaf>),
    En: FnMut(&'static FieldInfo),
    Ex: FnMut(&'static FieldInfo),
{
    #[inline]
    fn visit<T: Leaf>(&mut self, field: FieldMut<'_, T>) {
        (self.callback)(field.erase());
    }

    #[inline]
    fn enter(&mut self, info: &'static FieldInfo) {
        (self.enter)(info);
    }

    #[inline]
    fn exit(&mut self, info: &'static FieldInfo) {
        (self.exit)(info);
    }
}
