use core::fmt::Debug;

use crate::Reflect;
use crate::impls::{walk_opaque, walk_opaque_mut};
use crate::info::{FieldInfo, ReflectKind};
use crate::visit::{Visitor, VisitorMut};

// Arrays are leaves: their elements are not fields.
impl<T: Debug + 'static, const N: usize> Reflect for [T; N] {
    const KIND: ReflectKind = ReflectKind::Opaque;

    #[inline]
    fn walk<V: Visitor>(&self, info: &'static FieldInfo, visitor: &mut V) {
        walk_opaque(self, info, visitor);
    }

    #[inline]
    fn walk_mut<V: VisitorMut>(&mut self, info: &'static FieldInfo, visitor: &mut V) {
        walk_opaque_mut(self, info, visitor);
    }
}
