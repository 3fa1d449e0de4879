use alloc::borrow::Cow;

use crate::Reflect;
use crate::impls::{walk_opaque, walk_opaque_mut};
use crate::info::{FieldInfo, ReflectKind};
use crate::visit::{Visitor, VisitorMut};

impl Reflect for Cow<'static, str> {
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
