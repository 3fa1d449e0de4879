use crate::Reflect;
use crate::derive::impl_reflect_opaque;
use crate::impls::{walk_opaque, walk_opaque_mut};
use crate::info::{FieldInfo, ReflectKind};
use crate::visit::{Visitor, VisitorMut};

impl_reflect_opaque!(::alloc::string::String);

impl Reflect for &'static str {
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
