//! Tuples with 12 or fewer elements are leaves.

use core::fmt::Debug;

use crate::Reflect;
use crate::impls::{walk_opaque, walk_opaque_mut};
use crate::info::{FieldInfo, ReflectKind};
use crate::visit::{Visitor, VisitorMut};

macro_rules! impl_reflect_tuple {
    ($($param:ident),*) => {
        impl<$($param: Debug + 'static),*> Reflect for ($($param,)*) {
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
    };
}

macro_rules! impl_reflect_tuples {
    () => {
        impl_reflect_tuple!();
    };
    ($head:ident $(, $tail:ident)*) => {
        impl_reflect_tuple!($head $(, $tail)*);
        impl_reflect_tuples!($($tail),*);
    };
}

impl_reflect_tuples!(P11, P10, P9, P8, P7, P6, P5, P4, P3, P2, P1, P0);
