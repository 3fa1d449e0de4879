crate::derive::impl_reflect_opaque!(::core::any::TypeId);
