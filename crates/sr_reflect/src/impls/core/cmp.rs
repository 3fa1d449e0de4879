use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::cmp::Ordering);
impl_reflect_opaque!(::core::cmp::Reverse<T>);
