use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::ops::Range<T>);
impl_reflect_opaque!(::core::ops::RangeInclusive<T>);
impl_reflect_opaque!(::core::ops::RangeFrom<T>);
impl_reflect_opaque!(::core::ops::RangeTo<T>);
impl_reflect_opaque!(::core::ops::RangeToInclusive<T>);
impl_reflect_opaque!(::core::ops::RangeFull);
