use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::std::time::Instant);
impl_reflect_opaque!(::std::time::SystemTime);
