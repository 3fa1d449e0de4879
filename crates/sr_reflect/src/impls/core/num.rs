use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::num::NonZeroI128);
impl_reflect_opaque!(::core::num::NonZeroU128);
impl_reflect_opaque!(::core::num::NonZeroIsize);
impl_reflect_opaque!(::core::num::NonZeroUsize);
impl_reflect_opaque!(::core::num::NonZeroI64);
impl_reflect_opaque!(::core::num::NonZeroU64);
impl_reflect_opaque!(::core::num::NonZeroU32);
impl_reflect_opaque!(::core::num::NonZeroI32);
impl_reflect_opaque!(::core::num::NonZeroI16);
impl_reflect_opaque!(::core::num::NonZeroU16);
impl_reflect_opaque!(::core::num::NonZeroU8);
impl_reflect_opaque!(::core::num::NonZeroI8);
impl_reflect_opaque!(::core::num::Wrapping<T>);
impl_reflect_opaque!(::core::num::Saturating<T>);
