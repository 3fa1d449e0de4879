use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(bool);
impl_reflect_opaque!(char);

impl_reflect_opaque!(u8);
impl_reflect_opaque!(u16);
impl_reflect_opaque!(u32);
impl_reflect_opaque!(u64);
impl_reflect_opaque!(u128);
impl_reflect_opaque!(usize);

impl_reflect_opaque!(i8);
impl_reflect_opaque!(i16);
impl_reflect_opaque!(i32);
impl_reflect_opaque!(i64);
impl_reflect_opaque!(i128);
impl_reflect_opaque!(isize);

impl_reflect_opaque!(f32);
impl_reflect_opaque!(f64);
