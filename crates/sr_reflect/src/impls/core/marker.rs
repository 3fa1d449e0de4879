use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::marker::PhantomData<T: ?Sized>);
