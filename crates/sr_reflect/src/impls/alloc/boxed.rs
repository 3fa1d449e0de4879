use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::alloc::boxed::Box<T: ?Sized>);
impl_reflect_opaque!(::alloc::rc::Rc<T: ?Sized>);
impl_reflect_opaque!(::alloc::sync::Arc<T: ?Sized>);
