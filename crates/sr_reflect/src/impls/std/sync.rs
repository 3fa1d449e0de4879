use crate::derive::impl_reflect_opaque;

// A locked `Mutex` or `RwLock` prints as `<locked>`, the walk never blocks.
impl_reflect_opaque!(::std::sync::Mutex<T>);
impl_reflect_opaque!(::std::sync::RwLock<T>);
impl_reflect_opaque!(::std::sync::OnceLock<T>);
