use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::alloc::vec::Vec<T>);
impl_reflect_opaque!(::alloc::collections::VecDeque<T>);
impl_reflect_opaque!(::alloc::collections::BTreeMap<K, V>);
impl_reflect_opaque!(::alloc::collections::BTreeSet<T>);
