use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::std::collections::HashMap<K, V, S>);
impl_reflect_opaque!(::std::collections::HashSet<T, S>);
