use crate::derive::impl_reflect_opaque;

// `Option` and `Result` are values, not structs: they are never walked into,
// even when the payload is reflectable.
impl_reflect_opaque!(::core::option::Option<T>);
impl_reflect_opaque!(::core::result::Result<T, E>);
