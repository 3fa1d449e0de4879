use crate::derive::impl_reflect_opaque;

// Interior mutability does not make a field walkable: the content is only
// reachable through the `Debug` output of the cell.
impl_reflect_opaque!(::core::cell::Cell<T>);
impl_reflect_opaque!(::core::cell::RefCell<T>);
impl_reflect_opaque!(::core::cell::OnceCell<T>);
