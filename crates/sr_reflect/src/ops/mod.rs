//! Provide interfaces for accessing reflected fields.
//!
//! ## Menu
//!
//! - [`Struct`]: implemented by every reflectable struct; field count, field list and traversal.
//! - [`Field<N>`]: implemented once per reflected field index; declared type and accessor.
//! - [`Member`]: an instance-independent accessor pair, the "pointer to member" of a field.
//! - [`FieldData`]: a field descriptor bound to one object, shared or exclusive.
//!
//! All of them are implemented by `#[derive(Reflect)]`.
//!
//! [`Field<N>`]: Field

// -----------------------------------------------------------------------------
// Modules

mod field_data;
mod field_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use field_data::{Binding, FieldData};
pub use field_ops::{Field, Member};
pub use struct_ops::{MAX_FIELDS, Struct};
