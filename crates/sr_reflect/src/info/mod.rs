//! Compile-time metadata of reflected structs.
//!
//! ## Menu
//!
//! - [`FieldInfo`]: a single reflected field: name, index, declared type and kind.
//! - [`StructInfo`]: the ordered field list of a reflectable struct.
//! - [`ReflectKind`]: whether a type is walked into (`Struct`) or handed out whole (`Opaque`).
//!
//! All of them are `Copy` and built in `const` context by `#[derive(Reflect)]`,
//! no allocation or registration happens at runtime.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod struct_info;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldInfo;
pub use kind::ReflectKind;
pub use struct_info::StructInfo;
