// -----------------------------------------------------------------------------
// Modules

mod leaf;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use leaf::Leaf;
pub use reflect::Reflect;
