//! Full paths of `core` items used by generated code.

pub(crate) use sr_macro_utils::full_path::DebugFP;
