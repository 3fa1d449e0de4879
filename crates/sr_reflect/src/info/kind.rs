use core::fmt;

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kind" of a reflect-capable type.
///
/// The kind decides how the traversal engine treats a field of this type:
///
/// - [`Struct`](ReflectKind::Struct): the field is a reflectable struct, the
///   engine enters it and walks its own fields.
/// - [`Opaque`](ReflectKind::Opaque): the field is a leaf, the engine hands it
///   to the visitor as a whole.
///
/// Obtained through [`Reflect::KIND`] or [`FieldInfo::kind`].
///
/// [`Reflect::KIND`]: crate::Reflect::KIND
/// [`FieldInfo::kind`]: crate::info::FieldInfo::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for [`ReflectKind::Struct`].
    #[inline]
    pub const fn is_struct(self) -> bool {
        matches!(self, Self::Struct)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}
