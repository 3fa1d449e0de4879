use core::any::{Any, TypeId, type_name};
use core::fmt;

use crate::Reflect;
use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a reflected (named) field.
///
/// # Examples
///
/// ```
/// use sr_reflect::{derive::Reflect, info::ReflectKind, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     field_a: f32,
///     field_b: String,
/// }
///
/// let info = &Foo::FIELDS[1];
///
/// assert!(info.type_is::<String>());
/// assert_eq!(info.name(), "field_b");
/// assert_eq!(info.index(), 1);
/// assert_eq!(info.kind(), ReflectKind::Opaque);
/// ```
#[derive(Clone, Copy)]
pub struct FieldInfo {
    name: &'static str,
    index: usize,
    kind: ReflectKind,
    // `TypeId::of` and `type_name` are not `const` yet, store the functions instead.
    ty_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the field `name` at `index`, declared with type `T`.
    #[inline]
    pub const fn new<T: Reflect>(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            kind: T::KIND,
            ty_id: TypeId::of::<T>,
            type_name: type_name::<T>,
        }
    }

    /// Creates a new [`FieldInfo`] for a `#[reflect(opaque)]` field: the kind is
    /// always [`ReflectKind::Opaque`], and `T` does not need to implement [`Reflect`].
    #[inline]
    pub const fn new_opaque<T: Any>(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            kind: ReflectKind::Opaque,
            ty_id: TypeId::of::<T>,
            type_name: type_name::<T>,
        }
    }

    /// Returns the field name, as written in the struct definition.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the position of this field among the reflected fields.
    ///
    /// This is not the position in the struct definition when some fields are skipped.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the [`ReflectKind`] of the declared type.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        self.kind
    }

    /// Returns the `TypeId` of the declared type.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        (self.ty_id)()
    }

    /// Returns the name of the declared type, see [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Check if the given type matches the declared one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("kind", &self.kind)
            .field("type_name", &self.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::FieldInfo;
    use crate::info::ReflectKind;

    const INFO: FieldInfo = FieldInfo::new::<u32>("count", 3);

    #[test]
    fn const_construction() {
        assert_eq!(INFO.name(), "count");
        assert_eq!(INFO.index(), 3);
        assert_eq!(INFO.kind(), ReflectKind::Opaque);
        assert!(INFO.type_is::<u32>());
        assert!(!INFO.type_is::<i32>());
        assert_eq!(INFO.type_name(), "u32");
    }

    #[derive(crate::derive::Reflect)]
    struct Pair {
        a: u8,
        b: u8,
    }

    #[test]
    fn opaque_field_kind() {
        const NESTED: FieldInfo = FieldInfo::new::<Pair>("pair", 0);
        const AS_LEAF: FieldInfo = FieldInfo::new_opaque::<Pair>("pair", 0);

        assert_eq!(NESTED.kind(), ReflectKind::Struct);
        assert_eq!(AS_LEAF.kind(), ReflectKind::Opaque);
        assert!(AS_LEAF.type_is::<Pair>());
        assert_eq!(Pair { a: 1, b: 2 }.b, 2);
    }

    #[test]
    fn debug_output() {
        let text = format!("{INFO:?}");
        assert!(text.contains("\"count\""));
        assert!(text.contains("u32"));
    }
}
