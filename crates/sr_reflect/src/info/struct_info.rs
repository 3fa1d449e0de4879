use core::any::{Any, TypeId, type_name};
use core::fmt;

use crate::info::FieldInfo;
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// The field order is the reflection order: the declaration order, minus
/// skipped fields, or the order given by `#[reflect(fields(..))]`.
///
/// # Examples
///
/// ```rust
/// use sr_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     name: String,
/// }
///
/// let info = A::struct_info();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("name"), Some(1));
/// assert!(info.field("val").unwrap().type_is::<f32>());
/// ```
#[derive(Clone, Copy)]
pub struct StructInfo {
    ty_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    fields: &'static [FieldInfo],
}

impl StructInfo {
    /// Create a new [`StructInfo`] from the field list of `T`.
    #[inline]
    pub const fn new<T: Struct>() -> Self {
        Self {
            ty_id: TypeId::of::<T>,
            type_name: type_name::<T>,
            fields: T::FIELDS,
        }
    }

    /// Returns the `TypeId` of the struct.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        (self.ty_id)()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Returns the name of the struct, see [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Returns the [`FieldInfo`] for the given `name`, if present.
    ///
    /// This is O(N) complexity, N <= 32.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the index for the given field `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(FieldInfo::index)
    }

    /// Returns an iterator over the fields in reflection order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'static, FieldInfo> {
        self.fields.iter()
    }

    /// Returns the field names in reflection order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + use<> {
        self.fields.iter().map(FieldInfo::name)
    }

    /// Returns all fields as a slice.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Debug for StructInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructInfo")
            .field("type_name", &self.type_name())
            .field("fields", &self.fields)
            .finish()
    }
}

impl IntoIterator for StructInfo {
    type Item = &'static FieldInfo;
    type IntoIter = core::slice::Iter<'static, FieldInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
