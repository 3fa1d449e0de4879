use core::any::Any;
use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::Leaf;
use crate::info::FieldInfo;

// -----------------------------------------------------------------------------
// FieldRef

/// A leaf field reached during a traversal: the borrowed value and the
/// metadata of the field holding it.
///
/// `T` is the declared type of the field, or `dyn Leaf` once
/// [erased](FieldRef::erase).
pub struct FieldRef<'a, T: ?Sized> {
    value: &'a T,
    info: &'static FieldInfo,
}

impl<'a, T: ?Sized> FieldRef<'a, T> {
    /// Creates a descriptor of `value`, held by the field `info`.
    #[inline]
    pub const fn new(value: &'a T, info: &'static FieldInfo) -> Self {
        Self { value, info }
    }

    /// Returns the field value.
    #[inline]
    pub const fn get(&self) -> &'a T {
        self.value
    }

    /// Returns the metadata of the field.
    #[inline]
    pub const fn info(&self) -> &'static FieldInfo {
        self.info
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns the index of the field within its direct parent.
    #[inline]
    pub const fn index(&self) -> usize {
        self.info.index()
    }
}

impl<'a, T: Leaf> FieldRef<'a, T> {
    /// Erases the value type.
    #[inline]
    pub fn erase(self) -> FieldRef<'a, dyn Leaf> {
        FieldRef {
            value: self.value,
            info: self.info,
        }
    }
}

impl<'a> FieldRef<'a, dyn Leaf> {
    /// Returns the value if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref()
    }
}

impl<T: ?Sized> Clone for FieldRef<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for FieldRef<'_, T> {}

impl<T: ?Sized> Deref for FieldRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.value
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for FieldRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("name", &self.name())
            .field("value", &self.value)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// FieldMut

/// A leaf field reached during a mutable traversal.
///
/// The mutable counterpart of [`FieldRef`].
pub struct FieldMut<'a, T: ?Sized> {
    value: &'a mut T,
    info: &'static FieldInfo,
}

impl<'a, T: ?Sized> FieldMut<'a, T> {
    /// Creates a descriptor of `value`, held by the field `info`.
    #[inline]
    pub const fn new(value: &'a mut T, info: &'static FieldInfo) -> Self {
        Self { value, info }
    }

    /// Returns the field value.
    #[inline]
    pub fn get(&self) -> &T {
        self.value
    }

    /// Returns the field value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value
    }

    /// Converts into the mutable borrow of the value.
    #[inline]
    pub fn into_mut(self) -> &'a mut T {
        self.value
    }

    /// Returns the metadata of the field.
    #[inline]
    pub const fn info(&self) -> &'static FieldInfo {
        self.info
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns the index of the field within its direct parent.
    #[inline]
    pub const fn index(&self) -> usize {
        self.info.index()
    }
}

impl<'a, T: Leaf> FieldMut<'a, T> {
    /// Erases the value type.
    #[inline]
    pub fn erase(self) -> FieldMut<'a, dyn Leaf> {
        FieldMut {
            value: self.value,
            info: self.info,
        }
    }
}

impl FieldMut<'_, dyn Leaf> {
    /// Returns the value if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Returns the value mutably if it is of type `T`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut()
    }
}

impl<T: ?Sized> Deref for FieldMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.value
    }
}

impl<T: ?Sized> DerefMut for FieldMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for FieldMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMut")
            .field("name", &self.name())
            .field("value", &self.value)
            .finish()
    }
}
