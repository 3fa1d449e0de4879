use core::any::{Any, TypeId};
use core::fmt::Debug;

// -----------------------------------------------------------------------------
// Leaf

/// A leaf value handed out by the traversal engine.
///
/// `Leaf` is `Any + Debug` in a single object-safe trait, so a callback
/// receiving `&dyn Leaf` can both print the value and recover its concrete
/// type.
///
/// It is implemented for every `'static` type with a `Debug` implementation.
///
/// # Examples
///
/// ```
/// use sr_reflect::Leaf;
///
/// let value: &dyn Leaf = &42_i32;
///
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value.downcast_ref::<u32>(), None);
/// assert_eq!(format!("{value:?}"), "42");
/// ```
pub trait Leaf: Any + Debug {}

impl<T: Any + Debug> Leaf for T {}

impl dyn Leaf {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.leaf_type_id() == TypeId::of::<T>()
    }

    /// Returns the `TypeId` of the underlying value.
    #[inline]
    pub fn leaf_type_id(&self) -> TypeId {
        <dyn Any>::type_id(self)
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}
