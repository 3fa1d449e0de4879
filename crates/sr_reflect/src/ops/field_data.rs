use core::fmt;

use crate::info::FieldInfo;
use crate::ops::{Field, Member};

// -----------------------------------------------------------------------------
// Binding

mod sealed {
    pub trait Sealed {}
    impl<T: ?Sized> Sealed for &T {}
    impl<T: ?Sized> Sealed for &mut T {}
}

/// A borrow of the enclosing object held by a [`FieldData`].
///
/// Implemented for `&T` (read-only descriptor) and `&mut T` (read-write
/// descriptor), and sealed.
pub trait Binding: sealed::Sealed {
    /// The enclosing object type.
    type Target: ?Sized;

    /// Reborrows the enclosing object.
    fn target(&self) -> &Self::Target;
}

impl<T: ?Sized> Binding for &T {
    type Target = T;

    #[inline]
    fn target(&self) -> &T {
        self
    }
}

impl<T: ?Sized> Binding for &mut T {
    type Target = T;

    #[inline]
    fn target(&self) -> &T {
        self
    }
}

// -----------------------------------------------------------------------------
// FieldData

/// The descriptor of the `N`th reflected field, bound to one object.
///
/// `B` is the borrow of the enclosing object, `&T` or `&mut T`. The kind of
/// borrow decides the available accessors, so a descriptor created from a
/// shared reference can never write:
///
/// | method       | `FieldData<&T, N>` | `FieldData<&mut T, N>` |
/// |--------------|:------------------:|:----------------------:|
/// | `get`        | yes                | yes                    |
/// | `get_mut`    |                    | yes                    |
/// | `into_mut`   |                    | yes                    |
/// | `name`, `index`, `info`, `member` | yes | yes              |
///
/// The descriptor never copies the field, and it cannot outlive the borrow
/// it was created from.
///
/// # Example
///
/// ```
/// use sr_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Private {
///     x: [i32; 1],
///     y: usize,
/// }
///
/// let mut value = Private { x: [0], y: 0 };
///
/// value.field_mut::<0>().get_mut()[0] = 7;
/// *value.field_mut::<1>().get_mut() = 3;
///
/// let y = value.field::<1>();
/// assert_eq!(y.name(), "y");
/// assert_eq!(*y.get(), 3);
/// assert_eq!(value.field::<0>().get(), &[7]);
/// ```
///
/// A read-only descriptor has no mutable accessor:
///
/// ```compile_fail
/// use sr_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
/// }
///
/// let p = Point { x: 1.0 };
/// *p.field::<0>().get_mut() = 2.0;
/// ```
pub struct FieldData<B, const N: usize> {
    object: B,
}

impl<B, const N: usize> FieldData<B, N>
where
    B: Binding,
    B::Target: Field<N>,
{
    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info().name()
    }

    /// Returns the index of the field, `N`.
    #[inline]
    pub const fn index(&self) -> usize {
        N
    }

    /// Returns the [`FieldInfo`] of the field.
    #[inline]
    pub fn info(&self) -> &'static FieldInfo {
        <B::Target as Field<N>>::INFO
    }

    /// Returns the instance-independent accessor of the field.
    #[inline]
    pub fn member(&self) -> Member<B::Target, <B::Target as Field<N>>::Type> {
        <B::Target as Field<N>>::MEMBER
    }

    /// Returns the enclosing object.
    #[inline]
    pub fn object(&self) -> &B::Target {
        self.object.target()
    }
}

impl<'a, T: Field<N>, const N: usize> FieldData<&'a T, N> {
    /// Creates a read-only descriptor.
    #[inline]
    pub const fn new(object: &'a T) -> Self {
        Self { object }
    }

    /// Borrows the field, for as long as the enclosing object is borrowed.
    #[inline]
    pub fn get(&self) -> &'a <T as Field<N>>::Type {
        <T as Field<N>>::MEMBER.get(self.object)
    }
}

impl<'a, T: Field<N>, const N: usize> FieldData<&'a mut T, N> {
    /// Creates a read-write descriptor.
    #[inline]
    pub const fn new_mut(object: &'a mut T) -> Self {
        Self { object }
    }

    /// Borrows the field.
    #[inline]
    pub fn get(&self) -> &<T as Field<N>>::Type {
        <T as Field<N>>::MEMBER.get(&*self.object)
    }

    /// Mutably borrows the field.
    #[inline]
    pub fn get_mut(&mut self) -> &mut <T as Field<N>>::Type {
        <T as Field<N>>::MEMBER.get_mut(&mut *self.object)
    }

    /// Converts into a mutable borrow of the field, for as long as the
    /// enclosing object is borrowed.
    #[inline]
    pub fn into_mut(self) -> &'a mut <T as Field<N>>::Type {
        <T as Field<N>>::MEMBER.get_mut(self.object)
    }

    /// Downgrades into a read-only descriptor.
    #[inline]
    pub fn into_ref(self) -> FieldData<&'a T, N> {
        FieldData::new(self.object)
    }
}

impl<B, const N: usize> fmt::Debug for FieldData<B, N>
where
    B: Binding,
    B::Target: Field<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldData")
            .field("name", &self.name())
            .field("index", &N)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::derive::Reflect;
    use crate::ops::{Field, Struct};
    use crate::query;

    #[derive(Reflect)]
    struct Player {
        name: String,
        score: u32,
    }

    fn player() -> Player {
        Player {
            name: String::from("ann"),
            score: 10,
        }
    }

    #[test]
    fn shared_descriptor_reads() {
        let p = player();
        let name = p.field::<0>();
        let score = query::field_data::<1, _>(&p);

        assert_eq!(name.get(), "ann");
        assert_eq!((name.name(), name.index()), ("name", 0));
        assert_eq!(*score.get(), 10);
        assert!(score.info().type_is::<u32>());
    }

    #[test]
    fn exclusive_descriptor_writes() {
        let mut p = player();
        {
            let mut score = p.field_mut::<1>();
            *score.get_mut() += 5;
            assert_eq!(*score.get(), 15);
            assert_eq!(score.name(), "score");
        }
        p.field_mut::<0>().into_mut().push('e');

        assert_eq!(p.score, 15);
        assert_eq!(p.name, "anne");
    }

    #[test]
    fn descriptors_borrow_not_copy() {
        let mut p = player();
        let field: &String = p.field::<0>().get();
        assert!(core::ptr::eq(field, &p.name));

        let via_member = <Player as Field<0>>::MEMBER.get_mut(&mut p);
        via_member.clear();
        assert!(p.name.is_empty());
    }

    #[test]
    fn downgrade_keeps_binding() {
        let mut p = player();
        let read = p.field_mut::<1>().into_ref();
        assert_eq!(*read.get(), 10);
        assert_eq!(read.object().name, "ann");
    }
}
