use core::any::Any;
use core::fmt;

use crate::info::FieldInfo;
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// Field

/// The `N`th reflected field of a struct.
///
/// `#[derive(Reflect)]` implements `Field<0>` to `Field<FIELD_COUNT - 1>`,
/// so naming an index beyond the field count is a compile error.
///
/// # Example
///
/// ```
/// use sr_reflect::{derive::Reflect, ops::Field};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let p = Point { x: 1.0, y: 2.0 };
///
/// let member = <Point as Field<1>>::MEMBER;
/// assert_eq!(*member.get(&p), 2.0);
/// assert_eq!(<Point as Field<1>>::INFO.name(), "y");
/// ```
///
/// ```compile_fail
/// use sr_reflect::{derive::Reflect, ops::Field};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let _ = <Point as Field<2>>::INFO;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no reflected field at this index",
    label = "index out of range for `{Self}`",
    note = "valid indices are `0..FIELD_COUNT`"
)]
pub trait Field<const N: usize>: Struct {
    /// The declared type of the field.
    ///
    /// It implements [`Reflect`](crate::Reflect), unless the field is marked `#[reflect(opaque)]`.
    type Type: Any;

    /// Accessors for this field, independent of any instance.
    const MEMBER: Member<Self, Self::Type>;

    /// Metadata of this field.
    const INFO: &'static FieldInfo = &Self::FIELDS[N];
}

// -----------------------------------------------------------------------------
// Member

/// An accessor pair for one field of `O`, with type `F`.
///
/// This is the "pointer to member" of the field: it does not refer to any
/// object, and can be applied to every instance of `O`.
///
/// ```
/// use sr_reflect::{derive::Reflect, ops::Field};
///
/// #[derive(Reflect)]
/// struct Counter {
///     hits: u32,
/// }
///
/// let hits = <Counter as Field<0>>::MEMBER;
/// let mut a = Counter { hits: 1 };
/// let mut b = Counter { hits: 5 };
///
/// *hits.get_mut(&mut a) += 1;
/// *hits.get_mut(&mut b) += 1;
///
/// assert_eq!((a.hits, b.hits), (2, 6));
/// ```
pub struct Member<O, F> {
    get: fn(&O) -> &F,
    get_mut: fn(&mut O) -> &mut F,
}

impl<O, F> Member<O, F> {
    /// Creates an accessor pair.
    ///
    /// Both functions must return the same field.
    #[inline]
    pub const fn new(get: fn(&O) -> &F, get_mut: fn(&mut O) -> &mut F) -> Self {
        Self { get, get_mut }
    }

    /// Borrows the field of `object`.
    #[inline]
    pub fn get<'a>(&self, object: &'a O) -> &'a F {
        (self.get)(object)
    }

    /// Mutably borrows the field of `object`.
    #[inline]
    pub fn get_mut<'a>(&self, object: &'a mut O) -> &'a mut F {
        (self.get_mut)(object)
    }
}

impl<O, F> Clone for Member<O, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, F> Copy for Member<O, F> {}

impl<O, F> fmt::Debug for Member<O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("object", &core::any::type_name::<O>())
            .field("field", &core::any::type_name::<F>())
            .finish()
    }
}
