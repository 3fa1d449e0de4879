//! Items used by the exported macros. Not public API.

#![doc(hidden)]

/// Support of [`is_reflectable!`](crate::is_reflectable).
///
/// The macro reads `<Probe<T>>::IS`. Path resolution prefers inherent
/// associated items, so the inherent `IS` (defined only for `T: Struct`)
/// wins when it applies, and the default of [`Fallback`] answers every
/// other type. Both are constants, so the answer is usable in const context.
pub mod detect {
    use core::marker::PhantomData;

    use crate::ops::Struct;

    pub struct Probe<T: ?Sized>(PhantomData<T>);

    impl<T: Struct> Probe<T> {
        pub const IS: bool = true;
    }

    pub trait Fallback {
        const IS: bool = false;
    }

    impl<T: ?Sized> Fallback for Probe<T> {}
}
