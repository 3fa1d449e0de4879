//! Compile-time questions about reflectable types.
//!
//! ## Menu
//!
//! - [`is_reflectable!`](crate::is_reflectable): whether *any* type opted in, without requiring a bound.
//! - [`is_struct`]: the same question for types already known to be [`Reflect`].
//! - [`field_count`]: the number of reflected fields.
//! - [`field_data`] / [`field_data_mut`]: the descriptor of the `N`th field of an object.
//! - [`struct_info`] / [`field_names`]: the ordered field metadata.
//!
//! Asking for a field index that does not exist does not compile:
//!
//! ```compile_fail
//! use sr_reflect::{derive::Reflect, query};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     x: f32,
//!     y: f32,
//! }
//!
//! let p = Point { x: 0.0, y: 0.0 };
//! let _ = query::field_data::<2, _>(&p);
//! ```
//!
//! Neither does counting the fields of a type that did not opt in:
//!
//! ```compile_fail
//! let _ = sr_reflect::query::field_count::<String>();
//! ```

use crate::Reflect;
use crate::info::{FieldInfo, StructInfo};
use crate::ops::{Field, FieldData, Struct};

// -----------------------------------------------------------------------------
// Queries

/// Returns `true` if `T` is a reflectable struct, and `false` for leaves.
///
/// Unlike [`is_reflectable!`](crate::is_reflectable), `T` must implement
/// [`Reflect`]; in exchange this is a `const fn`.
///
/// ```
/// use sr_reflect::{derive::Reflect, query};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// const POINT: bool = query::is_struct::<Point>();
///
/// assert!(POINT);
/// assert!(!query::is_struct::<String>());
/// ```
#[inline]
pub const fn is_struct<T: Reflect>() -> bool {
    T::KIND.is_struct()
}

/// Returns the number of reflected fields of `T`.
///
/// ```
/// use sr_reflect::{derive::Reflect, query};
///
/// #[derive(Reflect)]
/// struct Points {
///     pt1: [f32; 2],
///     pt2: [f32; 2],
///     pt3: [f32; 2],
/// }
///
/// const COUNT: usize = query::field_count::<Points>();
/// assert_eq!(COUNT, 3);
/// ```
#[inline]
pub const fn field_count<T: Struct>() -> usize {
    T::FIELD_COUNT
}

/// Returns the read-only descriptor of the `N`th reflected field of `object`.
///
/// Equivalent to [`Struct::field`].
///
/// ```
/// use sr_reflect::{derive::Reflect, query};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let p = Point { x: 0.0, y: 1.5 };
/// let y = query::field_data::<1, _>(&p);
///
/// assert_eq!(y.name(), "y");
/// assert_eq!(*y.get(), 1.5);
/// ```
#[inline]
pub const fn field_data<const N: usize, T: Field<N>>(object: &T) -> FieldData<&T, N> {
    FieldData::new(object)
}

/// Returns the read-write descriptor of the `N`th reflected field of `object`.
///
/// Equivalent to [`Struct::field_mut`].
///
/// ```
/// use sr_reflect::{derive::Reflect, query};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let mut p = Point { x: 0.0, y: 0.0 };
/// *query::field_data_mut::<0, _>(&mut p).get_mut() = 6.0;
///
/// assert_eq!(p.x, 6.0);
/// ```
#[inline]
pub const fn field_data_mut<const N: usize, T: Field<N>>(object: &mut T) -> FieldData<&mut T, N> {
    FieldData::new_mut(object)
}

/// Returns the [`StructInfo`] of `T`.
#[inline]
pub fn struct_info<T: Struct>() -> StructInfo {
    T::struct_info()
}

/// Returns the names of the reflected fields of `T`, in order.
///
/// ```
/// use sr_reflect::{derive::Reflect, query};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// assert!(query::field_names::<Point>().eq(["x", "y"]));
/// ```
#[inline]
pub fn field_names<T: Struct>() -> impl ExactSizeIterator<Item = &'static str> {
    T::FIELDS.iter().map(FieldInfo::name)
}

// -----------------------------------------------------------------------------
// is_reflectable

/// Returns `true` if the given type is a reflectable struct, `false` for
/// every other type, including types without any reflection support.
///
/// The answer is derived from the type alone and is a constant expression,
/// so it can drive `const` items and `const` assertions:
///
/// ```
/// use sr_reflect::{derive::Reflect, is_reflectable};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// const _: () = assert!(is_reflectable!(Point));
/// const FLAGS: [bool; 2] = [is_reflectable!(Point), is_reflectable!(Vec<Point>)];
///
/// assert_eq!(FLAGS, [true, false]);
/// ```
///
/// ```
/// use sr_reflect::{derive::Reflect, is_reflectable};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// struct Plain {
///     x: f32,
/// }
///
/// assert!(is_reflectable!(Point));
/// assert!(!is_reflectable!(Plain));
/// assert!(!is_reflectable!(f32));
/// assert!(!is_reflectable!(str));
/// ```
///
/// Inside generic code the answer is derived from the bounds of the
/// parameter, not from the concrete type it is later instantiated with.
#[macro_export]
macro_rules! is_reflectable {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::__macro_exports::detect::Fallback as _;
        <$crate::__macro_exports::detect::Probe<$ty>>::IS
    }};
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::derive::Reflect;
    use crate::info::ReflectKind;

    #[derive(Reflect)]
    struct Point {
        x: f32,
        y: f32,
    }

    #[derive(Reflect)]
    struct Private {
        x: [i32; 1],
        y: usize,
    }

    #[derive(Reflect)]
    struct Data {
        foo: String,
        #[reflect(skip)]
        bar: u8,
        baz: f32,
    }

    struct NotReflectable;

    #[test]
    fn counts() {
        assert_eq!(super::field_count::<Point>(), 2);
        assert_eq!(super::field_count::<Private>(), 2);
        assert_eq!(super::field_count::<Data>(), 2);
    }

    #[test]
    fn detection() {
        assert!(is_reflectable!(Point));
        assert!(is_reflectable!(Data));
        assert!(!is_reflectable!(NotReflectable));
        assert!(!is_reflectable!(String));
        assert!(!is_reflectable!([Point; 2]));

        assert!(super::is_struct::<Point>());
        assert!(!super::is_struct::<[u8; 2]>());
        assert!(!ReflectKind::Opaque.is_struct());
    }

    const POINT: bool = is_reflectable!(Point);
    const PLAIN: bool = is_reflectable!(NotReflectable);
    const _: () = assert!(is_reflectable!(Data) && !is_reflectable!(str));

    #[test]
    fn detection_is_const() {
        assert!(POINT);
        assert!(!PLAIN);

        let lens = [0u8; is_reflectable!(Private) as usize + 1];
        assert_eq!(lens.len(), 2);

        const { assert!(!is_reflectable!(NotReflectable)) };
    }

    #[test]
    fn private_fields_by_index() {
        let mut value = Private { x: [1], y: 2 };
        *super::field_data_mut::<1, _>(&mut value).get_mut() += 1;

        let x = super::field_data::<0, _>(&value);
        assert_eq!((x.name(), x.get()), ("x", &[1]));
        assert_eq!(*super::field_data::<1, _>(&value).get(), 3);
    }

    #[test]
    fn names_in_order() {
        assert!(super::field_names::<Data>().eq(["foo", "baz"]));
        assert_eq!(super::struct_info::<Data>().field_len(), 2);

        let data = Data {
            foo: String::new(),
            bar: 7,
            baz: 0.0,
        };
        assert_eq!(data.bar, 7);
    }
}
