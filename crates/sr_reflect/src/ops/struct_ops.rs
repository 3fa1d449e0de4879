use crate::Reflect;
use crate::info::{FieldInfo, StructInfo};
use crate::ops::{Field, FieldData};
use crate::visit::{Visitor, VisitorMut};

/// The maximum number of reflected fields of a single struct.
///
/// `#[derive(Reflect)]` rejects structs exceeding it at compile time,
/// skipped fields do not count:
///
/// ```compile_fail
/// use sr_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Wide {
///     f0: u8,
///     f1: u8,
///     f2: u8,
///     f3: u8,
///     f4: u8,
///     f5: u8,
///     f6: u8,
///     f7: u8,
///     f8: u8,
///     f9: u8,
///     f10: u8,
///     f11: u8,
///     f12: u8,
///     f13: u8,
///     f14: u8,
///     f15: u8,
///     f16: u8,
///     f17: u8,
///     f18: u8,
///     f19: u8,
///     f20: u8,
///     f21: u8,
///     f22: u8,
///     f23: u8,
///     f24: u8,
///     f25: u8,
///     f26: u8,
///     f27: u8,
///     f28: u8,
///     f29: u8,
///     f30: u8,
///     f31: u8,
///     f32: u8,
/// }
/// ```
pub const MAX_FIELDS: usize = 32;

/// A reflectable struct: a type that opted in with `#[derive(Reflect)]`.
///
/// Provides the ordered list of reflected fields and the traversal entry
/// points used by [`visit`](crate::visit). Individual fields are reached
/// through [`Field<N>`](Field), see [`Struct::field`].
///
/// # Example
///
/// ```
/// use sr_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Data {
///     foo: String,
///     #[reflect(skip)]
///     bar: Vec<i32>,
///     baz: Vec<f32>,
/// }
///
/// assert_eq!(Data::FIELD_COUNT, 2);
/// assert_eq!(Data::FIELDS[0].name(), "foo");
/// assert_eq!(Data::FIELDS[1].name(), "baz");
///
/// let data = Data { foo: "Hello".into(), bar: vec![1], baz: vec![0.5] };
/// assert_eq!(data.field::<0>().get(), "Hello");
/// assert_eq!(data.bar, [1]);
/// ```
///
/// Types that did not opt in are rejected:
///
/// ```compile_fail
/// use sr_reflect::ops::Struct;
///
/// struct Plain {
///     x: i32,
/// }
///
/// let _ = Plain::FIELD_COUNT;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not reflectable",
    label = "`{Self}` does not implement `Struct`",
    note = "did you forget to add `#[derive(Reflect)]` to `{Self}`?"
)]
pub trait Struct: Reflect {
    /// Reflected fields, in reflection order.
    const FIELDS: &'static [FieldInfo];

    /// The number of reflected fields, `1..=MAX_FIELDS`.
    const FIELD_COUNT: usize = Self::FIELDS.len();

    /// Returns the [`StructInfo`] of this type.
    #[inline]
    fn struct_info() -> StructInfo {
        StructInfo::new::<Self>()
    }

    /// Walk every reflected field in order.
    ///
    /// Unlike [`Reflect::walk`], this does not call `enter`/`exit` for `self`.
    fn visit_fields<V: Visitor>(&self, visitor: &mut V);

    /// Walk every reflected field in order, with exclusive access.
    ///
    /// Unlike [`Reflect::walk_mut`], this does not call `enter`/`exit` for `self`.
    fn visit_fields_mut<V: VisitorMut>(&mut self, visitor: &mut V);

    /// Returns a read-only descriptor of the `N`th reflected field.
    #[inline]
    fn field<const N: usize>(&self) -> FieldData<&Self, N>
    where
        Self: Field<N>,
    {
        FieldData::new(self)
    }

    /// Returns a read-write descriptor of the `N`th reflected field.
    #[inline]
    fn field_mut<const N: usize>(&mut self) -> FieldData<&mut Self, N>
    where
        Self: Field<N>,
    {
        FieldData::new_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::derive::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Struct;

    #[derive(Reflect)]
    struct Point {
        x: f32,
        y: f32,
    }

    #[derive(Reflect)]
    struct Data {
        foo: String,
        #[reflect(skip)]
        bar: Vec<i32>,
        baz: Vec<f32>,
    }

    #[derive(Reflect)]
    #[reflect(fields(second, first))]
    struct Reordered {
        first: u8,
        second: u8,
        hidden: u8,
    }

    #[test]
    fn field_list_follows_declaration() {
        assert_eq!(Point::FIELD_COUNT, 2);
        let names: Vec<_> = Point::struct_info().field_names().collect();
        assert_eq!(names, ["x", "y"]);
        assert!(Point::FIELDS.iter().all(|f| f.type_is::<f32>()));
    }

    #[test]
    fn skipped_fields_are_invisible() {
        let info = Data::struct_info();
        assert_eq!(info.field_len(), 2);
        assert_eq!(info.index_of("baz"), Some(1));
        assert!(info.field("bar").is_none());
        assert!(info.type_is::<Data>());

        let data = Data {
            foo: String::from("Hello"),
            bar: vec![1, 2, 3],
            baz: vec![0.5],
        };
        assert_eq!(data.field::<1>().get(), &[0.5]);
        assert_eq!(data.bar.len(), 3);
    }

    #[test]
    fn explicit_field_list_sets_order() {
        let names: Vec<_> = Reordered::struct_info().field_names().collect();
        assert_eq!(names, ["second", "first"]);

        let value = Reordered {
            first: 1,
            second: 2,
            hidden: 3,
        };
        assert_eq!(*value.field::<0>().get(), 2);
        assert_eq!(value.field::<1>().name(), "first");
        assert_eq!(value.hidden, 3);
    }

    #[test]
    fn nested_kind_is_recorded() {
        #[derive(Reflect)]
        struct Line {
            from: Point,
            to: Point,
            width: f32,
        }

        let kinds: Vec<_> = Line::FIELDS.iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            [ReflectKind::Struct, ReflectKind::Struct, ReflectKind::Opaque]
        );
    }
}
