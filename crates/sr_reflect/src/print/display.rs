use core::fmt;

use crate::ops::Struct;

use super::{FlatPrinter, PrettyPrinter};

/// `Display` adapters for reflectable structs.
///
/// Implemented for every [`Struct`].
///
/// ```
/// use sr_reflect::{derive::Reflect, print::ReflectDisplay};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let p = Point { x: 1.0, y: 2.0 };
///
/// assert_eq!(format!("{}", p.flat()), "x = 1.0\ny = 2.0\n");
/// assert_eq!(format!("{}", p.pretty().indent(2)), "{\n  x = 1.0,\n  y = 2.0,\n}\n");
/// ```
pub trait ReflectDisplay: Struct {
    /// Displays `self` as [`FlatPrinter`] formats it.
    #[inline]
    fn flat(&self) -> Flat<'_, Self> {
        Flat {
            object: self,
            printer: FlatPrinter::new(),
        }
    }

    /// Displays `self` as [`PrettyPrinter`] formats it.
    #[inline]
    fn pretty(&self) -> Pretty<'_, Self> {
        Pretty {
            object: self,
            printer: PrettyPrinter::new(),
        }
    }
}

impl<T: Struct> ReflectDisplay for T {}

/// Displays a reflectable struct in the flat format.
///
/// Created by [`ReflectDisplay::flat`].
pub struct Flat<'a, T> {
    object: &'a T,
    printer: FlatPrinter,
}

impl<T> Flat<'_, T> {
    /// Joins nested names with `separator`.
    #[inline]
    pub const fn separator(mut self, separator: &'static str) -> Self {
        self.printer = self.printer.with_separator(separator);
        self
    }
}

impl<T: Struct> fmt::Display for Flat<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.format_to(self.object, f)
    }
}

/// Displays a reflectable struct in the indented format.
///
/// Created by [`ReflectDisplay::pretty`].
pub struct Pretty<'a, T> {
    object: &'a T,
    printer: PrettyPrinter,
}

impl<T> Pretty<'_, T> {
    /// Indents by `indent_size` spaces per level.
    #[inline]
    pub const fn indent(mut self, indent_size: usize) -> Self {
        self.printer = PrettyPrinter::with_indent_size(indent_size);
        self
    }
}

impl<T: Struct> fmt::Display for Pretty<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.format_to(self.object, f)
    }
}
