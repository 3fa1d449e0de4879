use alloc::string::String;
use core::fmt::{self, Write};

use crate::Leaf;
use crate::info::FieldInfo;
use crate::ops::Struct;
use crate::visit::{self, FieldRef, Visitor};

/// Formats a reflectable struct as an indented block.
///
/// Every leaf is written as `name = value,` one level deeper than its
/// parent; every nested struct opens a `name = {` block, closed by `},`.
///
/// ```
/// use sr_reflect::{derive::Reflect, print::PrettyPrinter};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Reflect)]
/// struct ManyPoints {
///     pt: Point,
///     x: i32,
/// }
///
/// let value = ManyPoints { pt: Point { x: 1, y: 2 }, x: 10 };
///
/// assert_eq!(PrettyPrinter::new().format(&value), "\
/// {
///     pt = {
///         x = 1,
///         y = 2,
///     },
///     x = 10,
/// }
/// ");
///
/// assert_eq!(PrettyPrinter::with_indent_size(1).format(&value), "\
/// {
///  pt = {
///   x = 1,
///   y = 2,
///  },
///  x = 10,
/// }
/// ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyPrinter {
    indent_size: usize,
}

impl Default for PrettyPrinter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyPrinter {
    /// The number of spaces per nesting level used by [`PrettyPrinter::new`].
    pub const DEFAULT_INDENT_SIZE: usize = 4;

    /// Creates a printer indenting by four spaces per level.
    #[inline]
    pub const fn new() -> Self {
        Self::with_indent_size(Self::DEFAULT_INDENT_SIZE)
    }

    /// Creates a printer indenting by `indent_size` spaces per level.
    #[inline]
    pub const fn with_indent_size(indent_size: usize) -> Self {
        Self { indent_size }
    }

    /// Returns the number of spaces per nesting level.
    #[inline]
    pub const fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Formats `object` into a new `String`.
    ///
    /// # Panics
    ///
    /// Panics if the `Debug` implementation of a leaf returns an error.
    pub fn format<T: Struct>(&self, object: &T) -> String {
        let mut out = String::new();
        self.format_to(object, &mut out)
            .expect("a Debug implementation returned an error unexpectedly");
        out
    }

    /// Formats `object` into `out`.
    ///
    /// Stops at the first failed write and returns its error.
    pub fn format_to<T: Struct>(&self, object: &T, out: &mut dyn Write) -> fmt::Result {
        out.write_str("{\n")?;

        let mut visitor = PrettyVisitor {
            out,
            indent_size: self.indent_size,
            depth: 0,
            result: Ok(()),
        };
        visit::walk(&mut visitor, object);
        visitor.result?;

        visitor.out.write_str("}\n")
    }
}

struct PrettyVisitor<'w> {
    out: &'w mut dyn Write,
    indent_size: usize,
    depth: usize,
    result: fmt::Result,
}

impl PrettyVisitor<'_> {
    #[inline]
    fn indent(&mut self, level: usize) -> fmt::Result {
        write!(self.out, "{:width$}", "", width = level * self.indent_size)
    }

    fn leaf(&mut self, name: &str, value: &dyn Leaf) -> fmt::Result {
        self.indent(self.depth + 1)?;
        writeln!(self.out, "{name} = {value:?},")
    }

    fn open(&mut self, name: &str) -> fmt::Result {
        self.indent(self.depth)?;
        writeln!(self.out, "{name} = {{")
    }

    fn close(&mut self) -> fmt::Result {
        self.indent(self.depth)?;
        self.out.write_str("},\n")
    }
}

impl Visitor for PrettyVisitor<'_> {
    fn visit<T: Leaf>(&mut self, field: FieldRef<'_, T>) {
        if self.result.is_ok() {
            self.result = self.leaf(field.name(), field.get());
        }
    }

    fn enter(&mut self, info: &'static FieldInfo) {
        self.depth += 1;
        if self.result.is_ok() {
            self.result = self.open(info.name());
        }
    }

    fn exit(&mut self, _info: &'static FieldInfo) {
        if self.result.is_ok() {
            self.result = self.close();
        }
        self.depth -= 1;
    }
}
