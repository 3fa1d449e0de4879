use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::Leaf;
use crate::info::FieldInfo;
use crate::ops::Struct;
use crate::visit::{self, FieldRef, Visitor};

/// Formats a reflectable struct as one `path = value` line per leaf.
///
/// The path of a leaf is its field name, qualified with the names of the
/// enclosing nested structs: `outer.inner`. The object itself contributes
/// no segment.
///
/// ```
/// use sr_reflect::{derive::Reflect, print::FlatPrinter};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// #[derive(Reflect)]
/// struct Line {
///     from: Point,
///     width: u8,
/// }
///
/// let line = Line { from: Point { x: 1.0, y: 2.0 }, width: 3 };
///
/// let text = FlatPrinter::new().format(&line);
/// assert_eq!(text, "from.x = 1.0\nfrom.y = 2.0\nwidth = 3\n");
///
/// let text = FlatPrinter::new().with_separator("/").format(&line);
/// assert_eq!(text, "from/x = 1.0\nfrom/y = 2.0\nwidth = 3\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatPrinter {
    separator: &'static str,
}

impl Default for FlatPrinter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl FlatPrinter {
    /// Creates a printer joining nested names with `.`.
    #[inline]
    pub const fn new() -> Self {
        Self { separator: "." }
    }

    /// Joins nested names with `separator` instead.
    #[inline]
    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Returns the separator between nested names.
    #[inline]
    pub const fn separator(&self) -> &'static str {
        self.separator
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
        let mut visitor = FlatVisitor {
            out,
            separator: self.separator,
            path: Vec::new(),
            result: Ok(()),
        };
        visit::walk(&mut visitor, object);
        visitor.result
    }
}

struct FlatVisitor<'w> {
    out: &'w mut dyn Write,
    separator: &'static str,
    path: Vec<&'static str>,
    result: fmt::Result,
}

impl FlatVisitor<'_> {
    fn line(&mut self, name: &str, value: &dyn Leaf) -> fmt::Result {
        for segment in &self.path {
            self.out.write_str(segment)?;
            self.out.write_str(self.separator)?;
        }
        writeln!(self.out, "{name} = {value:?}")
    }
}

impl Visitor for FlatVisitor<'_> {
    fn visit<T: Leaf>(&mut self, field: FieldRef<'_, T>) {
        if self.result.is_ok() {
            self.result = self.line(field.name(), field.get());
        }
    }

    fn enter(&mut self, info: &'static FieldInfo) {
        self.path.push(info.name());
    }

    fn exit(&mut self, _info: &'static FieldInfo) {
        self.path.pop();
    }
}
