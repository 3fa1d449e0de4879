//! Render reflectable structs as text.
//!
//! ## Menu
//!
//! - [`FlatPrinter`]: one `path = value` line per leaf, nested names joined with `.`.
//! - [`PrettyPrinter`]: an indented block, nested structs as nested blocks.
//! - [`ReflectDisplay`]: `Display` adapters of both, usable in `format!`.
//! - [`print`] / [`pretty_print`]: write to stdout (`std` feature).
//!
//! Leaf values are formatted with their `Debug` implementation.
//!
//! # Example
//!
//! ```
//! use sr_reflect::{derive::Reflect, print::ReflectDisplay};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     x: f32,
//!     y: f32,
//! }
//!
//! #[derive(Reflect)]
//! struct Line {
//!     from: Point,
//!     to: Point,
//! }
//!
//! let line = Line {
//!     from: Point { x: 0.0, y: 1.0 },
//!     to: Point { x: 2.0, y: 3.0 },
//! };
//!
//! assert_eq!(line.flat().to_string(), "\
//! from.x = 0.0
//! from.y = 1.0
//! to.x = 2.0
//! to.y = 3.0
//! ");
//!
//! assert_eq!(line.pretty().to_string(), "\
//! {
//!     from = {
//!         x = 0.0,
//!         y = 1.0,
//!     },
//!     to = {
//!         x = 2.0,
//!         y = 3.0,
//!     },
//! }
//! ");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod display;
mod flat;
mod pretty;

// -----------------------------------------------------------------------------
// Exports

pub use display::{Flat, Pretty, ReflectDisplay};
pub use flat::FlatPrinter;
pub use pretty::PrettyPrinter;

crate::cfg::std! {
    pub use stdout::{pretty_print, print};

    mod stdout {
        use std::io::{self, Write};

        use crate::ops::Struct;

        use super::{FlatPrinter, PrettyPrinter};

        /// Writes `object` to stdout, one `path = value` line per leaf.
        ///
        /// See [`FlatPrinter`] for the format. A failed write is logged,
        /// not reported.
        #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
        pub fn print<T: Struct>(object: &T) {
            write_stdout::<T>(&FlatPrinter::new().format(object));
        }

        /// Writes `object` to stdout as an indented block.
        ///
        /// See [`PrettyPrinter`] for the format. A failed write is logged,
        /// not reported.
        #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
        pub fn pretty_print<T: Struct>(object: &T) {
            write_stdout::<T>(&PrettyPrinter::new().format(object));
        }

        fn write_stdout<T>(text: &str) {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
                log::error!("failed to print `{}`: {err}", core::any::type_name::<T>());
            }
        }
    }
}

#[cfg(test)]
mod tests;
