//! Compile-time configuration aliases.
//!
//! [`define_alias!`] turns a `#[cfg(...)]` predicate into a named macro,
//! so that crates can write `crate::cfg::std! { ... }` instead of repeating
//! the same predicate on every item.
//!
//! Every generated alias accepts three forms:
//!
//! - `alias! { items_or_statements }`: kept only when the predicate holds.
//! - `alias! { if { .. } else { .. } }`: selects one branch.
//! - `alias!()`: expands to a `bool` literal.
//!
//! ```
//! mod cfg {
//!     sr_cfg::define_alias! {
//!         #[cfg(test)] => testing,
//!         #[cfg(any())] => never,
//!     }
//! }
//!
//! cfg::never! {
//!     compile_error!("unreachable");
//! }
//!
//! let x = cfg::never! { if { 1 } else { 2 } };
//! assert_eq!(x, 2);
//! assert!(!cfg::never!());
//! ```
#![no_std]

/// Define a set of configuration aliases in the current module.
///
/// Syntax: `#[cfg(predicate)] => alias_name`, comma separated.
///
/// The predicate is evaluated in the crate that invokes this macro,
/// not in `sr_cfg`.
///
/// ```
/// pub mod cfg {
///     sr_cfg::define_alias! {
///         #[cfg(feature = "std")] => std,
///         #[cfg(all(debug_assertions, feature = "debug"))] => debug,
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_alias {
    () => {};
    (
        #[cfg($meta:meta)] => $name:ident
        $(, $($rest:tt)*)?
    ) => {
        #[cfg($meta)]
        #[doc = concat!("Keeps its input: `", stringify!($meta), "` is active.")]
        pub use $crate::enabled as $name;

        #[cfg(not($meta))]
        #[doc = concat!("Discards its input: `", stringify!($meta), "` is inactive.")]
        pub use $crate::disabled as $name;

        $($crate::define_alias! { $($rest)* })?
    };
}

/// The expansion used by an alias whose predicate holds.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// The expansion used by an alias whose predicate does not hold.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}
