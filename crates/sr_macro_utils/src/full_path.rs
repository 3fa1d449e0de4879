//! Fully-qualified paths of `core` items, usable inside `quote!`.
//!
//! Generated code must not rely on the prelude of the calling crate, which
//! may shadow `Debug`.
//!
//! ```
//! use quote::quote;
//! use sr_macro_utils::full_path::DebugFP;
//!
//! let tokens = quote!( where Self: #DebugFP );
//! assert_eq!(tokens.to_string(), "where Self : :: core :: fmt :: Debug");
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => { $($path:tt)+ })*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($($path)+));
            }
        }
    )*};
}

define_full_path! {
    /// `::core::fmt::Debug`
    DebugFP => { ::core::fmt::Debug }
}
