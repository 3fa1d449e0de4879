use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::sync::atomic::Ordering);

macro_rules! impl_reflect_for_atomic {
    ($($width:tt => [$($ty:ident),*];)*) => {
        $($(
            #[cfg(target_has_atomic = $width)]
            impl_reflect_opaque!(::core::sync::atomic::$ty);
        )*)*
    };
}

impl_reflect_for_atomic! {
    "8" => [AtomicBool, AtomicI8, AtomicU8];
    "16" => [AtomicI16, AtomicU16];
    "32" => [AtomicI32, AtomicU32];
    "64" => [AtomicI64, AtomicU64];
    "ptr" => [AtomicIsize, AtomicUsize];
}
