mod ffi;
mod hash;
mod path;
mod sync;
mod time;
