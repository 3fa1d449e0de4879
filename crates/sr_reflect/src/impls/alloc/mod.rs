mod borrow;
mod boxed;
mod collections;
