mod any;
mod atomic;
mod cell;
mod cmp;
mod marker;
mod net;
mod num;
mod ops;
mod option;
mod time;
