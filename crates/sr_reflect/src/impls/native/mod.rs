// bool, char, u8 - u128, i8 - i128, f32, f64, usize, isize
mod native_basic;

// &'static str, String
mod native_str;

// ()  (T1,)  (T1, T2)  ...  (T1, T2, .. T12)
mod native_tuple;

// [T; N]
mod native_array;
