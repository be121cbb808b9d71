//! FFI bindings for the C implementation.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_double, size_t};

    extern "C" {
        pub fn reduce_dot_product_c(
            a: *const c_double,
            a_len: size_t,
            b: *const c_double,
            b_len: size_t,
        ) -> c_double;
    }
}

/// C dot product wrapper. The length check happens on the C side.
#[cfg(c_implementation_active)]
pub fn dot_product_c(a: &[f64], b: &[f64]) -> f64 {
    // SAFETY: each pointer is paired with its own slice length; the C side only reads.
    unsafe { ffi::reduce_dot_product_c(a.as_ptr(), a.len(), b.as_ptr(), b.len()) }
}

// Stub implementation for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn dot_product_c(_a: &[f64], _b: &[f64]) -> f64 {
    panic!("C implementation not compiled (requires GCC, Clang or MSVC)")
}
