//! FFI bindings for the C implementation.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_double, c_int, size_t};

    extern "C" {
        pub fn reduce_sum_c(values: *const c_double, len: size_t) -> c_double;
        pub fn reduce_c_openmp_enabled() -> c_int;
    }
}

/// C sum wrapper
#[cfg(c_implementation_active)]
pub fn sum_c(values: &[f64]) -> f64 {
    // SAFETY: pointer and length come from the same live slice; the C side only reads.
    unsafe { ffi::reduce_sum_c(values.as_ptr(), values.len()) }
}

/// Whether the linked C object was compiled with `_OPENMP` defined
#[cfg(c_implementation_active)]
pub fn c_runtime_openmp() -> bool {
    unsafe { ffi::reduce_c_openmp_enabled() != 0 }
}

// Stub implementations for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn sum_c(_values: &[f64]) -> f64 {
    panic!("C implementation not compiled (requires GCC, Clang or MSVC)")
}

#[cfg(not(c_implementation_active))]
pub fn c_runtime_openmp() -> bool {
    false
}
