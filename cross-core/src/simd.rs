//! SIMD dispatch macros.
//!
//! The CROSS arithmetic kernels have an AVX2 fast path and a portable scalar
//! path. These macros generate the runtime capability check and the safe
//! wrapper that calls into the `unsafe` `#[target_feature]` kernel only when
//! the CPU supports it.

/// Generate platform detection functions for SIMD dispatch.
///
/// Generates `has_avx2() -> bool` on x86_64 (compile-time fast path when the
/// crate is built with `target-feature=+avx2`, runtime detection otherwise).
///
/// # Example
///
/// ```ignore
/// cross_core::define_has_avx2!();
/// // Now has_avx2() is available in this scope
/// ```
#[macro_export]
macro_rules! define_has_avx2 {
    () => {
        /// Check if AVX2 is available at runtime (x86_64 only).
        #[cfg(target_arch = "x86_64")]
        #[inline]
        pub fn has_avx2() -> bool {
            #[cfg(target_feature = "avx2")]
            {
                true
            }
            #[cfg(not(target_feature = "avx2"))]
            {
                #[cfg(feature = "std")]
                {
                    std::arch::is_x86_feature_detected!("avx2")
                }
                #[cfg(not(feature = "std"))]
                {
                    false
                }
            }
        }
    };
}

/// Generate a SIMD dispatch function that runs the AVX2 kernel when
/// available and returns `bool` indicating whether SIMD was used.
///
/// On other architectures the generated function always returns `false`
/// and the caller falls back to its scalar loop.
///
/// # Example
///
/// ```ignore
/// cross_core::define_simd_dispatch! {
///     pub fn accumulate_row(acc: &mut [u32], coeff: u32, row: &[u16]) -> bool;
///     avx2: avx2::accumulate_row(acc, coeff, row)
/// }
/// ```
#[macro_export]
macro_rules! define_simd_dispatch {
    (
        $(#[$attr:meta])*
        pub fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> bool;
        avx2: $avx2_call:expr
    ) => {
        $(#[$attr])*
        #[cfg(target_arch = "x86_64")]
        pub fn $name( $($arg : $argty),* ) -> bool {
            if has_avx2() {
                unsafe { $avx2_call; }
                true
            } else {
                false
            }
        }

        $(#[$attr])*
        #[cfg(not(target_arch = "x86_64"))]
        #[allow(unused_variables)]
        pub fn $name( $($arg : $argty),* ) -> bool {
            false
        }
    };
}
