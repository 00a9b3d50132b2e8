//! Round-level parallelism.
//!
//! The T protocol rounds share no mutable state, so sign and verify map them
//! through Rayon when the `parallel` feature is on. Without it the same
//! closure runs on a plain iterator.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate `f(0), ..., f(rounds - 1)` and collect the results in order.
pub fn map_rounds<R, F>(rounds: usize, f: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> R + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        (0..rounds).into_par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..rounds).map(f).collect()
    }
}
