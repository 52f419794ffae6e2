#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # fibo
//!
//! Demo crate tying the workspace together: it depends on both the term
//! generator and the sum aggregator and backs the `fibo` command-line tool.

pub use fibo_sum::{fibo_sum, fibo_sum_linear, fibo_sum_wrapping};
pub use fibo_term::{debug, fibo, fibo_wrapping, BuildConfig, FiboError, BUILD_CONFIG};

/// Term used by [`dummy_fibo_sum`].
pub const DUMMY_TERM: u32 = 7;

/// A term count paired with its Fibonacci sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DummyFiboSum {
    /// Number of terms summed.
    pub term: u32,
    /// `fibo_sum(term)`.
    pub value: u64,
}

/// Returns a fixed term and its value of [`fibo_sum`].
///
/// # Errors
///
/// Propagates the [`FiboError`] from [`fibo_sum`], which cannot occur for the
/// fixed term.
pub fn dummy_fibo_sum() -> Result<DummyFiboSum, FiboError> {
    Ok(DummyFiboSum {
        term: DUMMY_TERM,
        value: fibo_sum(DUMMY_TERM)?,
    })
}
