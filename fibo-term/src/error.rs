use crate::term::OVERFLOW_THRESHOLD;
use thiserror::Error;

/// Term count at which a sum of the first n terms no longer fits in a `u64`.
///
/// The sum of the first 92 terms is `fibo(94) - 1`, which is past `u64::MAX`.
pub const SUM_OVERFLOW_THRESHOLD: u32 = 92;

/// Domain error raised when a result would not fit in a `u64`.
///
/// Both variants are the same kind of failure: the input is out of range and
/// the computation is refused rather than wrapped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiboError {
    /// `fibo(n)` was requested for `n >= OVERFLOW_THRESHOLD`.
    #[error("fibo({n}) was attempted to be overflowed (term index must be below {max})", max = OVERFLOW_THRESHOLD)]
    TermOverflow {
        /// The rejected term index.
        n: u32,
    },
    /// A sum over the first `n` terms was requested for `n >= SUM_OVERFLOW_THRESHOLD`.
    #[error("fibo_sum({n}) was attempted to be overflowed (term count must be below {max})", max = SUM_OVERFLOW_THRESHOLD)]
    SumOverflow {
        /// The rejected term count.
        n: u32,
    },
}

impl FiboError {
    /// The input that was rejected.
    pub fn input(&self) -> u32 {
        match *self {
            FiboError::TermOverflow { n } | FiboError::SumOverflow { n } => n,
        }
    }
}
