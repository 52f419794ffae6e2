#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # fibo-sum
//!
//! The sum aggregator: the sum of the first n Fibonacci terms, built on
//! [`fibo_term`].
//!
//! [`fibo_sum`] calls [`fibo_term::fibo`] once per term and is quadratic in n.
//! [`fibo_sum_linear`] gives the same results in a single pass.

mod sum;

// Re-export core's macro
pub use fibo_term::fibo_debug;

pub use fibo_term::{FiboError, SUM_OVERFLOW_THRESHOLD};
pub use sum::{fibo_sum, fibo_sum_linear, fibo_sum_wrapping};

#[cfg(test)]
mod tests;
