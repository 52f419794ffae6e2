#![warn(missing_docs)]

//! # fibo-term
//!
//! The term generator: computes the n-th Fibonacci number with the standard
//! convention `fibo(0) = 0`, `fibo(1) = 1`.
//!
//! [`fibo`] is bounds-checked and refuses any term index whose value would not
//! fit in a `u64`. [`fibo_wrapping`] is the unchecked variant and silently wraps.

pub mod config;
pub mod debug;
mod error;
mod term;

pub use config::{BuildConfig, BUILD_CONFIG};
pub use error::{FiboError, SUM_OVERFLOW_THRESHOLD};
pub use term::{fibo, fibo_wrapping, OVERFLOW_THRESHOLD};
