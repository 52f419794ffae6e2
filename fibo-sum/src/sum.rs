use fibo_term::{fibo, fibo_debug, fibo_wrapping, FiboError, SUM_OVERFLOW_THRESHOLD};

fn check_sum_bound(n: u32) -> Result<(), FiboError> {
    if n >= SUM_OVERFLOW_THRESHOLD {
        fibo_debug!("fibo_sum({}): rejected, threshold is {}", n, SUM_OVERFLOW_THRESHOLD);
        return Err(FiboError::SumOverflow { n });
    }
    Ok(())
}

/// Computes `fibo(1) + fibo(2) + ... + fibo(n)`.
///
/// Each term is an independent call to [`fibo_term::fibo`], with nothing
/// cached between terms, so this takes O(n^2) steps. Use [`fibo_sum_linear`]
/// when only the value matters.
///
/// # Errors
///
/// Returns [`FiboError::SumOverflow`] when `n >= SUM_OVERFLOW_THRESHOLD`.
///
/// # Examples
///
/// ```
/// assert_eq!(fibo_sum::fibo_sum(7), Ok(33));
/// ```
pub fn fibo_sum(n: u32) -> Result<u64, FiboError> {
    check_sum_bound(n)?;
    let mut sum: u64 = 0;
    for term in 1..=n {
        let value = fibo(term)?;
        fibo_debug!("fibo_sum({}): fibo({}) = {}", n, term, value);
        sum += value;
    }
    Ok(sum)
}

/// Unchecked [`fibo_sum`] over [`fibo_term::fibo_wrapping`].
///
/// Both the terms and the running sum wrap modulo 2^64, so any `n` is accepted.
pub fn fibo_sum_wrapping(n: u32) -> u64 {
    (1..=n).fold(0u64, |sum, term| sum.wrapping_add(fibo_wrapping(term)))
}

/// Computes the same value as [`fibo_sum`] in a single O(n) pass.
///
/// The two rolling accumulators of the term generator are shared across all
/// terms instead of being rebuilt for each one.
///
/// # Errors
///
/// Returns [`FiboError::SumOverflow`] when `n >= SUM_OVERFLOW_THRESHOLD`.
pub fn fibo_sum_linear(n: u32) -> Result<u64, FiboError> {
    check_sum_bound(n)?;
    let (mut prev, mut curr): (u64, u64) = (0, 1);
    let mut sum: u64 = 0;
    for _ in 0..n {
        sum += curr;
        (prev, curr) = (curr, prev + curr);
    }
    Ok(sum)
}
