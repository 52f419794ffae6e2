use crate::error::FiboError;
use crate::fibo_debug;

/// First term index whose Fibonacci value overflows a `u64`.
///
/// `fibo(93) = 12_200_160_415_121_876_738` is the largest term that fits.
pub const OVERFLOW_THRESHOLD: u32 = 94;

/// Computes the n-th Fibonacci number, with `fibo(0) = 0` and `fibo(1) = 1`.
///
/// Runs in O(n) with two rolling accumulators.
///
/// # Errors
///
/// Returns [`FiboError::TermOverflow`] when `n >= OVERFLOW_THRESHOLD`, since the
/// true value would not fit in a `u64`.
///
/// # Examples
///
/// ```
/// assert_eq!(fibo_term::fibo(10), Ok(55));
/// assert!(fibo_term::fibo(94).is_err());
/// ```
pub fn fibo(n: u32) -> Result<u64, FiboError> {
    if n >= OVERFLOW_THRESHOLD {
        fibo_debug!("fibo({}): rejected, threshold is {}", n, OVERFLOW_THRESHOLD);
        return Err(FiboError::TermOverflow { n });
    }
    // Below the threshold no addition can overflow, so the wrapping variant is exact.
    Ok(fibo_wrapping(n))
}

/// Computes the n-th Fibonacci number without bounds checking.
///
/// Same convention as [`fibo`]; from `n = 94` onwards the result silently wraps
/// modulo 2^64.
pub fn fibo_wrapping(n: u32) -> u64 {
    let mut v0: u64 = 0;
    let mut v1: u64 = 1;
    for _ in 1..n {
        (v0, v1) = (v1, v0.wrapping_add(v1));
    }
    if n >= 1 {
        v1
    } else {
        v0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fibo(0), Ok(0));
        assert_eq!(fibo(1), Ok(1));
    }

    #[test]
    fn non_base_cases() {
        assert_eq!(fibo(2), Ok(1));
        assert_eq!(fibo(3), Ok(2));
        assert_eq!(fibo(4), Ok(3));
        assert_eq!(fibo(5), Ok(5));
        assert_eq!(fibo(10), Ok(55));
        assert_eq!(fibo(20), Ok(6_765));
        assert_eq!(fibo(50), Ok(12_586_269_025));
        assert_eq!(fibo(90), Ok(2_880_067_194_370_816_120));
        assert_eq!(fibo(92), Ok(7_540_113_804_746_346_429));
        assert_eq!(fibo(93), Ok(12_200_160_415_121_876_738));
    }

    #[test]
    fn rejects_overflowing_terms() {
        assert_eq!(fibo(94), Err(FiboError::TermOverflow { n: 94 }));
        assert_eq!(fibo(u32::MAX), Err(FiboError::TermOverflow { n: u32::MAX }));
    }

    #[test]
    fn wrapping_agrees_below_threshold() {
        for n in 0..OVERFLOW_THRESHOLD {
            assert_eq!(Ok(fibo_wrapping(n)), fibo(n), "n = {n}");
        }
    }

    #[test]
    fn wrapping_wraps_past_threshold() {
        let expected = fibo_wrapping(93).wrapping_add(fibo_wrapping(92));
        assert_eq!(fibo_wrapping(94), expected);
        assert!(fibo_wrapping(94) < fibo_wrapping(93));
    }
}
