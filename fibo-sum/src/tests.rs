use super::*;

#[test]
fn test_small_sums() {
    assert_eq!(fibo_sum(0), Ok(0));
    assert_eq!(fibo_sum(1), Ok(1));
    assert_eq!(fibo_sum(2), Ok(2));
    assert_eq!(fibo_sum(3), Ok(4));
    assert_eq!(fibo_sum(4), Ok(7));
    assert_eq!(fibo_sum(5), Ok(12));
    assert_eq!(fibo_sum(7), Ok(33));
}

#[test]
fn test_largest_sum() {
    // fibo(93) - 1
    assert_eq!(fibo_sum(91), Ok(12_200_160_415_121_876_737));
}

#[test]
fn test_rejects_overflowing_sums() {
    assert_eq!(fibo_sum(92), Err(FiboError::SumOverflow { n: 92 }));
    assert_eq!(fibo_sum(94), Err(FiboError::SumOverflow { n: 94 }));
    assert_eq!(fibo_sum_linear(92), Err(FiboError::SumOverflow { n: 92 }));
}

#[test]
fn test_linear_small_sums() {
    assert_eq!(fibo_sum_linear(0), Ok(0));
    assert_eq!(fibo_sum_linear(1), Ok(1));
    assert_eq!(fibo_sum_linear(5), Ok(12));
    assert_eq!(fibo_sum_linear(7), Ok(33));
}

#[test]
fn test_wrapping_small_sums() {
    assert_eq!(fibo_sum_wrapping(0), 0);
    assert_eq!(fibo_sum_wrapping(7), 33);
}
