use crate::core::error::{NumerologyError, Result};

/// Sum the decimal digits of `n`
#[inline]
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single numerology figure in 1..=9
///
/// Digits are summed repeatedly until one digit remains. Master numbers
/// (11, 22, 33) are not preserved. An input of 0 has no figure and is
/// rejected.
pub fn reduce(n: u64) -> Result<u8> {
    if n == 0 {
        return Err(NumerologyError::invalid("cannot reduce 0 to a numerology figure"));
    }

    let mut total = n;
    while total > 9 {
        total = digit_sum(total);
    }

    Ok(total as u8)
}
