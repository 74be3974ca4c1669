use crate::error::SextantError;

/// Greatest common divisor of two strictly positive integers, by subtractive
/// Euclid: the larger operand is repeatedly replaced by the difference until
/// the operands meet.
///
/// Worst-case step count is `max(a, b) / min(a, b)`, fine at gameplay input
/// magnitudes; switch callers to a modulus-based variant before feeding this
/// wildly unbalanced pairs.
///
/// A non-positive operand is an error, never a sentinel value.
pub fn gcd(a: i32, b: i32) -> Result<i32, SextantError> {
    if a <= 0 {
        return Err(SextantError::NonPositiveOperand { value: a });
    }
    if b <= 0 {
        return Err(SextantError::NonPositiveOperand { value: b });
    }
    let (mut a, mut b) = (a, b);
    while a != b {
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_common_factor() {
        assert_eq!(gcd(12, 18), Ok(6));
        assert_eq!(gcd(18, 12), Ok(6));
    }

    #[test]
    fn gcd_coprime() {
        assert_eq!(gcd(7, 13), Ok(1));
    }

    #[test]
    fn gcd_equal_operands() {
        assert_eq!(gcd(41, 41), Ok(41));
    }

    #[test]
    fn gcd_one_divides_everything() {
        assert_eq!(gcd(1, 999), Ok(1));
        assert_eq!(gcd(999, 1), Ok(1));
    }

    #[test]
    fn gcd_rejects_non_positive_operands() {
        assert_eq!(gcd(0, 5), Err(SextantError::NonPositiveOperand { value: 0 }));
        assert_eq!(gcd(5, 0), Err(SextantError::NonPositiveOperand { value: 0 }));
        assert_eq!(gcd(-3, 5), Err(SextantError::NonPositiveOperand { value: -3 }));
        assert_eq!(gcd(5, -3), Err(SextantError::NonPositiveOperand { value: -3 }));
    }
}
