// ============================================================================
// Exponential Driver
// Plain power expansion: exp(x) = Σ x^k / k!
// ============================================================================

use crate::engine::SeriesEvaluator;
use crate::interfaces::SeriesExpansion;
use crate::numeric::{Decimal, MathResult};

/// Computes e^x to at least `prec` significant digits.
///
/// # Errors
/// Returns `InvalidPrecision` if `prec` is zero or negative. Not-a-number
/// or infinite `x` yields a not-a-number result, not an error.
///
/// # Example
/// ```
/// use decmath::engine::exp;
/// use decmath::numeric::Decimal;
///
/// let e = exp(&Decimal::from(1), 20).unwrap();
/// assert!(e.to_string().starts_with("2.718281828459"));
/// ```
pub fn exp(x: &Decimal, prec: i64) -> MathResult<Decimal> {
    let evaluator = SeriesEvaluator::new(prec)?;
    if x.is_nan() || x.is_infinite() {
        return Ok(Decimal::nan());
    }

    let mut series = ExpSeries::new(x);
    Ok(evaluator.sum(&mut series, Decimal::one(), Decimal::one()))
}

/// Recurrence state for the exponential expansion. No sign alternation:
/// the power accumulator gains a factor of x and the factorial denominator
/// a factor of the new index each step.
pub struct ExpSeries {
    x: Decimal,
    power: Decimal,
    factorial: Decimal,
    index: i64,
}

impl ExpSeries {
    pub fn new(x: &Decimal) -> Self {
        Self {
            x: x.clone(),
            power: Decimal::one(),
            factorial: Decimal::one(),
            index: 0,
        }
    }
}

impl SeriesExpansion for ExpSeries {
    fn next_term(&mut self, work_prec: u64, term_prec: u64) -> Decimal {
        self.power = self.power.mul_prec(&self.x, work_prec);
        self.index += 1;
        self.factorial = &self.factorial * &Decimal::from(self.index);
        self.power.div_prec(&self.factorial, term_prec)
    }

    fn name(&self) -> &str {
        "exp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MathError;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_exp_zero() {
        for prec in [1, 10, 100] {
            assert_eq!(exp(&Decimal::zero(), prec).unwrap(), Decimal::one());
        }
    }

    #[test]
    fn test_exp_one_reference() {
        let e = exp(&Decimal::from(1), 45).unwrap();
        let reference = dec("2.71828182845904523536028747135266249775724709");
        assert!((&e - &reference).abs() < Decimal::new(1, 40));
    }

    #[test]
    fn test_exp_negative_argument() {
        let y = exp(&Decimal::from(-1), 45).unwrap();
        let reference = dec("0.36787944117144232159552377016146086744581113");
        assert!((&y - &reference).abs() < Decimal::new(1, 40));
    }

    #[test]
    fn test_exp_invalid_precision() {
        assert_eq!(
            exp(&Decimal::from(1), 0).err(),
            Some(MathError::InvalidPrecision(0))
        );
        assert_eq!(
            exp(&Decimal::from(1), -1).err(),
            Some(MathError::InvalidPrecision(-1))
        );
    }

    #[test]
    fn test_exp_special_values() {
        assert!(exp(&Decimal::nan(), 10).unwrap().is_nan());
        assert!(exp(&Decimal::infinity(), 10).unwrap().is_nan());
    }
}
