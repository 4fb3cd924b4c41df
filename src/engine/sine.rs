// ============================================================================
// Sine Driver
// Alternating odd-power expansion: sin(x) = Σ (−1)^k x^(2k+1) / (2k+1)!
// ============================================================================

use crate::engine::SeriesEvaluator;
use crate::interfaces::SeriesExpansion;
use crate::numeric::{Decimal, MathResult};

/// Computes sin(x) to at least `prec` significant digits.
///
/// # Arguments
/// * `x` - angle in radians
/// * `prec` - requested significant digits, must be positive
///
/// # Errors
/// Returns `InvalidPrecision` if `prec` is zero or negative. Not-a-number
/// or infinite `x` yields a not-a-number result, not an error.
///
/// # Example
/// ```
/// use decmath::engine::sin;
/// use decmath::numeric::Decimal;
///
/// let y = sin(&Decimal::from(1), 20).unwrap();
/// assert!(y.to_string().starts_with("0.8414709848"));
/// ```
pub fn sin(x: &Decimal, prec: i64) -> MathResult<Decimal> {
    let evaluator = SeriesEvaluator::new(prec)?;
    if x.is_nan() || x.is_infinite() {
        return Ok(Decimal::nan());
    }

    let mut series = SineSeries::new(x);
    Ok(evaluator.sum(&mut series, x.clone(), x.clone()))
}

/// Recurrence state for the sine expansion.
///
/// The running power gains a factor of x² each step, the denominator gains
/// the next two factorial factors, and the sign alternates. The seed term
/// (k = 0) is x itself, supplied by the driver.
pub struct SineSeries {
    x_squared: Decimal,
    power: Decimal,
    denominator: Decimal,
    index: i64,
    sign: i8,
}

impl SineSeries {
    pub fn new(x: &Decimal) -> Self {
        Self {
            x_squared: x * x,
            power: x.clone(),
            denominator: Decimal::one(),
            index: 1,
            sign: 1,
        }
    }
}

impl SeriesExpansion for SineSeries {
    fn next_term(&mut self, work_prec: u64, term_prec: u64) -> Decimal {
        self.sign = -self.sign;
        self.power = self.x_squared.mul_prec(&self.power, work_prec);
        self.index += 2;
        self.denominator = &self.denominator * &Decimal::from((self.index - 1) * self.index);

        let term = self.power.div_prec(&self.denominator, term_prec);
        if self.sign < 0 {
            -term
        } else {
            term
        }
    }

    fn name(&self) -> &str {
        "sin"
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
    fn test_sin_zero() {
        for prec in [1, 10, 100] {
            assert!(sin(&Decimal::zero(), prec).unwrap().is_zero());
        }
    }

    #[test]
    fn test_sin_one_reference() {
        let y = sin(&Decimal::from(1), 45).unwrap();
        let reference = dec("0.84147098480789650665250232163029899962256306");
        assert!((&y - &reference).abs() < Decimal::new(1, 40));
    }

    #[test]
    fn test_sin_is_odd() {
        let pos = sin(&dec("2.5"), 30).unwrap();
        let neg = sin(&dec("-2.5"), 30).unwrap();
        assert!((&pos + &neg).abs() < Decimal::new(1, 28));
    }

    #[test]
    fn test_sin_invalid_precision() {
        assert_eq!(
            sin(&Decimal::from(1), 0).err(),
            Some(MathError::InvalidPrecision(0))
        );
        assert_eq!(
            sin(&Decimal::from(1), -5).err(),
            Some(MathError::InvalidPrecision(-5))
        );
    }

    #[test]
    fn test_sin_special_values() {
        assert!(sin(&Decimal::nan(), 10).unwrap().is_nan());
        assert!(sin(&Decimal::infinity(), 10).unwrap().is_nan());
        assert!(sin(&Decimal::neg_infinity(), 10).unwrap().is_nan());
    }

    #[test]
    fn test_precision_error_precedes_special_check() {
        assert_eq!(
            sin(&Decimal::nan(), 0).err(),
            Some(MathError::InvalidPrecision(0))
        );
    }
}
