// ============================================================================
// Cosine Driver
// Alternating even-power expansion: cos(x) = Σ (−1)^k x^(2k) / (2k)!
// ============================================================================

use crate::engine::SeriesEvaluator;
use crate::interfaces::SeriesExpansion;
use crate::numeric::{Decimal, MathResult};

/// Computes cos(x) to at least `prec` significant digits.
///
/// Same contract as [`sin`](crate::engine::sin): `InvalidPrecision` for a
/// non-positive `prec`, not-a-number result for not-a-number or infinite
/// `x`.
///
/// # Example
/// ```
/// use decmath::engine::cos;
/// use decmath::numeric::Decimal;
///
/// let y = cos(&Decimal::from(1), 20).unwrap();
/// assert!(y.to_string().starts_with("0.5403023058"));
/// ```
pub fn cos(x: &Decimal, prec: i64) -> MathResult<Decimal> {
    let evaluator = SeriesEvaluator::new(prec)?;
    if x.is_nan() || x.is_infinite() {
        return Ok(Decimal::nan());
    }

    let mut series = CosineSeries::new(x);
    Ok(evaluator.sum(&mut series, Decimal::one(), Decimal::one()))
}

/// Recurrence state for the cosine expansion.
///
/// Identical stepping to the sine recurrence; only the seeds differ. The
/// power accumulator starts at one so the first update lands on x², and
/// the index starts at zero so the denominator picks up 1·2 = 2! first.
pub struct CosineSeries {
    x_squared: Decimal,
    power: Decimal,
    denominator: Decimal,
    index: i64,
    sign: i8,
}

impl CosineSeries {
    pub fn new(x: &Decimal) -> Self {
        Self {
            x_squared: x * x,
            power: Decimal::one(),
            denominator: Decimal::one(),
            index: 0,
            sign: 1,
        }
    }
}

impl SeriesExpansion for CosineSeries {
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
        "cos"
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
    fn test_cos_zero() {
        for prec in [1, 10, 100] {
            assert_eq!(cos(&Decimal::zero(), prec).unwrap(), Decimal::one());
        }
    }

    #[test]
    fn test_cos_one_reference() {
        let y = cos(&Decimal::from(1), 45).unwrap();
        let reference = dec("0.54030230586813971740093660744297660373231042");
        assert!((&y - &reference).abs() < Decimal::new(1, 40));
    }

    #[test]
    fn test_cos_is_even() {
        let pos = cos(&dec("2.5"), 30).unwrap();
        let neg = cos(&dec("-2.5"), 30).unwrap();
        assert!((&pos - &neg).abs() < Decimal::new(1, 28));
    }

    #[test]
    fn test_cos_invalid_precision() {
        assert_eq!(
            cos(&Decimal::from(1), 0).err(),
            Some(MathError::InvalidPrecision(0))
        );
        assert_eq!(
            cos(&Decimal::from(1), -2).err(),
            Some(MathError::InvalidPrecision(-2))
        );
    }

    #[test]
    fn test_cos_special_values() {
        assert!(cos(&Decimal::nan(), 10).unwrap().is_nan());
        assert!(cos(&Decimal::infinity(), 10).unwrap().is_nan());
        assert!(cos(&Decimal::neg_infinity(), 10).unwrap().is_nan());
    }
}
