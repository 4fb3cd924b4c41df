// ============================================================================
// Natural Logarithm Driver
// Area-hyperbolic expansion: ln(x) = 2 Σ z^(2k+1) / (2k+1), z = (x−1)/(x+1)
// ============================================================================

use crate::engine::SeriesEvaluator;
use crate::interfaces::SeriesExpansion;
use crate::numeric::{Decimal, MathError, MathResult};

/// Computes ln(x) to at least `prec` significant digits.
///
/// The substitution `z = (x−1)/(x+1)` is formed once up front at the
/// working precision; the series then runs over odd powers of z.
///
/// # Errors
/// Returns `InvalidPrecision` if `prec` is zero or negative, and
/// `NonPositiveArgument` if `x` is zero, negative, or negative infinity:
/// a genuine domain error rather than a propagated special value.
/// Not-a-number and positive infinity pass through unchanged.
///
/// # Example
/// ```
/// use decmath::engine::log;
/// use decmath::numeric::Decimal;
///
/// let ln2 = log(&Decimal::from(2), 20).unwrap();
/// assert!(ln2.to_string().starts_with("0.69314718055"));
/// ```
pub fn log(x: &Decimal, prec: i64) -> MathResult<Decimal> {
    let evaluator = SeriesEvaluator::new(prec)?;
    if x.is_nan() {
        return Ok(x.clone());
    }
    if x.is_infinite() {
        if x.is_negative() {
            return Err(MathError::NonPositiveArgument);
        }
        return Ok(x.clone());
    }
    if !x.is_positive() {
        return Err(MathError::NonPositiveArgument);
    }

    let one = Decimal::one();
    let ratio = (x - &one).div_prec(&(x + &one), evaluator.working_digits());
    let first = &ratio + &ratio;

    let mut series = LogSeries::new(&ratio);
    Ok(evaluator.sum(&mut series, first.clone(), first))
}

/// Recurrence state for the logarithm expansion.
///
/// The running power gains a factor of z² each step and the denominator is
/// the odd index itself, not a factorial, so the index doubles as the
/// divisor.
pub struct LogSeries {
    z_squared: Decimal,
    power: Decimal,
    index: i64,
}

impl LogSeries {
    pub fn new(z: &Decimal) -> Self {
        Self {
            z_squared: z * z,
            power: z.clone(),
            index: 1,
        }
    }
}

impl SeriesExpansion for LogSeries {
    fn next_term(&mut self, work_prec: u64, term_prec: u64) -> Decimal {
        self.power = self.z_squared.mul_prec(&self.power, work_prec);
        self.index += 2;
        let numerator = &self.power + &self.power;
        numerator.div_prec(&Decimal::from(self.index), term_prec)
    }

    fn name(&self) -> &str {
        "ln"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_log_one_is_zero() {
        for prec in [1, 10, 100] {
            assert!(log(&Decimal::from(1), prec).unwrap().is_zero());
        }
    }

    #[test]
    fn test_log_two_reference() {
        let ln2 = log(&Decimal::from(2), 45).unwrap();
        let reference = dec("0.69314718055994530941723212145817656807550013");
        assert!((&ln2 - &reference).abs() < Decimal::new(1, 40));
    }

    #[test]
    fn test_log_reciprocal_negates() {
        let ln2 = log(&Decimal::from(2), 30).unwrap();
        let ln_half = log(&dec("0.5"), 30).unwrap();
        assert!((&ln2 + &ln_half).abs() < Decimal::new(1, 28));
    }

    #[test]
    fn test_log_domain_errors() {
        assert_eq!(
            log(&Decimal::from(-1), 10).err(),
            Some(MathError::NonPositiveArgument)
        );
        assert_eq!(
            log(&Decimal::zero(), 10).err(),
            Some(MathError::NonPositiveArgument)
        );
        assert_eq!(
            log(&Decimal::neg_infinity(), 10).err(),
            Some(MathError::NonPositiveArgument)
        );
    }

    #[test]
    fn test_log_invalid_precision() {
        assert_eq!(
            log(&Decimal::from(2), 0).err(),
            Some(MathError::InvalidPrecision(0))
        );
        // precision is checked before the domain
        assert_eq!(
            log(&Decimal::from(-1), 0).err(),
            Some(MathError::InvalidPrecision(0))
        );
    }

    #[test]
    fn test_log_special_passthrough() {
        assert!(log(&Decimal::nan(), 10).unwrap().is_nan());
        assert_eq!(log(&Decimal::infinity(), 10).unwrap(), Decimal::infinity());
    }
}
