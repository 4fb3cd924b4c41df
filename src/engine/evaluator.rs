// ============================================================================
// Series Evaluator
// Precision-adaptive accumulate-until-converged loop shared by all drivers
// ============================================================================

use crate::interfaces::SeriesExpansion;
use crate::numeric::{Decimal, MathError, MathResult};

/// Adaptive summation loop shared by every series driver.
///
/// The evaluator owns the digit budgets derived from the requested
/// precision:
///
/// - `working` = requested + [`Decimal::DOUBLE_FIG`] guard digits, the
///   total number of significant digits the final sum must get right;
/// - `doubled` = 2 × `working`, the precision for intermediate power and
///   denominator updates, where rounding error from two operand
///   magnitudes compounds.
///
/// Each iteration measures how many digits of the next term still fall
/// inside the running sum's significant window: the magnitude gap between
/// sum and term is subtracted from `working`, and the closing division of
/// the term is carried out to exactly that many digits (never fewer than
/// `DOUBLE_FIG`). The loop stops when the term is exactly zero or when the
/// window has closed, whichever comes first, checked *before* the next
/// term is produced, so a term too small to matter is never computed.
///
/// # Example
/// ```
/// use decmath::engine::SeriesEvaluator;
///
/// // precision is validated before any state is created
/// assert!(SeriesEvaluator::new(0).is_err());
/// assert!(SeriesEvaluator::new(20).is_ok());
/// ```
pub struct SeriesEvaluator {
    requested: u64,
    working: u64,
    doubled: u64,
}

impl SeriesEvaluator {
    /// Create an evaluator for `prec` requested significant digits.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `prec` is zero or negative.
    pub fn new(prec: i64) -> MathResult<Self> {
        if prec <= 0 {
            return Err(MathError::InvalidPrecision(prec));
        }
        let working = prec as u64 + Decimal::DOUBLE_FIG;
        Ok(Self {
            requested: prec as u64,
            working,
            doubled: working * 2,
        })
    }

    /// Requested significant digits.
    #[inline]
    pub fn requested_digits(&self) -> u64 {
        self.requested
    }

    /// Total working digits (requested plus the guard-digit floor).
    #[inline]
    pub fn working_digits(&self) -> u64 {
        self.working
    }

    /// Doubled working digits, for intermediate multiplies.
    #[inline]
    pub fn doubled_digits(&self) -> u64 {
        self.doubled
    }

    /// Run the accumulation loop to convergence.
    ///
    /// # Arguments
    /// * `series` - the recurrence to step
    /// * `partial_sum` - seed value of the accumulator
    /// * `first_term` - seed term driving the first stopping check; pass
    ///   the seed sum itself for series whose zeroth term is the seed, or
    ///   one for series that start accumulating from nothing
    ///
    /// # Returns
    /// The accumulated sum, correct to at least the requested digits for
    /// any convergent recurrence.
    pub fn sum<S: SeriesExpansion>(
        &self,
        series: &mut S,
        partial_sum: Decimal,
        first_term: Decimal,
    ) -> Decimal {
        let mut sum = partial_sum;
        let mut term = first_term;
        let mut steps = 0u32;

        while let Some(term_prec) = self.term_digits(&sum, &term) {
            term = series.next_term(self.doubled, term_prec);
            sum = &sum + &term;
            steps += 1;
        }

        tracing::debug!(
            "{} converged after {} terms at {} requested digits",
            series.name(),
            steps,
            self.requested
        );
        sum
    }

    /// Digits of the next term that still land inside the sum's precision
    /// window, clamped up to the guard floor. `None` once the series has
    /// converged: either the term is exactly zero, or the magnitude gap
    /// has eaten the whole working budget.
    fn term_digits(&self, sum: &Decimal, term: &Decimal) -> Option<u64> {
        if term.is_zero() {
            return None;
        }
        let gap = (sum.exponent() - term.exponent()).unsigned_abs();
        if gap >= self.working {
            return None;
        }
        Some((self.working - gap).max(Decimal::DOUBLE_FIG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Geometric halving: 1 + 1/2 + 1/4 + … → 2
    struct Halving {
        term: Decimal,
    }

    impl SeriesExpansion for Halving {
        fn next_term(&mut self, _work_prec: u64, term_prec: u64) -> Decimal {
            self.term = self.term.div_prec(&Decimal::from(2), term_prec);
            self.term.clone()
        }

        fn name(&self) -> &str {
            "halving"
        }
    }

    /// A series that must never be stepped.
    struct Unsteppable;

    impl SeriesExpansion for Unsteppable {
        fn next_term(&mut self, _work_prec: u64, _term_prec: u64) -> Decimal {
            panic!("stepped a converged series");
        }

        fn name(&self) -> &str {
            "unsteppable"
        }
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            SeriesEvaluator::new(0).err(),
            Some(MathError::InvalidPrecision(0))
        );
        assert_eq!(
            SeriesEvaluator::new(-3).err(),
            Some(MathError::InvalidPrecision(-3))
        );
    }

    #[test]
    fn test_digit_budgets() {
        let evaluator = SeriesEvaluator::new(10).unwrap();
        assert_eq!(evaluator.requested_digits(), 10);
        assert_eq!(evaluator.working_digits(), 10 + Decimal::DOUBLE_FIG);
        assert_eq!(evaluator.doubled_digits(), 2 * (10 + Decimal::DOUBLE_FIG));
    }

    #[test]
    fn test_geometric_convergence() {
        let evaluator = SeriesEvaluator::new(20).unwrap();
        let mut series = Halving {
            term: Decimal::one(),
        };
        let total = evaluator.sum(&mut series, Decimal::one(), Decimal::one());

        let error = (&Decimal::from(2) - &total).abs();
        assert!(error < Decimal::new(1, 20), "error was {}", error);
    }

    #[test]
    fn test_zero_term_short_circuits() {
        let evaluator = SeriesEvaluator::new(10).unwrap();
        let seed = Decimal::from(7);
        let total = evaluator.sum(&mut Unsteppable, seed.clone(), Decimal::zero());
        assert_eq!(total, seed);
    }
}
