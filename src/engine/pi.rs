// ============================================================================
// Pi Driver
// Machin identity: π = 16·atan(1/5) − 4·atan(1/239), two passes, one sum
// ============================================================================

use crate::engine::SeriesEvaluator;
use crate::interfaces::SeriesExpansion;
use crate::numeric::{Decimal, MathResult};

/// Computes π to at least `prec` significant digits.
///
/// Both arctangent subseries accumulate into the same running sum, one
/// after the other, under the shared stopping rule: the second pass's
/// budget is measured against the total the first pass produced.
///
/// The two passes update their running factor differently. 1/5² scales to
/// the exact decimal −0.04, so the first factor is multiplied exactly each
/// step; 1/239² has no finite decimal expansion, so the second factor
/// shrinks through a division rounded to the term budget.
///
/// # Errors
/// Returns `InvalidPrecision` if `prec` is zero or negative.
///
/// # Example
/// ```
/// use decmath::engine::pi;
///
/// let p = pi(10).unwrap();
/// assert!(p.to_string().starts_with("3.141592653"));
/// ```
pub fn pi(prec: i64) -> MathResult<Decimal> {
    let evaluator = SeriesEvaluator::new(prec)?;

    // 16·atan(1/5): seed factor −80, exact ×(−0.04) per step
    let mut fifth = ArctanSeries::by_scaling(Decimal::from(-80), Decimal::new(-4, 2));
    let sum = evaluator.sum(&mut fifth, Decimal::zero(), Decimal::one());

    // −4·atan(1/239): seed factor 956, rounded ÷(−57121) per step
    let mut inverse_239 = ArctanSeries::by_division(Decimal::from(956), Decimal::from(-57121));
    Ok(evaluator.sum(&mut inverse_239, sum, Decimal::one()))
}

/// Recurrence state for one arctangent subseries.
///
/// Each step first advances the running factor by the fixed per-step
/// ratio, then divides it by the current odd index to form the term.
pub struct ArctanSeries {
    factor: Decimal,
    update: FactorUpdate,
    index: i64,
}

enum FactorUpdate {
    /// Exact multiply; the per-step ratio has a finite decimal expansion
    Scale(Decimal),
    /// Rounded divide; the per-step divisor's reciprocal does not
    Divide(Decimal),
}

impl ArctanSeries {
    pub fn by_scaling(factor: Decimal, ratio: Decimal) -> Self {
        Self {
            factor,
            update: FactorUpdate::Scale(ratio),
            index: 1,
        }
    }

    pub fn by_division(factor: Decimal, divisor: Decimal) -> Self {
        Self {
            factor,
            update: FactorUpdate::Divide(divisor),
            index: 1,
        }
    }
}

impl SeriesExpansion for ArctanSeries {
    fn next_term(&mut self, _work_prec: u64, term_prec: u64) -> Decimal {
        self.factor = match &self.update {
            FactorUpdate::Scale(ratio) => &self.factor * ratio,
            FactorUpdate::Divide(divisor) => self.factor.div_prec(divisor, term_prec),
        };

        let term = self.factor.div_prec(&Decimal::from(self.index), term_prec);
        self.index += 2;
        term
    }

    fn name(&self) -> &str {
        match &self.update {
            FactorUpdate::Scale(_) => "atan-scaled",
            FactorUpdate::Divide(_) => "atan-divided",
        }
    }
}
