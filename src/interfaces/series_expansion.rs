// ============================================================================
// Series Expansion Interface
// Defines the contract for pluggable series recurrences
// ============================================================================

use crate::numeric::Decimal;

/// Strategy pattern interface for series recurrences
/// Implementations: SineSeries, CosineSeries, ExpSeries, LogSeries, ArctanSeries
///
/// One call to [`next_term`](SeriesExpansion::next_term) advances the
/// recurrence by one step: running powers and factorial-like denominators
/// are updated, the alternating sign (where the series has one) is flipped,
/// and the freshly formed term is returned for accumulation.
pub trait SeriesExpansion {
    /// Produce the next term of the expansion.
    ///
    /// # Arguments
    /// * `work_prec` - significant digits for the internal power/denominator
    ///   updates (the doubled working precision)
    /// * `term_prec` - significant digits for the closing division that
    ///   forms the term; only this many digits of the term still land
    ///   inside the running sum's precision window
    ///
    /// # Returns
    /// The signed term to add to the partial sum
    fn next_term(&mut self, work_prec: u64, term_prec: u64) -> Decimal;

    /// Get the series name for logging/diagnostics
    fn name(&self) -> &str;
}
