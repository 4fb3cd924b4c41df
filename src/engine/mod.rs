// ============================================================================
// Engine Module
// Contains the series evaluator and the per-function drivers
// ============================================================================

mod cosine;
mod evaluator;
mod exponential;
mod logarithm;
mod pi;
mod sine;

pub use cosine::{cos, CosineSeries};
pub use evaluator::SeriesEvaluator;
pub use exponential::{exp, ExpSeries};
pub use logarithm::{log, LogSeries};
pub use pi::{pi, ArctanSeries};
pub use sine::{sin, SineSeries};
