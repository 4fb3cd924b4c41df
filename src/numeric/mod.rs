// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic for adaptive series evaluation
// ============================================================================
//
// This module provides:
// - Decimal: BigDecimal-backed value type with NaN/infinity special values
//   and multiply/divide to an explicit number of significant digits
// - MathError: error types for precision validation and domain checks
//
// Design principles:
// - No binary floating-point operations anywhere
// - Exact add/sub/mul; rounding only where a precision is stated
// - Special values propagate as values, never as errors

mod decimal;
mod errors;

pub use decimal::Decimal;
pub use errors::{MathError, MathResult};
