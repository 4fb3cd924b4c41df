// ============================================================================
// Decmath Library
// Precision-adaptive transcendental functions over decimal arithmetic
// ============================================================================

//! # Decmath
//!
//! Transcendental functions (sine, cosine, exponential, natural
//! logarithm, and π) computed to an arbitrary, caller-specified number of
//! significant decimal digits on top of arbitrary-precision decimal
//! arithmetic.
//!
//! ## Features
//!
//! - **Adaptive guard-digit tracking**: every intermediate division is
//!   carried out to exactly as many digits as still matter at the running
//!   sum's resolution, never fewer than a fixed guard floor
//! - **One stepping discipline, five drivers**: a single evaluator loop
//!   parameterized by a per-function recurrence trait
//! - **Exact decimal base**: no binary floating point anywhere in the loop
//! - **Special-value flow**: not-a-number and infinity travel through
//!   computations as values instead of panics or errors
//!
//! ## Example
//!
//! ```rust
//! use decmath::prelude::*;
//!
//! // π to 30 significant digits
//! let p = pi(30).unwrap();
//! assert!(p.to_string().starts_with("3.14159265358979323846264338327"));
//!
//! // the Pythagorean identity holds to the requested precision
//! let x: Decimal = "2.5".parse().unwrap();
//! let s = sin(&x, 30).unwrap();
//! let c = cos(&x, 30).unwrap();
//! let sum = &(&s * &s) + &(&c * &c);
//! assert!((&sum - &Decimal::one()).abs() < Decimal::new(1, 28));
//! ```

pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{cos, exp, log, pi, sin, SeriesEvaluator};
    pub use crate::interfaces::SeriesExpansion;
    pub use crate::numeric::{Decimal, MathError, MathResult};
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// sin² + cos² = 1 across the representable grid [−4, 4] in
        /// hundredth steps.
        #[test]
        fn prop_pythagorean_identity(numer in -400i64..=400) {
            let x = Decimal::new(numer, 2);
            let s = sin(&x, 25).unwrap();
            let c = cos(&x, 25).unwrap();
            let sum = &(&s * &s) + &(&c * &c);
            let error = (&sum - &Decimal::one()).abs();
            prop_assert!(error < Decimal::new(1, 22));
        }

        /// exp(ln(x)) = x for positive x up to 100.
        #[test]
        fn prop_exp_log_round_trip(numer in 1i64..=10_000) {
            let x = Decimal::new(numer, 2);
            let y = exp(&log(&x, 25).unwrap(), 25).unwrap();
            let error = (&y - &x).abs();
            let bound = &x * &Decimal::new(1, 22);
            prop_assert!(error < bound);
        }

        /// Larger requested precision never loses digits of agreement.
        #[test]
        fn prop_precision_is_monotonic(prec in 1i64..=40) {
            let coarse = exp(&Decimal::from(1), prec).unwrap();
            let fine = exp(&Decimal::from(1), prec + 10).unwrap();
            let drift = (&coarse - &fine).abs();
            prop_assert!(drift < Decimal::new(1, prec));
        }
    }
}
