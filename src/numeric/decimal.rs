// ============================================================================
// Arbitrary-Precision Decimal
// BigDecimal-backed value type with special values and explicit-precision ops
// ============================================================================

use super::errors::MathError;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Pow, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Arbitrary-precision decimal value.
///
/// Wraps `bigdecimal::BigDecimal` and layers IEEE-style special values
/// (not-a-number, signed infinity) on top of it, so that degenerate inputs
/// can flow through a computation chain as values instead of forcing every
/// call site to check for them.
///
/// Addition, subtraction, and multiplication through the standard operators
/// are exact. Multiplication and division to a caller-chosen number of
/// significant digits go through [`mul_prec`](Decimal::mul_prec) and
/// [`div_prec`](Decimal::div_prec).
///
/// # Example
/// ```
/// use decmath::numeric::Decimal;
///
/// let a: Decimal = "0.1".parse().unwrap();
/// let b: Decimal = "0.2".parse().unwrap();
/// assert_eq!(&a + &b, "0.3".parse::<Decimal>().unwrap());   // exact, unlike binary floats
///
/// let third = Decimal::from(1).div_prec(&Decimal::from(3), 5);
/// assert_eq!(third, "0.33333".parse::<Decimal>().unwrap());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimal {
    repr: Repr,
}

#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Repr {
    Finite(BigDecimal),
    Nan,
    Inf { negative: bool },
}

/// 10^power as a big integer, for pre-division scaling.
fn ten_to(power: u64) -> BigInt {
    Pow::pow(BigInt::from(10), power)
}

impl Decimal {
    /// Significant digits carried by an IEEE 754 double.
    ///
    /// This is the guard-digit floor: intermediate divisions are never
    /// carried out to fewer digits than this, whatever the adaptive budget
    /// says.
    pub const DOUBLE_FIG: u64 = 16;

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    fn finite(value: BigDecimal) -> Self {
        Self {
            repr: Repr::Finite(value),
        }
    }

    /// The not-a-number value.
    #[inline]
    pub fn nan() -> Self {
        Self { repr: Repr::Nan }
    }

    /// Positive infinity.
    #[inline]
    pub fn infinity() -> Self {
        Self {
            repr: Repr::Inf { negative: false },
        }
    }

    /// Negative infinity.
    #[inline]
    pub fn neg_infinity() -> Self {
        Self {
            repr: Repr::Inf { negative: true },
        }
    }

    /// Create `digits × 10^(−scale)`.
    ///
    /// # Example
    /// ```
    /// use decmath::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::new(-4, 2), "-0.04".parse::<Decimal>().unwrap());
    /// ```
    pub fn new(digits: i64, scale: i64) -> Self {
        Self::finite(BigDecimal::new(BigInt::from(digits), scale))
    }

    /// Exact zero.
    pub fn zero() -> Self {
        Self::finite(BigDecimal::zero())
    }

    /// Exact one.
    pub fn one() -> Self {
        Self::finite(BigDecimal::one())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check if the value is not-a-number.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::Nan)
    }

    /// Check if the value is positive or negative infinity.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self.repr, Repr::Inf { .. })
    }

    /// Check if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(&self.repr, Repr::Finite(d) if d.is_zero())
    }

    /// Check if the value is strictly positive (including +∞).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Check if the value is strictly negative (including −∞).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    fn signum(&self) -> i8 {
        match &self.repr {
            Repr::Finite(d) => match d.sign() {
                Sign::Minus => -1,
                Sign::NoSign => 0,
                Sign::Plus => 1,
            },
            Repr::Nan => 0,
            Repr::Inf { negative: true } => -1,
            Repr::Inf { negative: false } => 1,
        }
    }

    /// Decimal order of magnitude: the exponent `e` in the normalized form
    /// `0.d₁d₂… × 10^e`.
    ///
    /// Zero and special values report 0.
    ///
    /// # Example
    /// ```
    /// use decmath::numeric::Decimal;
    ///
    /// assert_eq!("3.14".parse::<Decimal>().unwrap().exponent(), 1);
    /// assert_eq!("0.05".parse::<Decimal>().unwrap().exponent(), -1);
    /// ```
    pub fn exponent(&self) -> i64 {
        match &self.repr {
            Repr::Finite(d) => {
                if d.is_zero() {
                    return 0;
                }
                let (_, scale) = d.as_bigint_and_exponent();
                d.digits() as i64 - scale
            },
            _ => 0,
        }
    }

    /// Absolute value. NaN stays NaN; both infinities map to +∞.
    pub fn abs(&self) -> Self {
        match &self.repr {
            Repr::Finite(d) => Self::finite(d.abs()),
            Repr::Nan => Self::nan(),
            Repr::Inf { .. } => Self::infinity(),
        }
    }

    // ========================================================================
    // Explicit-Precision Arithmetic
    // ========================================================================

    /// Multiply, rounded to `prec` significant digits.
    ///
    /// The product is formed exactly and then rounded, so the result is
    /// correctly rounded for any `prec >= 1` (zero is treated as 1).
    pub fn mul_prec(&self, rhs: &Decimal, prec: u64) -> Decimal {
        match (&self.repr, &rhs.repr) {
            (Repr::Finite(a), Repr::Finite(b)) => Self::finite((a * b).with_prec(prec.max(1))),
            _ => self * rhs,
        }
    }

    /// Divide, rounded to `prec` significant digits.
    ///
    /// The numerator/denominator pair is scaled by a power of ten so that
    /// the integer quotient carries two digits beyond `prec`, then the
    /// quotient is rounded down to `prec` digits.
    ///
    /// Division involving special values follows the usual rules: NaN
    /// propagates, ∞/∞ is NaN, finite/∞ is zero, division by zero yields a
    /// signed infinity (NaN for 0/0).
    pub fn div_prec(&self, rhs: &Decimal, prec: u64) -> Decimal {
        let prec = prec.max(1);
        match (&self.repr, &rhs.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => Self::nan(),
            (Repr::Inf { .. }, Repr::Inf { .. }) => Self::nan(),
            (Repr::Inf { negative }, Repr::Finite(b)) => {
                if *negative == (b.sign() == Sign::Minus) {
                    Self::infinity()
                } else {
                    Self::neg_infinity()
                }
            },
            (Repr::Finite(_), Repr::Inf { .. }) => Self::zero(),
            (Repr::Finite(a), Repr::Finite(b)) => {
                if b.is_zero() {
                    return match a.sign() {
                        Sign::NoSign => Self::nan(),
                        Sign::Plus => Self::infinity(),
                        Sign::Minus => Self::neg_infinity(),
                    };
                }
                if a.is_zero() {
                    return Self::zero();
                }

                let (a_int, a_scale) = a.as_bigint_and_exponent();
                let (b_int, b_scale) = b.as_bigint_and_exponent();

                // Scale so the integer quotient holds prec + 2 digits; the
                // truncation error then sits below the rounding boundary.
                let digit_gap = a.digits() as i64 - b.digits() as i64;
                let extra = prec as i64 + 2 - digit_gap;
                let (numerator, denominator) = if extra >= 0 {
                    (a_int * ten_to(extra as u64), b_int)
                } else {
                    (a_int, b_int * ten_to(extra.unsigned_abs()))
                };

                let quotient = numerator / denominator;
                Self::finite(BigDecimal::new(quotient, a_scale - b_scale + extra).with_prec(prec))
            },
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Finite(a), Repr::Finite(b)) => a == b,
            (Repr::Inf { negative: a }, Repr::Inf { negative: b }) => a == b,
            // NaN compares unequal to everything, itself included
            _ => false,
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.repr, &other.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => None,
            (Repr::Finite(a), Repr::Finite(b)) => a.partial_cmp(b),
            (Repr::Inf { negative: a }, Repr::Inf { negative: b }) => {
                Some(if a == b {
                    Ordering::Equal
                } else if *a {
                    Ordering::Less
                } else {
                    Ordering::Greater
                })
            },
            (Repr::Inf { negative }, _) => {
                Some(if *negative { Ordering::Less } else { Ordering::Greater })
            },
            (_, Repr::Inf { negative }) => {
                Some(if *negative { Ordering::Greater } else { Ordering::Less })
            },
        }
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        match &self.repr {
            Repr::Finite(d) => Decimal::finite(-d),
            Repr::Nan => Decimal::nan(),
            Repr::Inf { negative } => Decimal {
                repr: Repr::Inf {
                    negative: !negative,
                },
            },
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        -&self
    }
}

impl Add<&Decimal> for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        match (&self.repr, &rhs.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => Decimal::nan(),
            (Repr::Inf { negative: a }, Repr::Inf { negative: b }) => {
                if a == b {
                    Decimal {
                        repr: Repr::Inf { negative: *a },
                    }
                } else {
                    // ∞ + (−∞) has no value
                    Decimal::nan()
                }
            },
            (Repr::Inf { negative }, _) | (_, Repr::Inf { negative }) => Decimal {
                repr: Repr::Inf {
                    negative: *negative,
                },
            },
            (Repr::Finite(a), Repr::Finite(b)) => Decimal::finite(a + b),
        }
    }
}

impl Sub<&Decimal> for &Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: &Decimal) -> Decimal {
        self + &(-rhs)
    }
}

impl Mul<&Decimal> for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        match (&self.repr, &rhs.repr) {
            (Repr::Nan, _) | (_, Repr::Nan) => Decimal::nan(),
            (Repr::Inf { .. }, _) | (_, Repr::Inf { .. }) => {
                if self.is_zero() || rhs.is_zero() {
                    Decimal::nan()
                } else if (self.signum() < 0) != (rhs.signum() < 0) {
                    Decimal::neg_infinity()
                } else {
                    Decimal::infinity()
                }
            },
            (Repr::Finite(a), Repr::Finite(b)) => Decimal::finite(a * b),
        }
    }
}

impl Add for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Decimal) -> Decimal {
        &self - &rhs
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: Decimal) -> Decimal {
        &self * &rhs
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Decimal::finite(BigDecimal::zero())
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl One for Decimal {
    fn one() -> Self {
        Decimal::finite(BigDecimal::one())
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::finite(BigDecimal::from(value))
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::finite(BigDecimal::from(value))
    }
}

// ============================================================================
// String Parsing, Display and Debug
// ============================================================================

impl FromStr for Decimal {
    type Err = MathError;

    /// Parse from a decimal string.
    ///
    /// Accepts ordinary decimal literals (`"123"`, `"-0.04"`, `"1e-3"`) as
    /// well as the special spellings `"NaN"`, `"Infinity"`, `"+Infinity"`,
    /// and `"-Infinity"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NaN" => Ok(Self::nan()),
            "Infinity" | "+Infinity" => Ok(Self::infinity()),
            "-Infinity" => Ok(Self::neg_infinity()),
            trimmed => BigDecimal::from_str(trimmed)
                .map(Self::finite)
                .map_err(|_| MathError::InvalidLiteral),
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Finite(d) => write!(f, "{}", d),
            Repr::Nan => write!(f, "NaN"),
            Repr::Inf { negative: false } => write!(f, "Infinity"),
            Repr::Inf { negative: true } => write!(f, "-Infinity"),
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
