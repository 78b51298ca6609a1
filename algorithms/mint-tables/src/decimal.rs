//! Decimal Arithmetic
//!
//! Arbitrary-precision decimals (`coefficient * 10^exponent`) and the
//! [`Context`] that rounds every arithmetic result.
//!
//! Literal construction is exact. Each operation computes the exact result
//! and rounds it once to the context precision using round-half-to-even,
//! so a chain of operations behaves like a decimal calculator fixed at
//! `precision` significant digits.

use crate::types::{Error, Result};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Pow, Signed, Zero};

/// Working precision used by the production tables.
pub const DEFAULT_PRECISION: u32 = 60;

// =============================================================================
// DECIMAL
// =============================================================================

/// An exact decimal value `coefficient * 10^exponent`.
///
/// Equality and ordering compare numeric values, so `1.0 == 1`.
#[derive(Debug, Clone)]
pub struct Decimal {
    coefficient: BigInt,
    exponent: i64,
}

impl Decimal {
    /// Build a decimal from its coefficient and base-10 exponent.
    pub const fn new(coefficient: BigInt, exponent: i64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Exact decimal for an integer.
    pub fn from_integer(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }

    /// `0`
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// `1`
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Unscaled coefficient.
    pub const fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// Base-10 exponent.
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns `true` for any representation of zero.
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Returns `true` for values strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Absolute value (exact).
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    /// Round to the nearest integer, ties to even.
    ///
    /// This is the final encoding step of every table entry.
    pub fn round_to_integer(&self) -> BigInt {
        if self.exponent >= 0 {
            return &self.coefficient * pow10(self.exponent.unsigned_abs());
        }
        let divisor = pow10(self.exponent.unsigned_abs());
        let magnitude = div_half_even(&self.coefficient.abs(), &divisor, false);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Render with exactly `places` fractional digits, ties to even.
    pub fn to_fixed_string(&self, places: u32) -> String {
        let target = -i64::from(places);
        let magnitude = if self.exponent >= target {
            self.coefficient.abs() * pow10((self.exponent - target).unsigned_abs())
        } else {
            let divisor = pow10((target - self.exponent).unsigned_abs());
            div_half_even(&self.coefficient.abs(), &divisor, false)
        };

        let digits = magnitude.to_str_radix(10);
        let places = usize::try_from(places).unwrap_or(usize::MAX);
        let padded = format!("{digits:0>width$}", width = places.saturating_add(1));
        let (integer, fraction) = padded.split_at(padded.len() - places);
        let sign = if self.is_negative() { "-" } else { "" };

        if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}.{fraction}")
        }
    }

    fn aligned(&self, other: &Self) -> (BigInt, BigInt, i64) {
        let exponent = self.exponent.min(other.exponent);
        let lhs = &self.coefficient * pow10((self.exponent - exponent).unsigned_abs());
        let rhs = &other.coefficient * pow10((other.exponent - exponent).unsigned_abs());
        (lhs, rhs, exponent)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parse `[+-]digits[.digits]` exactly, without rounding.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidLiteral(s.to_owned());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let digits = format!("{integer}{fraction}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let exponent = -i64::try_from(fraction.len()).map_err(|_| invalid())?;
        let coefficient = if negative { -magnitude } else { magnitude };
        Ok(Self::new(coefficient, exponent))
    }
}

impl fmt::Display for Decimal {
    /// Plain (non-scientific) notation preserving every stored digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent >= 0 {
            let value = &self.coefficient * pow10(self.exponent.unsigned_abs());
            write!(f, "{value}")
        } else {
            let places = u32::try_from(self.exponent.unsigned_abs()).map_err(|_| fmt::Error)?;
            f.write_str(&self.to_fixed_string(places))
        }
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Arithmetic context: significant-digit precision with half-to-even rounding.
///
/// The context is a plain value handed to every operation; there is no
/// process-wide precision setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context {
    precision: u32,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Context {
    /// Create a context with `precision` significant digits.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrecision`] for a precision of zero.
    pub fn new(precision: u32) -> Result<Self> {
        if precision == 0 {
            return Err(Error::InvalidPrecision(precision));
        }
        Ok(Self { precision })
    }

    /// Significant digits kept by every operation.
    pub const fn precision(self) -> u32 {
        self.precision
    }

    /// Round an exact value to the context precision.
    pub fn plus(self, value: &Decimal) -> Decimal {
        self.round_ratio(value.coefficient.clone(), &BigInt::one(), value.exponent)
    }

    /// `lhs + rhs`
    pub fn add(self, lhs: &Decimal, rhs: &Decimal) -> Decimal {
        let (a, b, exponent) = lhs.aligned(rhs);
        self.round_ratio(a + b, &BigInt::one(), exponent)
    }

    /// `lhs - rhs`
    pub fn sub(self, lhs: &Decimal, rhs: &Decimal) -> Decimal {
        let (a, b, exponent) = lhs.aligned(rhs);
        self.round_ratio(a - b, &BigInt::one(), exponent)
    }

    /// `lhs * rhs`
    pub fn mul(self, lhs: &Decimal, rhs: &Decimal) -> Decimal {
        self.round_ratio(
            &lhs.coefficient * &rhs.coefficient,
            &BigInt::one(),
            lhs.exponent + rhs.exponent,
        )
    }

    /// `lhs / rhs`, correctly rounded.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn div(self, lhs: &Decimal, rhs: &Decimal) -> Result<Decimal> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.round_ratio(
            lhs.coefficient.clone(),
            &rhs.coefficient,
            lhs.exponent - rhs.exponent,
        ))
    }

    /// `base^k` for an integer exponent.
    ///
    /// The power is formed exactly and rounded once; a negative `k` rounds
    /// the exact reciprocal `1 / base^|k|`.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] for zero raised to a negative power.
    pub fn powi(self, base: &Decimal, k: i32) -> Result<Decimal> {
        if k == 0 {
            return Ok(Decimal::one());
        }
        let magnitude = k.unsigned_abs();
        let power = BigInt::pow(&base.coefficient, magnitude);
        let exponent = base.exponent * i64::from(magnitude);

        if k > 0 {
            return Ok(self.round_ratio(power, &BigInt::one(), exponent));
        }
        if power.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.round_ratio(BigInt::one(), &power, -exponent))
    }

    /// Round `numerator / denominator * 10^exponent` to the context precision.
    ///
    /// `exponent` is the ideal exponent of the operation: an exact result
    /// drops trailing zeros down to it instead of padding to full precision.
    fn round_ratio(self, numerator: BigInt, denominator: &BigInt, exponent: i64) -> Decimal {
        if numerator.is_zero() {
            return Decimal::zero();
        }
        let negative = numerator.is_negative() != denominator.is_negative();
        let numerator = numerator.abs();
        let denominator = denominator.abs();
        let precision = i64::from(self.precision);

        // Scale so the integer quotient carries at least one guard digit.
        let shift = precision + 1 + digit_count(&denominator) - digit_count(&numerator);
        let (quotient, remainder) = if shift >= 0 {
            (numerator * pow10(shift.unsigned_abs())).div_rem(&denominator)
        } else {
            numerator.div_rem(&(denominator * pow10(shift.unsigned_abs())))
        };

        let excess = digit_count(&quotient) - precision;
        let divisor = pow10(excess.unsigned_abs());
        let exact = remainder.is_zero() && (&quotient % &divisor).is_zero();
        let mut coefficient = div_half_even(&quotient, &divisor, !remainder.is_zero());
        let ideal = exponent;
        let mut exponent = exponent - shift + excess;

        // 99..9 rounded up to 10^precision
        if digit_count(&coefficient) > precision {
            coefficient /= 10u32;
            exponent += 1;
        }

        if exact {
            let ten = BigInt::from(10u8);
            while exponent < ideal {
                let (reduced, digit) = coefficient.div_rem(&ten);
                if !digit.is_zero() {
                    break;
                }
                coefficient = reduced;
                exponent += 1;
            }
        }

        if negative {
            coefficient = -coefficient;
        }
        Decimal::new(coefficient, exponent)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn pow10(exponent: u64) -> BigInt {
    Pow::pow(BigInt::from(10u8), exponent)
}

fn digit_count(value: &BigInt) -> i64 {
    if value.is_zero() {
        return 1;
    }
    i64::try_from(value.magnitude().to_str_radix(10).len()).unwrap_or(i64::MAX)
}

/// Divide non-negative `value` by `divisor`, ties to even.
///
/// `sticky` marks a non-zero remainder discarded by an earlier division, which
/// turns an apparent tie into a round-up.
fn div_half_even(value: &BigInt, divisor: &BigInt, sticky: bool) -> BigInt {
    let (mut quotient, dropped) = value.div_rem(divisor);
    match (dropped * 2u8).cmp(divisor) {
        Ordering::Greater => quotient += 1u8,
        Ordering::Equal if sticky || quotient.is_odd() => quotient += 1u8,
        _ => {}
    }
    quotient
}

// =============================================================================
// TESTS
// =============================================================================
