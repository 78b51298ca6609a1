//! 64.64 Fixed-Point Encoding
//!
//! A signed 128-bit integer whose value is the real number times `2^64`:
//! 64 integer bits, 64 fractional bits. This is the representation the
//! consuming contract stores in its `int128` constants.

use crate::decimal::{Context, Decimal};
use crate::types::{Error, Result};
use core::fmt;
use num_bigint::BigInt;
use num_traits::{One, Pow};

/// Number of fractional bits.
pub const FRACTIONAL_BITS: u32 = 64;

/// A 64.64 fixed-point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed64x64(i128);

impl Fixed64x64 {
    /// `1.0`, i.e. `2^64`.
    pub const ONE: Self = Self(1 << FRACTIONAL_BITS);

    /// Wrap raw bits.
    pub const fn from_bits(bits: i128) -> Self {
        Self(bits)
    }

    /// Raw bits as stored on chain.
    pub const fn to_bits(self) -> i128 {
        self.0
    }

    /// Encode `term` as `round(term * 2^64)`, ties to even.
    ///
    /// The multiplication is carried out in `ctx`, so the rounding decision
    /// sees the same digits as the rest of the pipeline.
    ///
    /// # Errors
    /// Returns [`Error::FixedPointOverflow`] if the result does not fit `i128`.
    pub fn from_decimal(term: &Decimal, ctx: Context) -> Result<Self> {
        let scaled = ctx.mul(term, &scale());
        let rounded = scaled.round_to_integer();
        i128::try_from(&rounded)
            .map(Self)
            .map_err(|_| Error::FixedPointOverflow(rounded.to_string()))
    }

    /// Exact decimal value `bits / 2^64`.
    ///
    /// `2^-64 = 5^64 * 10^-64`, so the conversion never rounds.
    pub fn to_decimal(self) -> Decimal {
        let five_pow = Pow::pow(BigInt::from(5u8), FRACTIONAL_BITS);
        Decimal::new(BigInt::from(self.0) * five_pow, -i64::from(FRACTIONAL_BITS))
    }
}

impl fmt::Display for Fixed64x64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn scale() -> Decimal {
    Decimal::new(BigInt::one() << FRACTIONAL_BITS, 0)
}
