//! Table Formulas
//!
//! The per-period constants and the six formulas that fill the lookup
//! tables. Every formula runs through the same evaluate-and-encode pipeline
//! (see [`crate::ResultTable`]); only the closed form differs.

use crate::decimal::{Context, Decimal};
use crate::types::{Error, Index, Result};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Per-day growth factor, approximately `1 / gamma` (agreeing after 64.64 encoding).
pub const BETA: &str = "1.0001987074682146291562714890133039617432343970799554367508";

/// Per-day demurrage factor, `0.93^(1/365.25)` (7 % per year).
pub const GAMMA: &str = "0.999801332008598957430613406568191166485722567691333380693405";

/// Hours per day; converts a per-hour rate into a daily one.
pub const HOURS_PER_DAY: i64 = 24;

/// The growth (`beta > 1`) and decay (`0 < gamma < 1`) constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constants {
    beta: Decimal,
    gamma: Decimal,
}

impl Constants {
    /// Validate and bundle a pair of constants.
    ///
    /// # Errors
    /// Returns [`Error::ConstantOutOfRange`] unless `beta > 1` and
    /// `0 < gamma < 1`. Either constant equal to one would divide by zero in
    /// the series formulas.
    pub fn new(beta: Decimal, gamma: Decimal) -> Result<Self> {
        let one = Decimal::one();
        if beta <= one {
            return Err(Error::ConstantOutOfRange {
                name: "beta",
                value: beta.to_string(),
            });
        }
        if gamma <= Decimal::zero() || gamma >= one {
            return Err(Error::ConstantOutOfRange {
                name: "gamma",
                value: gamma.to_string(),
            });
        }
        Ok(Self { beta, gamma })
    }

    /// Parse both constants from decimal literals.
    ///
    /// # Errors
    /// Fails on malformed literals or out-of-range values.
    pub fn from_literals(beta: &str, gamma: &str) -> Result<Self> {
        Self::new(beta.parse()?, gamma.parse()?)
    }

    /// The constants deployed with the current contracts.
    ///
    /// # Errors
    /// Never fails for the built-in literals; the `Result` mirrors
    /// [`Constants::from_literals`].
    pub fn production() -> Result<Self> {
        Self::from_literals(BETA, GAMMA)
    }

    /// Growth constant.
    pub const fn beta(&self) -> &Decimal {
        &self.beta
    }

    /// Decay constant.
    pub const fn gamma(&self) -> &Decimal {
        &self.gamma
    }
}

// =============================================================================
// FORMULAS
// =============================================================================

/// Formula variants.
///
/// `Rate`/`DailyRate` are the per-period rate tables, `*T` the cumulative
/// issuance tables and `*R` the offset tables. `Legacy*` variants are the
/// `beta`-based generation, `Gamma*` the current demurrage-based one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    /// `(β^n − 1) / (β^(n+1) − β^n) + 1`, with `1` at `n = 0`.
    Rate,
    /// [`Formula::Rate`] times 24.
    DailyRate,
    /// `24 · ((β^n − 1) / (β^(n+1) − β^n) + 1)`, with `24` at `n = 0`.
    LegacyBetaT,
    /// `24 · ((γ^n − 1) / (γ − 1) + γ^n)`, with `24` at `n = 0`.
    GammaT,
    /// `β^(−n)`
    LegacyBetaR,
    /// `γ^n`
    GammaR,
}

impl Formula {
    /// Every formula, in report order.
    pub const ALL: [Self; 6] = [
        Self::Rate,
        Self::DailyRate,
        Self::LegacyBetaT,
        Self::GammaT,
        Self::LegacyBetaR,
        Self::GammaR,
    ];

    /// Evaluate the formula at period `n`.
    ///
    /// Every intermediate power, difference and quotient is rounded to the
    /// context precision.
    ///
    /// # Errors
    /// Propagates arithmetic failures (division by zero).
    pub fn term(self, n: Index, constants: &Constants, ctx: Context) -> Result<Decimal> {
        let k = i32::from(n);
        match self {
            Self::Rate if n == 0 => Ok(Decimal::one()),
            Self::Rate => rate(constants.beta(), k, ctx),
            Self::DailyRate | Self::LegacyBetaT if n == 0 => Ok(hours()),
            Self::DailyRate | Self::LegacyBetaT => {
                Ok(ctx.mul(&hours(), &rate(constants.beta(), k, ctx)?))
            }
            Self::GammaT if n == 0 => Ok(hours()),
            Self::GammaT => {
                let gamma = constants.gamma();
                let one = Decimal::one();
                let gamma_n = ctx.powi(gamma, k)?;
                let series = ctx.div(&ctx.sub(&gamma_n, &one), &ctx.sub(gamma, &one))?;
                Ok(ctx.mul(&hours(), &ctx.add(&series, &gamma_n)))
            }
            Self::LegacyBetaR => ctx.powi(constants.beta(), -k),
            Self::GammaR => ctx.powi(constants.gamma(), k),
        }
    }

    /// Contract array name for T/R tables, `None` for rate tables.
    pub const fn array_name(self) -> Option<&'static str> {
        match self {
            Self::Rate | Self::DailyRate => None,
            Self::LegacyBetaT | Self::GammaT => Some("T"),
            Self::LegacyBetaR | Self::GammaR => Some("R"),
        }
    }

    /// Column heading for the decimal term.
    pub const fn term_heading(self) -> &'static str {
        match self {
            Self::Rate | Self::DailyRate => "Result (up to 25 decimals)",
            Self::LegacyBetaT | Self::GammaT => "T(n) (up to 25 decimals)",
            Self::LegacyBetaR => "Beta^(-n)",
            Self::GammaR => "Gamma^n",
        }
    }

    /// Column heading for the fixed-point integer.
    pub const fn fixed_heading(self) -> &'static str {
        match self {
            Self::LegacyBetaR | Self::GammaR => "64x64 Fixed (20 or 21 digits)",
            _ => "64x64 Fixed Int (rounded)",
        }
    }

    /// Stable snake-case identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::DailyRate => "daily_rate",
            Self::LegacyBetaT => "legacy_beta_t",
            Self::GammaT => "gamma_t",
            Self::LegacyBetaR => "legacy_beta_r",
            Self::GammaR => "gamma_r",
        }
    }
}

fn hours() -> Decimal {
    Decimal::from_integer(HOURS_PER_DAY)
}

/// `(β^k − 1) / (β^(k+1) − β^k) + 1`
fn rate(beta: &Decimal, k: i32, ctx: Context) -> Result<Decimal> {
    let one = Decimal::one();
    let beta_k = ctx.powi(beta, k)?;
    let beta_next = ctx.powi(beta, k + 1)?;
    let numerator = ctx.sub(&beta_k, &one);
    let denominator = ctx.sub(&beta_next, &beta_k);
    Ok(ctx.add(&ctx.div(&numerator, &denominator)?, &one))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_production_constants() {
        let constants = Constants::production().unwrap();
        assert!(constants.beta() > &Decimal::one());
        assert!(constants.gamma() < &Decimal::one());
    }

    #[test]
    fn test_constants_validation() {
        let one = "1";
        assert!(matches!(
            Constants::from_literals(one, GAMMA),
            Err(Error::ConstantOutOfRange { name: "beta", .. })
        ));
        assert!(matches!(
            Constants::from_literals(BETA, one),
            Err(Error::ConstantOutOfRange { name: "gamma", .. })
        ));
        assert!(matches!(
            Constants::from_literals(BETA, "0"),
            Err(Error::ConstantOutOfRange { name: "gamma", .. })
        ));
        assert!(matches!(
            Constants::from_literals("1.x", GAMMA),
            Err(Error::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_first_entries_are_exact() {
        let constants = Constants::production().unwrap();
        let ctx = Context::default();
        let expected = [
            (Formula::Rate, 1),
            (Formula::DailyRate, 24),
            (Formula::LegacyBetaT, 24),
            (Formula::GammaT, 24),
            (Formula::LegacyBetaR, 1),
            (Formula::GammaR, 1),
        ];
        for (formula, value) in expected {
            assert_eq!(
                formula.term(0, &constants, ctx).unwrap(),
                Decimal::from_integer(value),
                "{formula:?}"
            );
        }
    }

    #[test]
    fn test_gamma_t_matches_series_sum() {
        // 24 · (1 + γ + γ²) at n = 2
        let constants = Constants::production().unwrap();
        let ctx = Context::new(80).unwrap();
        let gamma = constants.gamma();
        let sum = ctx.add(&ctx.add(&Decimal::one(), gamma), &ctx.powi(gamma, 2).unwrap());
        let expected = ctx.mul(&Decimal::from_integer(24), &sum);
        let term = Formula::GammaT.term(2, &constants, ctx).unwrap();
        let diff = ctx.sub(&term, &expected).abs();
        assert!(diff < Decimal::new(BigInt::from(1), -70), "{diff}");
    }

    #[test]
    fn test_array_names() {
        assert_eq!(Formula::Rate.array_name(), None);
        assert_eq!(Formula::DailyRate.array_name(), None);
        assert_eq!(Formula::GammaT.array_name(), Some("T"));
        assert_eq!(Formula::LegacyBetaR.array_name(), Some("R"));
    }
}
