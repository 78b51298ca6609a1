//! Shared types used across the mint-tables library.

use thiserror::Error;

// =============================================================================
// INDEX RANGE
// =============================================================================

/// Period index `n` of a table row.
pub type Index = u8;

/// Number of rows in every table (`n = 0..=14`).
///
/// Fixed by the length of the constant arrays in the consuming contract.
pub const TABLE_LEN: usize = 15;

/// Iterate the table indices `0..=14` in ascending order.
pub fn indices() -> impl Iterator<Item = Index> {
    (0..TABLE_LEN).filter_map(|n| Index::try_from(n).ok())
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Arithmetic, encoding and parsing failures.
///
/// Every variant is a development-time defect for the fixed production
/// constants; none of them is recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A decimal literal could not be parsed.
    #[error("invalid decimal literal '{0}'")]
    InvalidLiteral(String),

    /// Working precision must be at least one significant digit.
    #[error("invalid precision {0}: at least one significant digit is required")]
    InvalidPrecision(u32),

    /// Division (or a negative power) of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// `beta` must be greater than one and `gamma` must lie strictly between zero and one.
    #[error("constant {name} = {value} is out of range")]
    ConstantOutOfRange {
        /// Constant name (`beta` or `gamma`).
        name: &'static str,
        /// Offending value, rendered as a plain decimal.
        value: String,
    },

    /// The scaled value does not fit a signed 128-bit integer.
    #[error("value {0} does not fit a 64.64 fixed-point integer")]
    FixedPointOverflow(String),

    /// A fixed-size array declaration in contract source could not be parsed.
    #[error("malformed array declaration: {0}")]
    MalformedArray(String),
}
