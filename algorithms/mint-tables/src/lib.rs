//! # Mint Tables
//!
//! 64.64 fixed-point lookup tables for on-chain demurrage and issuance.
//! Closed-form formulas of the per-day constants `beta` and `gamma` are
//! evaluated at 60 significant digits, encoded as `round(value * 2^64)` and
//! rendered as text tables and `int128[15]` contract arrays.

//! # Usage
//! ```rust
//! use mint_tables::{Formula, GeneratorConfig};
//!
//! let config = GeneratorConfig::production()?;
//!
//! // 1. One table
//! let t = config.generate(Formula::GammaT)?;
//! assert_eq!(t.len(), 15);
//! assert_eq!(t.entries()[0].fixed.to_bits(), 24 << 64);
//!
//! // 2. Contract array
//! let literal = mint_tables::array_literal(&t, config.array_type);
//! assert!(literal.is_some_and(|l| l.starts_with("int128[15] public T = [")));
//!
//! // 3. Full report text
//! let text = mint_tables::render_report(mint_tables::Report::Demurrage, &config)?;
//! assert!(text.contains("Solidity syntax for T and R arrays"));
//! # Ok::<(), mint_tables::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod config;
mod contract;
mod decimal;
mod fixed;
mod formula;
mod render;
mod table;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use config::{GeneratorConfig, ARRAY_TYPE};
pub use contract::{array_literal, parse_array_literals, ArrayDeclaration};
pub use decimal::{Context, Decimal, DEFAULT_PRECISION};
pub use fixed::{Fixed64x64, FRACTIONAL_BITS};
pub use formula::{Constants, Formula, BETA, GAMMA, HOURS_PER_DAY};
pub use render::{render_report, render_table, Report, DISPLAY_PLACES, SEPARATOR_WIDTH};
pub use table::{Entry, ResultTable};
pub use types::{indices, Error, Index, Result, TABLE_LEN};
