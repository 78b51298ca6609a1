//! Text Rendering
//!
//! Column-aligned tables and the three reports printed by the generator.

use crate::config::GeneratorConfig;
use crate::contract::array_literal;
use crate::formula::Formula;
use crate::table::ResultTable;
use crate::types::Result;
use core::fmt::Write;

/// Fractional digits shown for every term.
pub const DISPLAY_PLACES: u32 = 25;

/// Width of the separator line under each header.
pub const SEPARATOR_WIDTH: usize = 75;

// =============================================================================
// TABLES
// =============================================================================

/// Render a header, a separator and one row per entry.
pub fn render_table(table: &ResultTable) -> String {
    let formula = table.formula();
    let mut out = format!(
        "{:<5}{:<40}{:<30}\n{}\n",
        "n",
        formula.term_heading(),
        formula.fixed_heading(),
        "-".repeat(SEPARATOR_WIDTH)
    );
    for entry in table.entries() {
        let term = entry.term.to_fixed_string(DISPLAY_PLACES);
        let fixed = entry.fixed.to_string();
        let _ = writeln!(out, "{:<5}{term:<40}{fixed:<30}", entry.index);
    }
    out
}

// =============================================================================
// REPORTS
// =============================================================================

/// The reports the generator can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    /// Per-period rate table and its daily (×24) counterpart.
    Rates,
    /// `beta`-based T and R tables with their contract arrays.
    Legacy,
    /// `gamma`-based T and R tables with their contract arrays.
    Demurrage,
}

enum Section {
    Banner(&'static str),
    Table(Formula),
    Arrays,
}

impl Report {
    /// Every report.
    pub const ALL: [Self; 3] = [Self::Rates, Self::Legacy, Self::Demurrage];

    /// Formulas rendered by this report, in output order.
    pub const fn formulas(self) -> &'static [Formula] {
        match self {
            Self::Rates => &[Formula::Rate, Formula::DailyRate],
            Self::Legacy => &[Formula::LegacyBetaT, Formula::LegacyBetaR],
            Self::Demurrage => &[Formula::GammaT, Formula::GammaR],
        }
    }

    /// Generate this report's tables.
    ///
    /// # Errors
    /// Propagates the first generation failure.
    pub fn tables(self, config: &GeneratorConfig) -> Result<Vec<ResultTable>> {
        self.formulas()
            .iter()
            .map(|&formula| config.generate(formula))
            .collect()
    }

    fn sections(self) -> &'static [Section] {
        match self {
            Self::Rates => &[
                Section::Table(Formula::Rate),
                Section::Banner("Reproduce table but multiply by 24 CRC/day "),
                Section::Table(Formula::DailyRate),
            ],
            Self::Legacy => &[
                Section::Banner("Reproduce table T(n) counting full 24 CRC/day "),
                Section::Table(Formula::LegacyBetaT),
                Section::Banner("Reproduce table R(n) for offset in day A"),
                Section::Table(Formula::LegacyBetaR),
                Section::Banner("Solidity syntax for T and R arrays"),
                Section::Arrays,
            ],
            Self::Demurrage => &[
                Section::Banner("Reproduce table T(n) counting full 24 CRC/day "),
                Section::Table(Formula::GammaT),
                Section::Banner("Reproduce table R(n) for offset in day A"),
                Section::Table(Formula::GammaR),
                Section::Banner("Solidity syntax for T and R arrays"),
                Section::Arrays,
            ],
        }
    }
}

/// Render the complete text of `report`.
///
/// # Errors
/// Propagates the first generation failure.
pub fn render_report(report: Report, config: &GeneratorConfig) -> Result<String> {
    let tables = report.tables(config)?;
    let mut out = String::new();

    for section in report.sections() {
        match section {
            Section::Banner(title) => {
                let _ = write!(out, "\n\n {title}\n\n\n");
            }
            Section::Table(formula) => {
                if let Some(table) = tables.iter().find(|t| t.formula() == *formula) {
                    out.push_str(&render_table(table));
                }
            }
            Section::Arrays => {
                for literal in tables
                    .iter()
                    .filter_map(|table| array_literal(table, config.array_type))
                {
                    let _ = write!(out, "{literal}\n\n\n");
                }
            }
        }
    }

    Ok(out)
}
