//! Generate Command
//!
//! Prints one or all reports as text or JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use mint_tables::{array_literal, render_report, GeneratorConfig, Report, DISPLAY_PLACES};
use serde::Serialize;
use tracing::info;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ReportArg {
    /// Per-hour rate table and the ×24 CRC/day table
    Rates,
    /// Beta-based T(n) and R(n) tables with Solidity arrays
    Legacy,
    /// Gamma-based T(n) and R(n) tables with Solidity arrays
    Demurrage,
    /// Every report, in the order above
    All,
}

impl ReportArg {
    pub fn reports(self) -> Vec<Report> {
        match self {
            Self::Rates => vec![Report::Rates],
            Self::Legacy => vec![Report::Legacy],
            Self::Demurrage => vec![Report::Demurrage],
            Self::All => Report::ALL.to_vec(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Format {
    /// Column-aligned tables followed by array declarations
    Text,
    /// Machine-readable rows
    Json,
}

#[derive(Serialize)]
struct RowJson {
    n: u8,
    term: String,
    fixed: String,
}

#[derive(Serialize)]
struct TableJson {
    formula: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    array: Option<String>,
    rows: Vec<RowJson>,
}

/// Print the selected reports to stdout.
pub fn print_report(selection: ReportArg, format: Format) -> Result<()> {
    let config = GeneratorConfig::production().context("Invalid production constants")?;
    let reports = selection.reports();
    info!(?reports, ?format, precision = config.context.precision(), "generating");

    match format {
        Format::Text => {
            for report in reports {
                let text = render_report(report, &config)
                    .with_context(|| format!("Failed to generate {report:?} report"))?;
                print!("{text}");
            }
        }
        Format::Json => {
            let mut tables = Vec::new();
            for report in reports {
                let generated = report
                    .tables(&config)
                    .with_context(|| format!("Failed to generate {report:?} report"))?;
                tables.extend(generated.iter().map(|table| TableJson {
                    formula: table.formula().name(),
                    array: array_literal(table, config.array_type),
                    rows: table
                        .entries()
                        .iter()
                        .map(|entry| RowJson {
                            n: entry.index,
                            term: entry.term.to_fixed_string(DISPLAY_PLACES),
                            fixed: entry.fixed.to_string(),
                        })
                        .collect(),
                }));
            }
            println!("{}", serde_json::to_string_pretty(&tables)?);
        }
    }

    Ok(())
}
