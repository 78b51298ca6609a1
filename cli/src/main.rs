//! Mint Tables CLI
//!
//! Prints the 64.64 fixed-point lookup tables and checks contract arrays.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, print_report, Format, ReportArg};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "mint-tables")]
#[command(about = "Generate 64.64 fixed-point lookup tables for mint contracts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Report to print (if no subcommand)
    #[arg(value_enum, default_value_t = ReportArg::Demurrage)]
    report: ReportArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the T/R arrays declared in a contract source file
    Check {
        #[arg(value_name = "FILE")]
        source_file: PathBuf,

        /// Report whose tables the arrays must match
        #[arg(short, long, value_enum, default_value_t = ReportArg::Demurrage)]
        report: ReportArg,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    // stdout carries the tables; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check {
            source_file,
            report,
        }) => check_mode(source_file, *report)?,
        None => print_report(cli.report, cli.format)?,
    }

    Ok(())
}
