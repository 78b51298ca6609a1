//! Check Command
//!
//! Verify the constant arrays embedded in contract source against freshly
//! generated tables.

use super::ReportArg;
use anyhow::{Context, Result};
use mint_tables::{parse_array_literals, ArrayDeclaration, GeneratorConfig, ResultTable};
use std::path::PathBuf;
use tracing::{debug, warn};

// =============================================================================
// CHECK
// =============================================================================

/// Verify every `int128[15] public NAME = [...]` declaration in a source file.
pub fn check_mode(source_file: &PathBuf, selection: ReportArg) -> Result<()> {
    let source = std::fs::read_to_string(source_file)
        .with_context(|| format!("Failed to open: {}", source_file.display()))?;

    let config = GeneratorConfig::production().context("Invalid production constants")?;
    let declarations = parse_array_literals(&source, config.array_type)
        .with_context(|| format!("Failed to parse: {}", source_file.display()))?;
    if declarations.is_empty() {
        anyhow::bail!(
            "No {}[15] array declarations found in {}",
            config.array_type,
            source_file.display()
        );
    }

    let mut tables = Vec::new();
    for report in selection.reports() {
        tables.extend(report.tables(&config)?);
    }
    if !tables.iter().any(|table| table.formula().array_name().is_some()) {
        anyhow::bail!("Selected report ({selection:?}) produces no T/R arrays to check");
    }

    let mut total = 0;
    let mut failed = 0;

    for declaration in &declarations {
        let Some(table) = find_table(&tables, &declaration.name) else {
            warn!(name = %declaration.name, "no generated table for array");
            println!("{}: SKIPPED (no generated table)", declaration.name);
            continue;
        };
        total += 1;

        match first_mismatch(declaration, table) {
            None => println!("{}: OK", declaration.name),
            Some((index, expected, found)) => {
                println!(
                    "{}: FAILED (index {index}: expected {expected}, found {found})",
                    declaration.name
                );
                failed += 1;
            }
        }
    }

    println!();
    if total == 0 {
        anyhow::bail!("None of the declared arrays has a generated table");
    }
    if failed == 0 {
        println!("All {total} arrays verified");
        Ok(())
    } else {
        anyhow::bail!("{failed} of {total} arrays did NOT match")
    }
}

/// The last table of the selection carrying `name`, so `all` checks against
/// the current generation.
fn find_table<'a>(tables: &'a [ResultTable], name: &str) -> Option<&'a ResultTable> {
    tables
        .iter()
        .rev()
        .find(|table| table.formula().array_name() == Some(name))
}

fn first_mismatch(declaration: &ArrayDeclaration, table: &ResultTable) -> Option<(usize, i128, i128)> {
    let mismatch = table
        .fixed_values()
        .map(|value| value.to_bits())
        .zip(declaration.values.iter().copied())
        .enumerate()
        .find(|(_, (expected, found))| expected != found)
        .map(|(index, (expected, found))| (index, expected, found));
    debug!(name = %declaration.name, matched = mismatch.is_none(), "compared array");
    mismatch
}
