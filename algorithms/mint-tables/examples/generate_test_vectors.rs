//! Generator for lookup-table test vectors
//!
//! Prints the JSON consumed by `tests/vectors.rs` (`tests/test_vectors.json`).
//! One vector per formula, 15 rows each.
#![allow(clippy::unwrap_used)]
use mint_tables::{Formula, GeneratorConfig, DISPLAY_PLACES};
use serde_json::json;

fn main() {
    let config = GeneratorConfig::production().unwrap();
    let mut vectors = Vec::new();

    for formula in Formula::ALL {
        let table = config.generate(formula).unwrap();
        let rows: Vec<_> = table
            .entries()
            .iter()
            .map(|entry| {
                json!({
                    "n": entry.index,
                    "term": entry.term.to_fixed_string(DISPLAY_PLACES),
                    "fixed": entry.fixed.to_string(),
                })
            })
            .collect();

        vectors.push(json!({
            "formula": formula.name(),
            "rows": rows,
        }));
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
