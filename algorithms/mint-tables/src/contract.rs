//! Contract Source Arrays
//!
//! Renders T/R tables as fixed-size Solidity array declarations and reads
//! such declarations back out of contract source.
//!
//! Format: `int128[15] public T = [int128(v0), ..., int128(v14)];`

use crate::table::ResultTable;
use crate::types::{Error, Result, TABLE_LEN};

/// An array declaration found in contract source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDeclaration {
    /// Declared variable name (`T`, `R`, ...).
    pub name: String,
    /// Element values in declaration order.
    pub values: Vec<i128>,
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render `table` as an array declaration of `array_type` elements.
///
/// Returns `None` for formulas without a contract array (rate tables).
pub fn array_literal(table: &ResultTable, array_type: &str) -> Option<String> {
    let name = table.formula().array_name()?;
    let elements = table
        .fixed_values()
        .map(|value| format!("{array_type}({value})"))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "{array_type}[{TABLE_LEN}] public {name} = [{elements}];"
    ))
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract every `array_type[15] public NAME = [...];` declaration.
///
/// Declarations may span several lines. Other code is ignored.
///
/// # Errors
/// Returns [`Error::MalformedArray`] when a declaration header is found but
/// its body is not exactly 15 `array_type(integer)` elements.
pub fn parse_array_literals(source: &str, array_type: &str) -> Result<Vec<ArrayDeclaration>> {
    let marker = format!("{array_type}[{TABLE_LEN}] public ");
    let mut declarations = Vec::new();
    let mut rest = source;

    while let Some(position) = rest.find(&marker) {
        let after = &rest[position + marker.len()..];
        // `uint128[15] public` contains the `int128[15] public` marker.
        if rest[..position].chars().next_back().is_some_and(is_identifier_char) {
            rest = after;
            continue;
        }
        let (name, tail) = after
            .split_once('=')
            .ok_or_else(|| malformed("missing '='"))?;
        let name = name.trim();
        if name.is_empty() || !name.chars().all(is_identifier_char) {
            return Err(malformed(&format!("invalid name '{name}'")));
        }

        let body = tail
            .trim_start()
            .strip_prefix('[')
            .ok_or_else(|| malformed(&format!("{name}: missing '['")))?;
        let (body, remainder) = body
            .split_once(']')
            .ok_or_else(|| malformed(&format!("{name}: missing ']'")))?;
        if !remainder.trim_start().starts_with(';') {
            return Err(malformed(&format!("{name}: missing ';'")));
        }

        let values = body
            .split(',')
            .map(|element| parse_element(element.trim(), array_type))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| malformed(&format!("{name}: invalid element")))?;
        if values.len() != TABLE_LEN {
            return Err(malformed(&format!(
                "{name}: expected {TABLE_LEN} elements, found {}",
                values.len()
            )));
        }

        declarations.push(ArrayDeclaration {
            name: name.to_owned(),
            values,
        });
        rest = remainder;
    }

    Ok(declarations)
}

fn parse_element(element: &str, array_type: &str) -> Option<i128> {
    element
        .strip_prefix(array_type)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?
        .trim()
        .parse()
        .ok()
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn malformed(detail: &str) -> Error {
    Error::MalformedArray(detail.to_owned())
}
