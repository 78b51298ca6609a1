//! Evaluate-and-encode pipeline.

use crate::decimal::{Context, Decimal};
use crate::fixed::Fixed64x64;
use crate::formula::{Constants, Formula};
use crate::types::{indices, Index, Result, TABLE_LEN};
use tracing::{debug, trace};

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Period index `n`.
    pub index: Index,
    /// Decimal value of the formula at `n`.
    pub term: Decimal,
    /// `round(term * 2^64)`
    pub fixed: Fixed64x64,
}

/// The rows `n = 0..=14` of one formula, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    formula: Formula,
    entries: Vec<Entry>,
}

impl ResultTable {
    /// Evaluate `formula` for every index and encode each term.
    ///
    /// # Errors
    /// The first arithmetic or encoding failure aborts the table.
    pub fn generate(formula: Formula, constants: &Constants, ctx: Context) -> Result<Self> {
        let entries = indices()
            .map(|index| {
                let term = formula.term(index, constants, ctx)?;
                let fixed = Fixed64x64::from_decimal(&term, ctx)?;
                trace!(formula = formula.name(), index, %fixed, "encoded entry");
                Ok(Entry { index, term, fixed })
            })
            .collect::<Result<Vec<_>>>()?;

        debug_assert_eq!(entries.len(), TABLE_LEN);
        debug!(
            formula = formula.name(),
            precision = ctx.precision(),
            rows = entries.len(),
            "generated table"
        );
        Ok(Self { formula, entries })
    }

    /// Formula the table was generated from.
    pub const fn formula(&self) -> Formula {
        self.formula
    }

    /// Rows in index order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Row for index `n`.
    pub fn get(&self, n: Index) -> Option<&Entry> {
        self.entries.get(usize::from(n))
    }

    /// Fixed-point column in index order.
    pub fn fixed_values(&self) -> impl Iterator<Item = Fixed64x64> + '_ {
        self.entries.iter().map(|entry| entry.fixed)
    }

    /// Number of rows (always [`TABLE_LEN`]).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
