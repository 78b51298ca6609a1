//! Generator configuration.

use crate::decimal::Context;
use crate::formula::{Constants, Formula};
use crate::table::ResultTable;
use crate::types::Result;

/// Solidity type used for the emitted constant arrays.
pub const ARRAY_TYPE: &str = "int128";

/// Everything that determines the generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Arithmetic context (precision and rounding).
    pub context: Context,
    /// The `beta` / `gamma` pair.
    pub constants: Constants,
    /// Element type of the emitted arrays.
    pub array_type: &'static str,
}

impl GeneratorConfig {
    /// Production settings: 60 significant digits, deployed constants, `int128`.
    ///
    /// # Errors
    /// Mirrors [`Constants::production`].
    pub fn production() -> Result<Self> {
        Ok(Self {
            context: Context::default(),
            constants: Constants::production()?,
            array_type: ARRAY_TYPE,
        })
    }

    /// Same configuration with a different arithmetic context.
    #[must_use]
    pub fn with_context(self, context: Context) -> Self {
        Self { context, ..self }
    }

    /// Generate the table for `formula`.
    ///
    /// # Errors
    /// See [`ResultTable::generate`].
    pub fn generate(&self, formula: Formula) -> Result<ResultTable> {
        ResultTable::generate(formula, &self.constants, self.context)
    }
}
