//! CLI Commands
//!
//! All mint-tables CLI commands organized as separate modules.

mod check;
mod generate;

pub use check::check_mode;
pub use generate::{print_report, Format, ReportArg};
