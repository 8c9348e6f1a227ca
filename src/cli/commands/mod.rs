//! Command implementations for dayplan.
//!
//! Every command returns the text to print; `main` does the printing.

mod completions;
mod quickadd;

pub use completions::generate_completions;
pub use quickadd::{draft, parse, resolve_day};

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PlannerError;
use crate::output::format_vocabulary;

/// Execute vocab command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn vocab(config: &Config, format: OutputFormat) -> Result<String, PlannerError> {
    format_vocabulary(&config.quick_add.vocabulary(), format)
}
