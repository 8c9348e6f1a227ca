//! Output formatting for dayplan.
//!
//! This module renders parse results, drafts and vocabularies as colored
//! text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PlannerError;
use crate::features::draft::TaskDraft;
use crate::features::quickadd::{ClassifiedToken, ParseResult, Vocabulary};

pub use json::*;
pub use pretty::*;

/// Format a parse result, with its token breakdown when `tokens` is given.
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_parse(
    result: &ParseResult,
    tokens: Option<&[ClassifiedToken]>,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_parse_pretty(result, tokens)),
        OutputFormat::Json => format_parse_json(result, tokens),
    }
}

/// Format a task draft.
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_draft(draft: &TaskDraft, format: OutputFormat) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_draft_pretty(draft)),
        OutputFormat::Json => format_draft_json(draft),
    }
}

/// Format the bucket aliases and contexts in effect.
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_vocabulary(vocab: &Vocabulary, format: OutputFormat) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_vocabulary_pretty(vocab)),
        OutputFormat::Json => format_vocabulary_json(vocab),
    }
}
