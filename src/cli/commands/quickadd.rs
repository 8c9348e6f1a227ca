//! The `parse` and `draft` commands.

use chrono::NaiveDate;
use log::debug;

use crate::cli::args::{DraftArgs, OutputFormat, ParseArgs, QuickAddInput};
use crate::config::{Config, QuickAddConfig};
use crate::core::{from_day_string, parse_start_input, today_local};
use crate::error::PlannerError;
use crate::features::draft::TaskDraft;
use crate::features::quickadd::QuickAddParser;
use crate::output::{format_draft, format_parse};

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if `--day` is not a valid day or output formatting fails.
pub fn parse(
    args: &ParseArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    let day = resolve_day(args.input.day.as_deref())?;
    let parser = parser_for(&args.input, &config.quick_add);

    if args.explain {
        let (result, tokens) = parser.parse_explained(&args.input.text, day);
        format_parse(&result, Some(&tokens), format)
    } else {
        format_parse(&parser.parse(&args.input.text, day), None, format)
    }
}

/// Execute the draft command.
///
/// # Errors
///
/// Returns an error if `--day` or `--start` is invalid, the draft fails
/// validation, or output formatting fails.
pub fn draft(
    args: &DraftArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    let day = resolve_day(args.input.day.as_deref())?;
    let parser = parser_for(&args.input, &config.quick_add);

    let mut defaults = config.quick_add.draft_defaults();
    if let Some(bucket) = args.bucket {
        defaults.bucket = bucket;
    }

    let mut parsed = parser.parse(&args.input.text, day);
    if let Some(start) = &args.start {
        parsed.start = Some(parse_start_input(start, day).ok_or_else(|| {
            PlannerError::Validation(format!("Invalid start time '{start}'"))
        })?);
    }

    let draft = TaskDraft::from_parse(parsed, day, &defaults)?;
    format_draft(&draft, format)
}

/// The day named by `--day`, or today when absent.
///
/// # Errors
///
/// Returns `PlannerError::InvalidDay` for anything but `YYYY-MM-DD`.
pub fn resolve_day(day: Option<&str>) -> Result<NaiveDate, PlannerError> {
    match day {
        Some(day) => from_day_string(day),
        None => {
            let today = today_local();
            debug!("event=resolve_day module=cli status=ok source=local_clock day={today}");
            Ok(today)
        },
    }
}

fn parser_for(input: &QuickAddInput, settings: &QuickAddConfig) -> QuickAddParser {
    let parser = settings.parser();
    if input.strict_meridiem {
        let mut options = parser.options();
        options.consume_orphan_meridiem = false;
        parser.with_options(options)
    } else {
        parser
    }
}
