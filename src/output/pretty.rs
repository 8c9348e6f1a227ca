use std::fmt::Write;

use colored::Colorize;

use crate::core::to_day_string;
use crate::features::draft::TaskDraft;
use crate::features::quickadd::{ClassifiedToken, ParseResult, TokenClass, Vocabulary};

/// Format a parse result for the terminal
pub fn format_parse_pretty(result: &ParseResult, tokens: Option<&[ClassifiedToken]>) -> String {
    let mut output = format!("{}\n", "Parsed Task".yellow().bold());
    let title = if result.title.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        result.title.clone()
    };
    writeln!(output, "  {} {title}", "Title:".cyan().bold()).ok();
    if result.is_empty() {
        writeln!(output, "  {}", "Nothing to add".dimmed()).ok();
    }

    if let Some(start) = result.start {
        writeln!(output, "  {} {}", "Start:".cyan(), start.format("%Y-%m-%d %H:%M")).ok();
    }
    if let Some(minutes) = result.duration_min {
        writeln!(output, "  {} {minutes}m", "Duration:".cyan()).ok();
    }
    if !result.tags.is_empty() {
        writeln!(output, "  {} {}", "Tags:".yellow(), hashed(&result.tags)).ok();
    }
    if let Some(context) = result.context {
        writeln!(output, "  {} @{context}", "Context:".blue()).ok();
    }
    if let Some(bucket) = result.bucket {
        writeln!(output, "  {} {bucket}", "Bucket:".magenta()).ok();
    }

    if let Some(tokens) = tokens {
        writeln!(output, "  {}", "Tokens:".dimmed()).ok();
        for token in tokens {
            let class = match token.class {
                TokenClass::Title => token.class.as_str().dimmed(),
                _ => token.class.as_str().green(),
            };
            writeln!(output, "    {:>2} {:<10} {}", token.index, class, token.text).ok();
        }
    }

    output
}

/// Format a task draft for the terminal
pub fn format_draft_pretty(draft: &TaskDraft) -> String {
    let mut output = format!(
        "{} {} ({})\n",
        "Draft:".green().bold(),
        draft.title.bold(),
        to_day_string(draft.date).dimmed()
    );

    writeln!(output, "  {} {}", "Bucket:".magenta(), draft.bucket).ok();
    writeln!(output, "  {} {}", "Status:".dimmed(), draft.status).ok();
    if let Some(start) = draft.start {
        writeln!(output, "  {} {}", "Start:".cyan(), start.format("%H:%M")).ok();
    }
    if let Some(minutes) = draft.duration_min {
        writeln!(output, "  {} {minutes}m", "Duration:".cyan()).ok();
    }
    if let Some(context) = draft.context {
        writeln!(output, "  {} @{context}", "Context:".blue()).ok();
    }
    if !draft.tags.is_empty() {
        writeln!(output, "  {} {}", "Tags:".yellow(), hashed(&draft.tags)).ok();
    }

    output
}

/// Format a vocabulary for the terminal
pub fn format_vocabulary_pretty(vocab: &Vocabulary) -> String {
    let mut output = format!("{}\n", "Buckets".bold());
    for (alias, bucket) in vocab.bucket_aliases() {
        writeln!(output, "  {alias:<16} {bucket}").ok();
    }
    writeln!(output, "{}", "Contexts".bold()).ok();
    for (label, _) in vocab.contexts() {
        writeln!(output, "  @{}", label.to_lowercase()).ok();
    }
    output
}

fn hashed(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}
