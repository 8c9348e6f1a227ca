use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::planner::Bucket;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Quick-add task parsing for a daily planner")]
#[command(long_about = "dayplan - quick-add task parsing for a daily planner

Turns a single line of text into a task: the scheduled time, duration,
tags, context and bucket are picked out and whatever is left becomes the
title.

QUICK START:
  dayplan parse \"2:30 p review lecture 45m #BIOL112 @UNI !P\"
  dayplan draft \"10:30 planning\" --day 2024-05-01
  dayplan vocab

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config value, or 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to a config file (default: ~/.dayplan/config.yaml)
    #[arg(long, global = true, env = "DAYPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level written to stderr (trace, debug, info, warn, error, off)
    #[arg(long, global = true, env = "DAYPLAN_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a quick-add line and show what was recognized
    ///
    /// # Supported Markers
    ///
    ///   Time:       9, 14:30, 2:30p, 11am, or "2:30 pm"
    ///   Duration:   45m, 90min
    ///   Tags:       #tag1 #tag2
    ///   Context:    @home @uni @phone @computer @anywhere
    ///   Bucket:     !P / !PRIORITY, !SC / !SHOULD_COULD
    ///
    /// # Examples
    ///
    ///   dayplan parse "2:30 p review lecture 45m #BIOL112 @UNI !P"
    ///   dayplan parse "14:00 standup" --explain
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Build a validated task draft from a quick-add line
    ///
    /// Fills in the default bucket and status and checks the limits the
    /// task store enforces (non-empty title of at most 200 characters,
    /// duration between 1 and 720 minutes).
    ///
    /// # Examples
    ///
    ///   dayplan draft "10:30 planning" --day 2024-05-01
    ///   dayplan draft "tidy desk" --bucket should_could -o json
    ///   dayplan draft "dentist 30m" --start "2:30 pm"
    #[command(alias = "d")]
    Draft(DraftArgs),

    /// List the bucket aliases and contexts the parser recognizes
    Vocab,

    /// Generate a shell completion script
    ///
    /// # Examples
    ///
    ///   dayplan completions zsh > ~/.zsh/completions/_dayplan
    ///   dayplan completions bash | source /dev/stdin
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments shared by commands that parse a quick-add line.
#[derive(Args, Clone, Debug)]
pub struct QuickAddInput {
    /// The quick-add text
    pub text: String,

    /// Reference day (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub day: Option<String>,

    /// Keep a lone am/pm in the title when no time was found for it
    #[arg(long)]
    pub strict_meridiem: bool,
}

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: QuickAddInput,

    /// Also show how each token was classified
    #[arg(long, short = 'e')]
    pub explain: bool,
}

/// Arguments for the draft command.
#[derive(Args)]
pub struct DraftArgs {
    #[command(flatten)]
    pub input: QuickAddInput,

    /// Bucket to use when the text names none (priority, should_could)
    #[arg(long, short = 'b')]
    pub bucket: Option<Bucket>,

    /// Override the detected start time (e.g. "9", "14:30", "2:30 pm")
    #[arg(long, short = 's')]
    pub start: Option<String>,
}
