//! dayplan - quick-add task parsing for a daily planner
//!
//! The heart of this crate is [`features::quickadd`], which turns a single
//! line like `"2:30 p review lecture 45m #BIOL112 @UNI !P"` into a title plus
//! structured task fields. Everything else supports it: drafts with defaults
//! and validation, day helpers, configuration and a small CLI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod planner;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PlannerError;
pub use features::quickadd::{parse_quick_add, ParseResult, QuickAddParser, Vocabulary};
