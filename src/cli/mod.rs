//! Command-line interface for dayplan.

pub mod args;
pub mod commands;
