//! Planner features.
//!
//! - Quick-add parsing of single-line task entry
//! - Task drafts with defaults and validation

pub mod draft;
pub mod quickadd;
