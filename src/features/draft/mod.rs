//! Task drafts built from quick-add results.
//!
//! A draft is what gets handed to the task-creation workflow: the parsed
//! fields plus defaults for everything the user left out, checked against
//! the limits that workflow enforces.

mod task;

pub use task::{DraftDefaults, TaskDraft, MAX_DURATION_MIN, MAX_TITLE_CHARS};
