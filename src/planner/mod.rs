//! Task-domain vocabulary for the daily planner.
//!
//! These enums mirror the values the task-creation workflow persists. The
//! quick-add parser never names them directly; it receives them through a
//! [`crate::features::quickadd::Vocabulary`].

mod types;

pub use types::{Bucket, Context, Energy, Status, UnknownVariant};
