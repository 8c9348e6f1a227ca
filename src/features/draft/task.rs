use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::features::quickadd::ParseResult;
use crate::planner::{Bucket, Context, Energy, Status};

/// Longest title the task store accepts, in UTF-16 code units.
pub const MAX_TITLE_CHARS: usize = 200;

/// Longest duration, in minutes, the task store accepts.
pub const MAX_DURATION_MIN: u32 = 720;

/// Values filled in when a quick-add line does not name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DraftDefaults {
    pub bucket: Bucket,
    pub status: Status,
}

/// A task ready to be created for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub bucket: Bucket,
    pub status: Status,
    /// Day the task belongs to.
    pub date: NaiveDate,
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default)]
    pub energy: Option<Energy>,
    #[serde(default)]
    pub context: Option<Context>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TaskDraft {
    /// Build a validated draft from a quick-add result.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Validation` if the title is empty or the draft
    /// breaks any of the limits checked by [`TaskDraft::validate`].
    pub fn from_parse(
        parsed: ParseResult,
        day: NaiveDate,
        defaults: &DraftDefaults,
    ) -> Result<Self, PlannerError> {
        if parsed.title.is_empty() {
            return Err(PlannerError::Validation(
                "Please add a title for the task".to_string(),
            ));
        }

        let draft = Self {
            title: parsed.title,
            description: None,
            bucket: parsed.bucket.unwrap_or(defaults.bucket),
            status: defaults.status,
            date: day,
            start: parsed.start,
            duration_min: parsed.duration_min,
            energy: None,
            context: parsed.context,
            tags: parsed.tags,
        };
        draft.validate()?;

        debug!(
            "event=draft_build module=draft status=ok bucket={} scheduled={} tags={}",
            draft.bucket,
            draft.start.is_some(),
            draft.tags.len()
        );
        Ok(draft)
    }

    /// Check the draft against the task store's limits.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Validation` naming the first field that fails.
    pub fn validate(&self) -> Result<(), PlannerError> {
        // UTF-16 code units, matching the task store's length check
        let title_len = self.title.encode_utf16().count();
        if title_len == 0 {
            return Err(PlannerError::Validation("title must not be empty".to_string()));
        }
        if title_len > MAX_TITLE_CHARS {
            return Err(PlannerError::Validation(format!(
                "title is {title_len} characters long, at most {MAX_TITLE_CHARS} allowed"
            )));
        }
        if let Some(minutes) = self.duration_min {
            if minutes == 0 || minutes > MAX_DURATION_MIN {
                return Err(PlannerError::Validation(format!(
                    "duration must be between 1 and {MAX_DURATION_MIN} minutes, got {minutes}"
                )));
            }
        }
        if let Some(start) = self.start {
            if start.date() != self.date {
                return Err(PlannerError::Validation(format!(
                    "start {start} is not on {}",
                    self.date
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::quickadd::parse_quick_add;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn draft(input: &str) -> Result<TaskDraft, PlannerError> {
        TaskDraft::from_parse(parse_quick_add(input, day()), day(), &DraftDefaults::default())
    }

    #[test]
    fn test_defaults_applied() {
        let task = draft("10:30 planning").unwrap();
        assert_eq!(task.title, "planning");
        assert_eq!(task.bucket, Bucket::Priority);
        assert_eq!(task.status, Status::NotStarted);
        assert_eq!(task.date, day());
        assert_eq!(task.start, day().and_hms_opt(10, 30, 0));
        assert!(task.energy.is_none());
        assert!(task.description.is_none());
    }

    #[test]
    fn test_parsed_bucket_beats_default() {
        let defaults = DraftDefaults {
            bucket: Bucket::Priority,
            ..DraftDefaults::default()
        };
        let task =
            TaskDraft::from_parse(parse_quick_add("fold laundry !SC", day()), day(), &defaults)
                .unwrap();
        assert_eq!(task.bucket, Bucket::ShouldCould);
    }

    #[test]
    fn test_custom_default_bucket() {
        let defaults = DraftDefaults {
            bucket: Bucket::ShouldCould,
            ..DraftDefaults::default()
        };
        let task =
            TaskDraft::from_parse(parse_quick_add("water plants", day()), day(), &defaults)
                .unwrap();
        assert_eq!(task.bucket, Bucket::ShouldCould);
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = draft("#only @home !P").unwrap_err();
        assert_eq!(err.to_string(), "Please add a title for the task");
    }

    #[test]
    fn test_title_too_long() {
        let err = draft(&"a".repeat(MAX_TITLE_CHARS + 1)).unwrap_err();
        assert!(err.to_string().contains("at most 200"));
        assert!(draft(&"b".repeat(MAX_TITLE_CHARS)).is_ok());
    }

    #[test]
    fn test_title_limit_counts_utf16_units() {
        let half = MAX_TITLE_CHARS / 2;
        assert!(draft(&"\u{1F4DA}".repeat(half)).is_ok());

        let err = draft(&"\u{1F4DA}".repeat(half + 1)).unwrap_err();
        assert!(err.to_string().contains("202 characters long"));
        assert!(draft(&"\u{e9}".repeat(MAX_TITLE_CHARS)).is_ok());
    }

    #[test]
    fn test_duration_limits() {
        assert!(draft("nap 0m").is_err());
        assert!(draft("marathon 721m").is_err());
        assert_eq!(draft("deep work 720min").unwrap().duration_min, Some(720));
    }

    #[test]
    fn test_start_on_other_day_rejected() {
        let mut task = draft("9 gym").unwrap();
        task.start = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap().and_hms_opt(9, 0, 0);
        assert!(task.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let task = draft("2:30 p review lecture 45m #BIOL112 @UNI").unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "NOT_STARTED");
        assert_eq!(json["bucket"], "PRIORITY");
        assert_eq!(json["date"], "2024-05-02");
        assert_eq!(json["durationMin"], 45);
        assert_eq!(json["tags"][0], "BIOL112");
    }
}
