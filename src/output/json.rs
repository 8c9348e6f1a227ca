use serde_json::json;

use crate::error::PlannerError;
use crate::features::draft::TaskDraft;
use crate::features::quickadd::{ClassifiedToken, ParseResult, Vocabulary};

/// Format a parse result as JSON
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_parse_json(
    result: &ParseResult,
    tokens: Option<&[ClassifiedToken]>,
) -> Result<String, PlannerError> {
    let output = match tokens {
        Some(tokens) => json!({
            "parsed": result,
            "tokens": tokens,
        }),
        None => serde_json::to_value(result)?,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a task draft as JSON
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_draft_json(draft: &TaskDraft) -> Result<String, PlannerError> {
    Ok(serde_json::to_string_pretty(draft)?)
}

/// Format a vocabulary as JSON
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_vocabulary_json(vocab: &Vocabulary) -> Result<String, PlannerError> {
    let buckets: serde_json::Map<String, serde_json::Value> = vocab
        .bucket_aliases()
        .map(|(alias, bucket)| (alias.to_string(), json!(bucket)))
        .collect();
    let contexts: Vec<&str> = vocab.contexts().map(|(label, _)| label).collect();
    let output = json!({
        "buckets": buckets,
        "contexts": contexts,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::draft::DraftDefaults;
    use crate::features::quickadd::QuickAddParser;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_format_parse_json_plain() {
        let result = QuickAddParser::default().parse("9am run 30m #fit", day());
        let output = format_parse_json(&result, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "run");
        assert_eq!(value["durationMin"], 30);
        assert!(value["bucket"].is_null());
    }

    #[test]
    fn test_format_parse_json_with_tokens() {
        let (result, tokens) = QuickAddParser::default().parse_explained("@mars 9 walk", day());
        let output = format_parse_json(&result, Some(&tokens)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["parsed"]["title"], "@mars walk");
        assert_eq!(value["tokens"][0]["class"], "title");
        assert_eq!(value["tokens"][1]["class"], "time");
    }

    #[test]
    fn test_format_draft_json() {
        let result = QuickAddParser::default().parse("call mum @phone", day());
        let draft = TaskDraft::from_parse(result, day(), &DraftDefaults::default()).unwrap();
        let output = format_draft_json(&draft).unwrap();
        assert!(output.contains("\"context\": \"PHONE\""));
        assert!(output.contains("\"status\": \"NOT_STARTED\""));
    }

    #[test]
    fn test_format_vocabulary_json() {
        let output = format_vocabulary_json(&Vocabulary::planner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["buckets"]["!SC"], "SHOULD_COULD");
        assert_eq!(value["contexts"].as_array().unwrap().len(), 5);
    }
}
