//! Quick-add task parser.
//!
//! Parses strings like "2:30 p review lecture 45m #BIOL112 @UNI !P" into
//! structured task data. Every whitespace-delimited token is either consumed
//! as a marker or kept, in order, as part of the title.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Vocabulary;
use crate::planner::{Bucket, Context};

// Compiled regex patterns
static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "45m", "90min", "20M"
    Regex::new(r"(?i)^([0-9]+)(?:m|min)$")
        .unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "9", "14:30", "2:30p", "11am"
    Regex::new(r"(?i)^([0-9]{1,2})(?::([0-9]{2}))?(am|pm|a|p)?$")
        .unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

static DEFAULT_PARSER: Lazy<QuickAddParser> = Lazy::new(QuickAddParser::default);

/// Morning/afternoon marker attached to a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Recognize `a`, `am`, `p` or `pm` in any case.
    #[must_use]
    pub fn from_marker(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "a" | "am" => Some(Self::Am),
            "p" | "pm" => Some(Self::Pm),
            _ => None,
        }
    }

    /// Convert a 12-hour clock hour to 24-hour form.
    ///
    /// Hours that are already past noon are left alone, so "13pm" stays 13.
    #[must_use]
    pub const fn resolve(self, hour: u32) -> u32 {
        match self {
            Self::Pm if hour < 12 => hour + 12,
            Self::Am if hour == 12 => 0,
            _ => hour,
        }
    }
}

/// How a single input token was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Bucket,
    Tag,
    Context,
    Duration,
    Time,
    Meridiem,
    Title,
}

impl TokenClass {
    /// Whether the token was taken out of the title.
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        !matches!(self, Self::Title)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bucket => "bucket",
            Self::Tag => "tag",
            Self::Context => "context",
            Self::Duration => "duration",
            Self::Time => "time",
            Self::Meridiem => "meridiem",
            Self::Title => "title",
        }
    }
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token together with the rule that claimed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedToken {
    /// Position among the whitespace-delimited tokens.
    pub index: usize,
    pub text: String,
    pub class: TokenClass,
}

/// Result of parsing a quick-add line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Unconsumed tokens joined by single spaces. May be empty.
    pub title: String,
    /// Scheduled start on the reference day.
    pub start: Option<NaiveDateTime>,
    /// Duration in minutes from a "45m" / "90min" token.
    pub duration_min: Option<u32>,
    /// Tags from `#tag` tokens, in input order, duplicates kept.
    pub tags: Vec<String>,
    /// Context from a known `@context` token.
    pub context: Option<Context>,
    /// Bucket from a `!P` / `!SC` style token.
    pub bucket: Option<Bucket>,
}

impl ParseResult {
    /// Check if a start time was recognized.
    #[must_use]
    pub const fn has_schedule(&self) -> bool {
        self.start.is_some()
    }

    /// True when nothing at all was recognized or kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.start.is_none()
            && self.duration_min.is_none()
            && self.tags.is_empty()
            && self.context.is_none()
            && self.bucket.is_none()
    }
}

/// Behaviour switches for [`QuickAddParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Consume a standalone `a`/`am`/`p`/`pm` token even when no time was
    /// found to attach it to. Enabled by default for compatibility with
    /// existing quick-add behaviour; when disabled such tokens stay in the
    /// title.
    pub consume_orphan_meridiem: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            consume_orphan_meridiem: true,
        }
    }
}

/// Parser for the quick-add micro-grammar.
///
/// Holds only immutable lookup tables, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct QuickAddParser {
    vocabulary: Vocabulary,
    options: ParserOptions,
}

impl Default for QuickAddParser {
    /// Planner vocabulary with default options.
    fn default() -> Self {
        Self::new(Vocabulary::planner())
    }
}

impl QuickAddParser {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            options: ParserOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub const fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parse `input`, anchoring any time of day to `day`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, Timelike};
    /// use dayplan::features::quickadd::QuickAddParser;
    /// use dayplan::planner::{Bucket, Context};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let parser = QuickAddParser::default();
    ///
    /// let task = parser.parse("2:30 p review lecture 45m #BIOL112 @UNI !P", day);
    /// assert_eq!(task.title, "review lecture");
    /// assert_eq!(task.duration_min, Some(45));
    /// assert_eq!(task.tags, vec!["BIOL112"]);
    /// assert_eq!(task.context, Some(Context::Uni));
    /// assert_eq!(task.bucket, Some(Bucket::Priority));
    /// assert_eq!(task.start.map(|s| s.hour()), Some(14));
    /// ```
    #[must_use]
    pub fn parse(&self, input: &str, day: NaiveDate) -> ParseResult {
        self.parse_explained(input, day).0
    }

    /// Parse `input` and also report how each token was classified.
    ///
    /// Tokens are split with [`str::split_whitespace`], i.e. on Unicode
    /// `White_Space`. U+FEFF is not in that set, so a leading byte-order mark
    /// stays glued to the first token.
    #[must_use]
    pub fn parse_explained(
        &self,
        input: &str,
        day: NaiveDate,
    ) -> (ParseResult, Vec<ClassifiedToken>) {
        trace!("event=quick_add_parse module=quickadd status=start input={input:?}");

        let mut scan = Scan::new(&self.vocabulary);
        let mut tokens: Vec<ClassifiedToken> = input
            .split_whitespace()
            .enumerate()
            .map(|(index, text)| ClassifiedToken {
                index,
                text: text.to_string(),
                class: scan.classify(text),
            })
            .collect();

        let Scan {
            mut result,
            clock,
            meridiem,
            ..
        } = scan;

        match clock {
            Some((hour, minute)) => {
                let hour = meridiem.map_or(hour, |m| m.resolve(hour));
                result.start = anchor(day, hour, minute);
            },
            None if !self.options.consume_orphan_meridiem => {
                for token in &mut tokens {
                    if token.class == TokenClass::Meridiem {
                        token.class = TokenClass::Title;
                    }
                }
            },
            None => {},
        }

        result.title = tokens
            .iter()
            .filter(|t| !t.class.is_consumed())
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        debug!(
            "event=quick_add_parse module=quickadd status=ok tokens={} consumed={} scheduled={}",
            tokens.len(),
            tokens.iter().filter(|t| t.class.is_consumed()).count(),
            result.has_schedule()
        );

        (result, tokens)
    }
}

/// Parse with the planner vocabulary and default options.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dayplan::features::quickadd::parse_quick_add;
///
/// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let task = parse_quick_add("10:30 planning", day);
/// assert_eq!(task.title, "planning");
/// assert!(task.bucket.is_none());
/// assert_eq!(task.start, day.and_hms_opt(10, 30, 0));
/// ```
#[must_use]
pub fn parse_quick_add(input: &str, day: NaiveDate) -> ParseResult {
    DEFAULT_PARSER.parse(input, day)
}

/// Per-call state while walking the tokens.
struct Scan<'v> {
    vocabulary: &'v Vocabulary,
    result: ParseResult,
    clock: Option<(u32, u32)>,
    meridiem: Option<Meridiem>,
}

impl<'v> Scan<'v> {
    fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            result: ParseResult::default(),
            clock: None,
            meridiem: None,
        }
    }

    /// Apply the first matching rule to `token`.
    fn classify(&mut self, token: &str) -> TokenClass {
        if let Some(bucket) = self.vocabulary.bucket(token) {
            self.result.bucket = Some(bucket);
            return TokenClass::Bucket;
        }

        if let Some(tag) = token.strip_prefix('#').filter(|t| !t.is_empty()) {
            self.result.tags.push(tag.to_string());
            return TokenClass::Tag;
        }

        // Unknown contexts fall through and end up in the title.
        if let Some(context) = token
            .strip_prefix('@')
            .filter(|c| !c.is_empty())
            .and_then(|c| self.vocabulary.context(c))
        {
            self.result.context = Some(context);
            return TokenClass::Context;
        }

        if let Some(minutes) = parse_duration(token) {
            self.result.duration_min = Some(minutes);
            return TokenClass::Duration;
        }

        if let Some((hour, minute, meridiem)) = parse_clock(token) {
            self.clock = Some((hour, minute));
            if meridiem.is_some() {
                self.meridiem = meridiem;
            }
            return TokenClass::Time;
        }

        if self.meridiem.is_none() {
            if let Some(meridiem) = Meridiem::from_marker(token) {
                self.meridiem = Some(meridiem);
                return TokenClass::Meridiem;
            }
        }

        TokenClass::Title
    }
}

/// Minutes from a "45m" / "90min" token. Values that overflow are ignored.
fn parse_duration(token: &str) -> Option<u32> {
    DURATION_PATTERN
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Hour, minute and optional meridiem from a clock token.
///
/// Out-of-range values (hour > 23, minute > 59) are not a clock time.
fn parse_clock(token: &str) -> Option<(u32, u32, Option<Meridiem>)> {
    let caps = TIME_PATTERN.captures(token)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if hour > 23 || minute > 59 {
        return None;
    }
    let meridiem = caps.get(3).and_then(|m| Meridiem::from_marker(m.as_str()));
    Some((hour, minute, meridiem))
}

/// Midnight of `day` plus the given clock offset.
fn anchor(day: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    Some(midnight + Duration::minutes(i64::from(hour * 60 + minute)))
}
