//! Quick-add parsing for single-line task entry.
//!
//! This module turns input like:
//! - "2:30 p review lecture 45m #BIOL112 @UNI !P"
//! - "10:30 planning"
//! - "#errands @home buy milk !sc"
//!
//! into a title plus scheduled time, duration, tags, context and bucket.

mod parser;
mod vocabulary;

pub use parser::{
    parse_quick_add, ClassifiedToken, Meridiem, ParseResult, ParserOptions, QuickAddParser,
    TokenClass,
};
pub use vocabulary::Vocabulary;
