//! Core utilities shared across features.

mod day;

pub use day::{
    from_day_string, parse_start_input, to_day_string, today_local, with_time, DAY_FORMAT,
};
