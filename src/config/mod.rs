//! Configuration management for dayplan.
//!
//! This module handles loading and saving configuration from `~/.dayplan/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, QuickAddConfig};
