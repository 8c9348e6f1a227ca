//! Logging bootstrap for the command-line front end.
//!
//! The library only talks to the `log` facade. The binary installs a
//! stderr logger once per process so stdout stays clean for command output.
//!
//! Events are written as `key=value` pairs, e.g.
//! `event=quick_add_parse module=quickadd status=ok tokens=4 consumed=2`.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::PlannerError;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start the stderr logger at `level`.
///
/// A `RUST_LOG` style environment spec takes precedence over `level`.
/// Calling this again after a successful start is a no-op.
///
/// # Errors
///
/// Returns `PlannerError::Logging` if `level` is unsupported or the logger
/// backend cannot start.
pub fn init_logging(level: &str) -> Result<(), PlannerError> {
    let level = normalize_level(level)?;

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, PlannerError> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|e| PlannerError::Logging(format!("invalid log level `{level}`: {e}")))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|e| PlannerError::Logging(format!("failed to start logger: {e}")))?;

        info!(
            "event=app_start module=cli status=ok level={level} version={}",
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;

    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, PlannerError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(PlannerError::Logging(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}
