//! Path resolution for dayplan configuration files.
//!
//! All dayplan data lives in `~/.dayplan/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::PlannerError;

/// Paths to dayplan configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.dayplan/`
    pub root: PathBuf,
    /// Config file: `~/.dayplan/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// `DAYPLAN_HOME` overrides the root directory when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PlannerError> {
        if let Ok(root) = std::env::var("DAYPLAN_HOME") {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            PlannerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".dayplan")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-dayplan");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }
}
