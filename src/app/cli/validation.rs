//! CLI argument validation
//!
//! Runs after configuration has been merged, so values from both sources are
//! checked the same way. The project name is not checked here: it only matters
//! once the build mode is known to be a release mode.

use crate::core::validation::{validate_release_modes, ValidationError};

use super::args::Args;

impl Args {
    /// Validate arguments for consistency and constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_release_modes(&self.release_modes)?;
        self.validate_log_file()?;
        Ok(())
    }

    fn validate_log_file(&self) -> Result<(), ValidationError> {
        match &self.log_file {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::new(
                "Log file path cannot be empty (use 'none' to disable file logging)",
            )),
            _ => Ok(()),
        }
    }
}
