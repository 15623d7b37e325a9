//! Validation errors for CLI arguments and configuration values

/// A rejected argument or configuration value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// The message shown to the user
    pub fn details(&self) -> &str {
        &self.message
    }
}

impl crate::core::error_handling::ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

/// Parse a non-negative threshold value given as text
pub fn validate_threshold(name: &str, value: &str) -> Result<u32, ValidationError> {
    value.trim().parse::<u32>().map_err(|_| {
        ValidationError::new(&format!(
            "'{}' is not a valid value for {} (expected a non-negative integer)",
            value, name
        ))
    })
}

/// Check that release mode names are usable literals
pub fn validate_release_modes(modes: &[String]) -> Result<(), ValidationError> {
    for (index, mode) in modes.iter().enumerate() {
        if mode.trim().is_empty() {
            return Err(ValidationError::new(&format!(
                "Release mode at index {} cannot be empty",
                index
            )));
        }
        if mode.trim() != mode {
            return Err(ValidationError::new(&format!(
                "Release mode '{}' has leading or trailing whitespace; modes are matched exactly",
                mode
            )));
        }
    }
    Ok(())
}
