//! Version Error Types

use super::triple::Version;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Malformed version '{value}': {reason}")]
    Malformed { value: String, reason: String },

    #[error("Version {version} cannot be incremented: major component would overflow")]
    Overflow { version: Version },
}

impl VersionError {
    pub(crate) fn malformed(value: &str, reason: impl Into<String>) -> Self {
        VersionError::Malformed {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for version operations
pub type VersionResult<T> = Result<T, VersionError>;
