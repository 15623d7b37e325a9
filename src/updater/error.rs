//! Updater Error Types

use crate::core::error_handling::ContextualError;
use crate::metadata::MetadataError;
use crate::versioning::VersionError;

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("Project name must not be empty")]
    EmptyProject,

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Cannot compute next version: {0}")]
    Rollover(#[from] VersionError),
}

impl ContextualError for UpdateError {
    fn is_user_actionable(&self) -> bool {
        match self {
            UpdateError::EmptyProject => true,
            UpdateError::Metadata(inner) => inner.is_user_actionable(),
            UpdateError::Rollover(_) => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            UpdateError::EmptyProject => Some(self.to_string()),
            UpdateError::Metadata(inner) => inner.user_message(),
            UpdateError::Rollover(_) => Some(self.to_string()),
        }
    }
}

/// Result type for updater operations
pub type UpdateResult<T> = Result<T, UpdateError>;
