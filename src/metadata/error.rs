//! Metadata Error Types

use std::path::PathBuf;

use crate::versioning::VersionError;

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Metadata file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read metadata file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No AssemblyVersion(\"x.y.z\") marker found in {}", path.display())]
    MarkerNotFound { path: PathBuf },

    #[error("Invalid version in {}: {source}", path.display())]
    Version {
        path: PathBuf,
        #[source]
        source: VersionError,
    },

    #[error("Failed to write metadata file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl crate::core::error_handling::ContextualError for MetadataError {
    fn is_user_actionable(&self) -> bool {
        match self {
            MetadataError::NotFound { .. } => true, // wrong project name or layout
            MetadataError::MarkerNotFound { .. } => true,
            MetadataError::Version { .. } => true, // file content can be fixed
            MetadataError::Read { .. } => false,
            MetadataError::Write { .. } => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            MetadataError::NotFound { path } => Some(format!(
                "Metadata file not found: {} (check the project name and that the tool runs from the solution layout)",
                path.display()
            )),
            MetadataError::MarkerNotFound { .. } | MetadataError::Version { .. } => {
                Some(self.to_string())
            }
            _ => None,
        }
    }
}

/// Result type for metadata operations
pub type MetadataResult<T> = Result<T, MetadataError>;
