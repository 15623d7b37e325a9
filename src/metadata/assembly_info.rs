//! In-memory view of an AssemblyInfo file

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::error::{MetadataError, MetadataResult};
use super::markers::{find_markers, rewrite_markers, Marker};
use crate::versioning::{Version, VersionError};

/// Metadata file contents together with the path they were loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyInfo {
    path: PathBuf,
    text: String,
}

impl AssemblyInfo {
    /// Read the whole file into memory
    pub fn load(path: &Path) -> MetadataResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                log::debug!("Loaded {} ({} bytes)", path.display(), text.len());
                Ok(Self::from_text(path, text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(MetadataError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(source) => Err(MetadataError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Version held by the first active `AssemblyVersion` marker.
    ///
    /// Markers behind a `//` line comment are skipped, so the template line
    /// `// [assembly: AssemblyVersion("1.0.*")]` never acts as the source.
    pub fn current_version(&self) -> MetadataResult<Version> {
        let source = find_markers(&self.text)
            .find(|m| m.marker == Marker::AssemblyVersion && !m.commented)
            .ok_or_else(|| MetadataError::MarkerNotFound {
                path: self.path.clone(),
            })?;

        let value = source.quoted_value().ok_or_else(|| MetadataError::Version {
            path: self.path.clone(),
            source: VersionError::Malformed {
                value: source.argument.to_string(),
                reason: "version argument must be a quoted string".to_string(),
            },
        })?;

        Version::parse(value).map_err(|source| MetadataError::Version {
            path: self.path.clone(),
            source,
        })
    }

    /// Rewrite every marker to carry `version`; returns how many were rewritten
    pub fn set_version(&mut self, version: Version) -> usize {
        let (text, count) = rewrite_markers(&self.text, version);
        self.text = text;
        count
    }

    /// Replace the file on disk with the current text.
    ///
    /// The text goes to a temporary file next to the target which is then
    /// renamed over it, so readers see either the old or the new contents.
    pub fn save(&self) -> MetadataResult<()> {
        let write_error = |source: std::io::Error| MetadataError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        temp.write_all(self.text.as_bytes()).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;

        if let Ok(existing) = fs::metadata(&self.path) {
            if let Err(e) = fs::set_permissions(temp.path(), existing.permissions()) {
                log::debug!("Could not copy permissions of {}: {}", self.path.display(), e);
            }
        }

        temp.persist(&self.path).map_err(|e| write_error(e.error))?;
        log::debug!("Wrote {} ({} bytes)", self.path.display(), self.text.len());
        Ok(())
    }
}
