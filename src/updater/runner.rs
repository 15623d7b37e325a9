//! End-to-end update run

use std::path::{Path, PathBuf};

use super::error::{UpdateError, UpdateResult};
use super::mode::{BuildMode, DEFAULT_RELEASE_MODES};
use super::path::metadata_path;
use crate::metadata::AssemblyInfo;
use crate::versioning::{next_version, RolloverLimits, Version};

/// Result of a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Build mode was not a release mode; nothing was read or written
    Skipped { mode: BuildMode },
    /// The metadata file was rewritten
    Bumped {
        path: PathBuf,
        previous: Version,
        current: Version,
        replacements: usize,
    },
}

/// Performs the read, bump and rewrite of one project's metadata file
#[derive(Debug, Clone)]
pub struct VersionUpdater {
    limits: RolloverLimits,
    release_modes: Vec<String>,
    base_dir: PathBuf,
}

impl Default for VersionUpdater {
    fn default() -> Self {
        Self::new(
            RolloverLimits::default(),
            DEFAULT_RELEASE_MODES.iter().map(|m| m.to_string()).collect(),
        )
    }
}

impl VersionUpdater {
    /// Create an updater resolving paths from the working directory
    pub fn new(limits: RolloverLimits, release_modes: Vec<String>) -> Self {
        Self {
            limits,
            release_modes,
            base_dir: PathBuf::from("."),
        }
    }

    /// Resolve the metadata path from `base_dir` instead of the working directory
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn limits(&self) -> RolloverLimits {
        self.limits
    }

    /// Run one pre-build step for `project` in build mode `mode`
    pub fn run(&self, mode: &str, project: &str) -> UpdateResult<UpdateOutcome> {
        let build_mode = BuildMode::classify(mode, &self.release_modes);
        match &build_mode {
            BuildMode::Release => {}
            BuildMode::Debug => {
                log::debug!("Build mode '{}' is a debug build, version left unchanged", mode);
                return Ok(UpdateOutcome::Skipped { mode: build_mode });
            }
            BuildMode::Other(name) => {
                log::warn!(
                    "Build mode '{}' is not a release mode ({}), version left unchanged",
                    name,
                    self.release_modes.join(", ")
                );
                return Ok(UpdateOutcome::Skipped { mode: build_mode });
            }
        }

        if project.trim().is_empty() {
            return Err(UpdateError::EmptyProject);
        }

        let path = metadata_path(&self.base_dir, project);
        log::debug!("Updating version in {}", path.display());
        self.bump_file(&path)
    }

    /// Bump the version held in the metadata file at `path`
    pub fn bump_file(&self, path: &Path) -> UpdateResult<UpdateOutcome> {
        let mut info = AssemblyInfo::load(path)?;
        let previous = info.current_version()?;
        let current = next_version(previous, self.limits)?;

        let replacements = info.set_version(current);
        info.save()?;

        Ok(UpdateOutcome::Bumped {
            path: path.to_path_buf(),
            previous,
            current,
            replacements,
        })
    }
}
