//! Build mode classification
//!
//! Modes are matched exactly and case-sensitively. Only a release literal
//! triggers an increment; everything else, including unknown configuration
//! names, leaves the metadata file alone.

use std::fmt;

/// Release literals used when configuration does not provide any
pub const DEFAULT_RELEASE_MODES: &[&str] = &["Release", "release"];

/// Literals recognised as a debug build
pub const DEFAULT_DEBUG_MODES: &[&str] = &["Debug", "debug"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildMode {
    Release,
    Debug,
    Other(String),
}

impl BuildMode {
    /// Classify `raw` against the configured release literals
    pub fn classify<S: AsRef<str>>(raw: &str, release_modes: &[S]) -> Self {
        if release_modes.iter().any(|m| m.as_ref() == raw) {
            BuildMode::Release
        } else if DEFAULT_DEBUG_MODES.iter().any(|m| *m == raw) {
            BuildMode::Debug
        } else {
            BuildMode::Other(raw.to_string())
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(self, BuildMode::Release)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Release => write!(f, "release"),
            BuildMode::Debug => write!(f, "debug"),
            BuildMode::Other(name) => write!(f, "{}", name),
        }
    }
}
