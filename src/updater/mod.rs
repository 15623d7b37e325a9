//! Version Rollover Updater
//!
//! Ties the pieces together for one pre-build invocation: classify the build
//! mode, derive the metadata path from the project name, bump the version and
//! write the file back.

pub mod error;
pub mod mode;
pub mod path;
pub mod runner;

pub use error::{UpdateError, UpdateResult};
pub use mode::{BuildMode, DEFAULT_DEBUG_MODES, DEFAULT_RELEASE_MODES};
pub use path::{metadata_path, PARENT_LEVELS};
pub use runner::{UpdateOutcome, VersionUpdater};
