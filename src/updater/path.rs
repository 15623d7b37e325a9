//! Metadata path convention
//!
//! The tool lives next to the solution file but runs from the project's
//! output directory (`<solution>/<project>/bin/<Configuration>`), so the
//! metadata file is three levels up and then down into the target project.

use std::path::{Path, PathBuf};

use crate::metadata::{METADATA_FILE_NAME, PROPERTIES_DIR};

/// Number of parent directories climbed from the working directory
pub const PARENT_LEVELS: usize = 3;

/// `<base>/../../../<project>/Properties/AssemblyInfo.cs`
pub fn metadata_path(base: &Path, project: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for _ in 0..PARENT_LEVELS {
        path.push("..");
    }
    path.push(project);
    path.push(PROPERTIES_DIR);
    path.push(METADATA_FILE_NAME);
    path
}
