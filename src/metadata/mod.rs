//! AssemblyInfo metadata file handling
//!
//! Locates the version markers inside the metadata file text, extracts the
//! current version and rewrites the marker spans in place. Text outside the
//! matched spans is never touched.

pub mod assembly_info;
pub mod error;
pub mod markers;

pub use assembly_info::AssemblyInfo;
pub use error::{MetadataError, MetadataResult};
pub use markers::{Marker, METADATA_FILE_NAME, PROPERTIES_DIR};
