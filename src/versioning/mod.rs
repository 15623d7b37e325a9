//! Version triples and the rollover rule
//!
//! A [`Version`] is the `major.minor.build` triple carried by the metadata
//! file. [`next_version`] computes the successor of a triple under a set of
//! [`RolloverLimits`].

pub mod error;
pub mod rollover;
pub mod triple;

pub use error::{VersionError, VersionResult};
pub use rollover::{next_version, RolloverLimits, DEFAULT_MAX_BUILD, DEFAULT_MAX_MINOR};
pub use triple::Version;
