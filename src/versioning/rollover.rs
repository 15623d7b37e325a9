//! Rollover arithmetic
//!
//! The build number counts up to `max_build`; the increment after that resets
//! it to zero and carries into minor. When minor would pass `max_minor` the
//! carry moves into major and both lower fields reset. Both carries can fire
//! in one step (`1.9.999` -> `2.0.0`) because the minor check runs on the
//! minor value produced by the build carry.

use super::error::{VersionError, VersionResult};
use super::triple::Version;

pub const DEFAULT_MAX_BUILD: u32 = 999;
pub const DEFAULT_MAX_MINOR: u32 = 9;

/// Thresholds at which the lower fields roll over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverLimits {
    pub max_build: u32,
    pub max_minor: u32,
}

impl RolloverLimits {
    pub const fn new(max_build: u32, max_minor: u32) -> Self {
        Self {
            max_build,
            max_minor,
        }
    }
}

impl Default for RolloverLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BUILD, DEFAULT_MAX_MINOR)
    }
}

/// Compute the version that follows `current`.
///
/// Only equality with a limit triggers a carry, so a field already above its
/// limit keeps counting. Fails with [`VersionError::Overflow`] instead of
/// wrapping when a field would exceed `u32::MAX`.
pub fn next_version(current: Version, limits: RolloverLimits) -> VersionResult<Version> {
    let overflow = || VersionError::Overflow { version: current };

    // Widened so that `max_minor + 1` is representable for any limit
    let (minor, build) = if current.build == limits.max_build {
        (u64::from(current.minor) + 1, 0)
    } else {
        let build = current.build.checked_add(1).ok_or_else(overflow)?;
        (u64::from(current.minor), build)
    };

    if minor == u64::from(limits.max_minor) + 1 {
        let major = current.major.checked_add(1).ok_or_else(overflow)?;
        log::trace!("Minor rollover: {} -> {}.0.0", current, major);
        return Ok(Version::new(major, 0, 0));
    }

    let minor = u32::try_from(minor).map_err(|_| overflow())?;
    Ok(Version::new(current.major, minor, build))
}

impl Version {
    /// Convenience wrapper around [`next_version`]
    pub fn next(self, limits: RolloverLimits) -> VersionResult<Version> {
        next_version(self, limits)
    }
}
