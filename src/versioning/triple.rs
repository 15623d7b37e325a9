//! The `major.minor.build` version triple

use std::fmt;
use std::str::FromStr;

use super::error::{VersionError, VersionResult};

/// Ordered version triple; derives lexicographic ordering from field order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Parse a dotted version string.
    ///
    /// Accepts `major.minor.build` and the four component
    /// `major.minor.build.revision` form found in most AssemblyInfo files.
    /// The revision is validated but discarded. Wildcards such as `1.0.*`,
    /// signs, blanks and components that do not fit in a `u32` are rejected.
    pub fn parse(value: &str) -> VersionResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(VersionError::malformed(value, "version string is empty"));
        }

        let components: Vec<&str> = trimmed.split('.').collect();
        if components.len() < 3 || components.len() > 4 {
            return Err(VersionError::malformed(
                value,
                format!(
                    "expected 3 or 4 dot-separated components, found {}",
                    components.len()
                ),
            ));
        }

        let mut numbers = [0u32; 4];
        for (index, component) in components.iter().enumerate() {
            numbers[index] = parse_component(value, component)?;
        }

        if components.len() == 4 {
            log::debug!(
                "Ignoring revision component {} of version '{}'",
                numbers[3],
                trimmed
            );
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

fn parse_component(value: &str, component: &str) -> VersionResult<u32> {
    if component.is_empty() {
        return Err(VersionError::malformed(value, "empty version component"));
    }
    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::malformed(
            value,
            format!("component '{}' is not a non-negative integer", component),
        ));
    }
    component.parse::<u32>().map_err(|_| {
        VersionError::malformed(value, format!("component '{}' is out of range", component))
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}
