//! Version marker recognition
//!
//! A marker is an assembly attribute call whose single argument carries the
//! version, e.g. `[assembly: AssemblyVersion("1.0.0.0")]`. The argument span
//! ends at the first `)` on the same line.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::versioning::Version;

/// File name of the metadata file inside the project's properties directory
pub const METADATA_FILE_NAME: &str = "AssemblyInfo.cs";

/// Directory under the project holding the metadata file
pub const PROPERTIES_DIR: &str = "Properties";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Source of the current version, rewritten on every bump
    AssemblyVersion,
    /// Sibling file version marker, rewritten to match
    AssemblyFileVersion,
    /// Long form of the file version marker, rewritten to match
    AssemblyFileVersionAttribute,
}

impl Marker {
    pub const ALL: [Marker; 3] = [
        Marker::AssemblyVersion,
        Marker::AssemblyFileVersion,
        Marker::AssemblyFileVersionAttribute,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Marker::AssemblyVersion => "AssemblyVersion",
            Marker::AssemblyFileVersion => "AssemblyFileVersion",
            Marker::AssemblyFileVersionAttribute => "AssemblyFileVersionAttribute",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|marker| marker.name() == name)
    }

    /// Render the full marker call carrying `version`
    pub fn render(self, version: Version) -> String {
        format!("{}(\"{}\")", self.name(), version)
    }
}

// Longest alternative first; `\(` after the name keeps the two file version
// forms from shadowing each other either way.
static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?P<name>AssemblyFileVersionAttribute|AssemblyFileVersion|AssemblyVersion)\((?P<arg>[^)\n]*)\)",
    )
    .expect("marker pattern is a valid regex")
});

/// A marker occurrence found in the metadata text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch<'t> {
    pub marker: Marker,
    /// Raw argument text between the parentheses
    pub argument: &'t str,
    /// Whether the marker sits behind a `//` line comment
    pub commented: bool,
}

impl<'t> MarkerMatch<'t> {
    /// The argument with its surrounding double quotes removed, if quoted
    pub fn quoted_value(&self) -> Option<&'t str> {
        let trimmed = self.argument.trim();
        trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
    }
}

/// Iterate over every marker occurrence in `text`
pub fn find_markers(text: &str) -> impl Iterator<Item = MarkerMatch<'_>> {
    MARKER_PATTERN.captures_iter(text).filter_map(move |caps| {
        let name = caps.name("name")?;
        let marker = Marker::from_name(name.as_str())?;
        let argument = caps.name("arg").map_or("", |m| m.as_str());
        Some(MarkerMatch {
            marker,
            argument,
            commented: is_line_commented(text, name.start()),
        })
    })
}

/// Replace every marker argument with `version`, returning the new text and
/// the number of markers rewritten
pub fn rewrite_markers(text: &str, version: Version) -> (String, usize) {
    let mut count = 0;
    let rewritten = MARKER_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        count += 1;
        match Marker::from_name(&caps["name"]) {
            Some(marker) => marker.render(version),
            None => caps[0].to_string(),
        }
    });
    (rewritten.into_owned(), count)
}

// Only a line that opens with `//` counts; a `//` inside an earlier string
// literal such as a URL does not.
fn is_line_commented(text: &str, offset: usize) -> bool {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..offset].trim_start().starts_with("//")
}
