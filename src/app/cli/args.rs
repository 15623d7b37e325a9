//! Core CLI arguments structure and basic functionality
//!
//! The two positionals drive the update itself; everything else configures
//! logging, colour and rollover behaviour. Configuration loading and
//! validation live in sibling modules.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::updater::{VersionUpdater, DEFAULT_RELEASE_MODES};
use crate::versioning::{RolloverLimits, DEFAULT_MAX_BUILD, DEFAULT_MAX_MINOR};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "appverinc")]
#[command(about = "Increments the AssemblyInfo.cs version of a project on every release build")]
#[command(version, long_version = crate::core::version::long_version())]
#[command(
    after_help = "Run as a pre-build event from the solution directory:\n    \"$(SolutionDir)appverinc\" $(ConfigurationName) \"$(ProjectName)\""
)]
pub struct Args {
    /// Build mode, e.g. Release or Debug; only release modes bump the version
    #[arg(value_name = "MODE")]
    pub mode: Option<String>,

    /// Name of the project whose Properties/AssemblyInfo.cs is updated
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Colour preference from the configuration file
    #[arg(skip)]
    pub config_color: Option<bool>,

    /// Highest build number before it rolls over into minor (default: 999)
    #[arg(long = "max-build", value_name = "N")]
    pub max_build: Option<u32>,

    /// Highest minor number before it rolls over into major (default: 9)
    #[arg(long = "max-minor", value_name = "N")]
    pub max_minor: Option<u32>,

    /// Build modes that trigger an increment (default: Release,release)
    #[arg(long = "release-mode", value_name = "NAMES", value_delimiter = ',', action = ArgAction::Append)]
    pub release_modes: Vec<String>,
}

impl Args {
    /// Both positionals, when present
    pub fn operation(&self) -> Option<(&str, &str)> {
        match (self.mode.as_deref(), self.project.as_deref()) {
            (Some(mode), Some(project)) => Some((mode, project)),
            _ => None,
        }
    }

    /// Rollover thresholds with defaults filled in
    pub fn rollover_limits(&self) -> RolloverLimits {
        RolloverLimits::new(
            self.max_build.unwrap_or(DEFAULT_MAX_BUILD),
            self.max_minor.unwrap_or(DEFAULT_MAX_MINOR),
        )
    }

    /// Release literals with defaults filled in
    pub fn effective_release_modes(&self) -> Vec<String> {
        if self.release_modes.is_empty() {
            DEFAULT_RELEASE_MODES.iter().map(|m| m.to_string()).collect()
        } else {
            self.release_modes.clone()
        }
    }

    /// Explicit colour choice: CLI flags first, then configuration
    pub fn color_override(&self) -> Option<bool> {
        if self.no_color {
            Some(false)
        } else if self.color {
            Some(true)
        } else {
            self.config_color
        }
    }

    /// Whether to colour output going to a stream with the given TTY state
    pub fn use_color(&self, is_terminal: bool) -> bool {
        self.color_override().unwrap_or(is_terminal)
    }

    /// Log file path, honouring the `none` sentinel
    pub fn effective_log_file(&self) -> Option<&PathBuf> {
        self.log_file
            .as_ref()
            .filter(|path| path.as_os_str() != "none")
    }

    /// Build the updater described by these arguments
    pub fn updater(&self) -> VersionUpdater {
        VersionUpdater::new(self.rollover_limits(), self.effective_release_modes())
    }
}
