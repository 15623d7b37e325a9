//! TOML configuration file parsing and loading
//!
//! An explicitly named configuration file must exist. Without one, the
//! default `<config dir>/AppVerInc/appverinc.toml` is used when present.
//! Configuration only fills in values that were not given on the command line.

use std::path::{Path, PathBuf};

use crate::core::validation::{validate_threshold, ValidationError};

use super::args::Args;

pub const CONFIG_DIR_NAME: &str = "AppVerInc";
pub const CONFIG_FILE_NAME: &str = "appverinc.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Error in configuration file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

impl crate::core::error_handling::ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<String> {
        match self {
            ConfigError::Read { .. } => None,
            _ => Some(self.to_string()),
        }
    }
}

/// Default configuration file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Args {
    /// Load the configuration file (explicit or default) and apply it.
    ///
    /// Returns the path that was applied, if any.
    pub fn load_config_file(args: &mut Self) -> Result<Option<PathBuf>, ConfigError> {
        let config_path = match args.config_file.clone() {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Missing { path });
                }
                path
            }
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let config = read_config_table(&config_path)?;
        Self::apply_toml_values(args, &config).map_err(|source| ConfigError::Invalid {
            path: config_path.clone(),
            source,
        })?;
        Ok(Some(config_path))
    }

    /// Apply TOML configuration values to fields not set on the command line
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ValidationError> {
        if args.log_level.is_none() {
            if let Some(level) = Self::string_field(config, "log-level")? {
                if !matches!(
                    level.as_str(),
                    "trace" | "debug" | "info" | "warn" | "error" | "off"
                ) {
                    return Err(ValidationError::new(&format!(
                        "Invalid log-level '{}' (expected trace, debug, info, warn, error or off)",
                        level
                    )));
                }
                args.log_level = Some(level);
            }
        }

        if args.log_format.is_none() {
            if let Some(format) = Self::string_field(config, "log-format")? {
                if !matches!(format.as_str(), "text" | "ext" | "json") {
                    return Err(ValidationError::new(&format!(
                        "Invalid log-format '{}' (expected text, ext or json)",
                        format
                    )));
                }
                args.log_format = Some(format);
            }
        }

        if args.log_file.is_none() {
            if let Some(file) = Self::string_field(config, "log-file")? {
                args.log_file = Some(PathBuf::from(file));
            }
        }

        if let Some(value) = config.get("color") {
            let color = value
                .as_bool()
                .ok_or_else(|| ValidationError::new("Invalid color value (expected true or false)"))?;
            args.config_color = Some(color);
        }

        if args.max_build.is_none() {
            args.max_build = Self::threshold_field(config, "max-build")?;
        }
        if args.max_minor.is_none() {
            args.max_minor = Self::threshold_field(config, "max-minor")?;
        }

        if args.release_modes.is_empty() {
            if let Some(value) = config.get("release-modes") {
                args.release_modes = Self::string_list(value, "release-modes")?;
            }
        }

        Ok(())
    }

    fn string_field(config: &toml::Table, key: &str) -> Result<Option<String>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(value) => value.as_str().map(|s| Some(s.to_string())).ok_or_else(|| {
                ValidationError::new(&format!("Invalid {} value (expected a string)", key))
            }),
        }
    }

    fn threshold_field(config: &toml::Table, key: &str) -> Result<Option<u32>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(toml::Value::Integer(n)) => validate_threshold(key, &n.to_string()).map(Some),
            Some(toml::Value::String(s)) => validate_threshold(key, s).map(Some),
            Some(_) => Err(ValidationError::new(&format!(
                "Invalid {} value (expected a non-negative integer)",
                key
            ))),
        }
    }

    // Accepts "A", "A,B" or ["A", "B"]
    fn string_list(value: &toml::Value, key: &str) -> Result<Vec<String>, ValidationError> {
        let raw: Vec<&str> = if let Some(s) = value.as_str() {
            vec![s]
        } else if let Some(array) = value.as_array() {
            array
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| {
                        ValidationError::new(&format!("Invalid {} entry (expected strings)", key))
                    })
                })
                .collect::<Result<_, _>>()?
        } else {
            return Err(ValidationError::new(&format!(
                "Invalid {} value (expected a string or array of strings)",
                key
            )));
        };

        let mut modes: Vec<String> = Vec::new();
        for part in raw.iter().flat_map(|s| s.split(',')) {
            let part = part.to_string();
            if !modes.contains(&part) {
                modes.push(part);
            }
        }
        Ok(modes)
    }
}

fn read_config_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<toml::Table>(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
