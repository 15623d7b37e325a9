//! CLI TOML configuration tests

use appverinc::app::cli::{Args, ConfigError};
use appverinc::versioning::RolloverLimits;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("appverinc.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_config_file_supplies_missing_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "max-build = 99\nmax-minor = 4\nrelease-modes = \"Release,Staging\"\nlog-level = \"warn\"\n",
    );

    let mut args =
        Args::try_parse_from(["appverinc", "--config-file", path.to_str().unwrap()]).unwrap();
    Args::load_config_file(&mut args).unwrap();

    assert_eq!(args.rollover_limits(), RolloverLimits::new(99, 4));
    assert_eq!(args.effective_release_modes(), vec!["Release", "Staging"]);
    assert_eq!(args.log_level.as_deref(), Some("warn"));
    assert!(args.validate().is_ok());
}

#[test]
fn test_cli_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "max-build = 99\ncolor = true\nlog-format = \"json\"\n");

    let mut args = Args::try_parse_from([
        "appverinc",
        "--config-file",
        path.to_str().unwrap(),
        "--max-build",
        "500",
        "--no-color",
        "--log-format",
        "text",
    ])
    .unwrap();
    Args::load_config_file(&mut args).unwrap();

    assert_eq!(args.rollover_limits().max_build, 500);
    assert!(!args.use_color(true));
    assert_eq!(args.log_format.as_deref(), Some("text"));
}

#[test]
fn test_invalid_config_value_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "max-minor = -3\n");

    let mut args =
        Args::try_parse_from(["appverinc", "--config-file", path.to_str().unwrap()]).unwrap();
    let err = Args::load_config_file(&mut args).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { .. }));
    let message = err.to_string();
    assert!(message.contains("appverinc.toml"), "got: {}", message);
    assert!(message.contains("max-minor"), "got: {}", message);
}

#[test]
fn test_empty_release_mode_in_config_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "release-modes = [\"Release\", \"\"]\n");

    let mut args =
        Args::try_parse_from(["appverinc", "--config-file", path.to_str().unwrap()]).unwrap();
    Args::load_config_file(&mut args).unwrap();
    assert!(args.validate().is_err());
}
