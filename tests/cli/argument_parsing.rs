//! CLI argument parsing tests

use appverinc::app::cli::Args;
use appverinc::versioning::RolloverLimits;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_positionals_with_global_options() {
    let args = Args::try_parse_from([
        "appverinc",
        "--log-level",
        "debug",
        "Release",
        "--log-format=ext",
        "DemoApp",
    ])
    .unwrap();

    assert_eq!(args.operation(), Some(("Release", "DemoApp")));
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("ext"));
}

#[test]
fn test_missing_positionals_parse_successfully() {
    // The manual is printed instead of a clap error
    let args = Args::try_parse_from(["appverinc"]).unwrap();
    assert_eq!(args.mode, None);
    assert_eq!(args.project, None);

    let args = Args::try_parse_from(["appverinc", "Release"]).unwrap();
    assert_eq!(args.mode.as_deref(), Some("Release"));
    assert_eq!(args.operation(), None);
}

#[test]
fn test_extra_positional_is_rejected() {
    assert!(Args::try_parse_from(["appverinc", "Release", "DemoApp", "extra"]).is_err());
}

#[test]
fn test_short_options() {
    let args = Args::try_parse_from([
        "appverinc",
        "-c",
        "custom.toml",
        "-l",
        "warn",
        "-o",
        "json",
        "-f",
        "bump.log",
    ])
    .unwrap();

    assert_eq!(args.config_file, Some(PathBuf::from("custom.toml")));
    assert_eq!(args.log_level.as_deref(), Some("warn"));
    assert_eq!(args.log_format.as_deref(), Some("json"));
    assert_eq!(args.effective_log_file(), Some(&PathBuf::from("bump.log")));
}

#[test]
fn test_threshold_flags() {
    let args = Args::try_parse_from(["appverinc", "--max-build", "9999", "--max-minor", "99"]).unwrap();
    assert_eq!(args.rollover_limits(), RolloverLimits::new(9999, 99));

    assert!(Args::try_parse_from(["appverinc", "--max-build", "-1"]).is_err());
    assert!(Args::try_parse_from(["appverinc", "--max-minor", "many"]).is_err());
}

#[test]
fn test_invalid_log_format_rejected() {
    assert!(Args::try_parse_from(["appverinc", "--log-format", "xml"]).is_err());
}

#[test]
fn test_version_flag_is_reported_by_clap() {
    let err = Args::try_parse_from(["appverinc", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
