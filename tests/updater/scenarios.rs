//! Rollover scenarios through `VersionUpdater::run`

use appverinc::metadata::MetadataError;
use appverinc::updater::{BuildMode, UpdateError, UpdateOutcome, VersionUpdater};
use appverinc::versioning::{RolloverLimits, Version};

use crate::common::{assembly_info, SolutionFixture, PROJECT};

fn release(fixture: &SolutionFixture) -> UpdateOutcome {
    VersionUpdater::default()
        .with_base_dir(&fixture.work_dir)
        .run("Release", PROJECT)
        .unwrap()
}

#[test]
fn test_build_rollover_into_minor() {
    let fixture = SolutionFixture::with_version("1.0.999");
    let outcome = release(&fixture);

    match outcome {
        UpdateOutcome::Bumped {
            previous,
            current,
            replacements,
            ..
        } => {
            assert_eq!(previous, Version::new(1, 0, 999));
            assert_eq!(current, Version::new(1, 1, 0));
            assert_eq!(replacements, 2);
        }
        other => panic!("expected Bumped, got {:?}", other),
    }
    assert_eq!(fixture.metadata_text(), assembly_info("1.1.0"));
}

#[test]
fn test_double_rollover_into_major() {
    let fixture = SolutionFixture::with_version("1.9.999");
    release(&fixture);
    assert_eq!(fixture.metadata_text(), assembly_info("2.0.0"));
}

#[test]
fn test_first_build_from_zero() {
    let fixture = SolutionFixture::with_version("0.0.0");
    release(&fixture);
    assert_eq!(fixture.metadata_text(), assembly_info("0.0.1"));
}

#[test]
fn test_four_component_version_loses_revision() {
    let fixture = SolutionFixture::with_version("1.0.0.0");
    release(&fixture);
    assert_eq!(fixture.metadata_text(), assembly_info("1.0.1"));
}

#[test]
fn test_debug_mode_leaves_file_byte_for_byte() {
    let fixture = SolutionFixture::with_version("2.3.500");
    let before = std::fs::read(&fixture.metadata).unwrap();

    let outcome = VersionUpdater::default()
        .with_base_dir(&fixture.work_dir)
        .run("Debug", PROJECT)
        .unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::Skipped {
            mode: BuildMode::Debug
        }
    );
    assert_eq!(std::fs::read(&fixture.metadata).unwrap(), before);
}

#[test]
fn test_unknown_mode_is_a_no_op() {
    let fixture = SolutionFixture::with_version("2.3.500");
    let outcome = VersionUpdater::default()
        .with_base_dir(&fixture.work_dir)
        .run("Staging", PROJECT)
        .unwrap();

    assert!(matches!(outcome, UpdateOutcome::Skipped { .. }));
    assert_eq!(fixture.metadata_text(), assembly_info("2.3.500"));
}

#[test]
fn test_configured_release_mode_and_limits() {
    let fixture = SolutionFixture::with_version("3.4.49");
    let updater = VersionUpdater::new(RolloverLimits::new(49, 4), vec!["Staging".to_string()])
        .with_base_dir(&fixture.work_dir);

    updater.run("Staging", PROJECT).unwrap();
    assert_eq!(fixture.metadata_text(), assembly_info("4.0.0"));

    // The default literal is no longer a release mode
    let outcome = updater.run("Release", PROJECT).unwrap();
    assert!(matches!(outcome, UpdateOutcome::Skipped { .. }));
    assert_eq!(fixture.metadata_text(), assembly_info("4.0.0"));
}

#[test]
fn test_consecutive_runs_never_repeat_a_version() {
    let fixture = SolutionFixture::with_version("0.9.997");
    let updater = VersionUpdater::default().with_base_dir(&fixture.work_dir);

    let mut seen = Vec::new();
    for _ in 0..5 {
        match updater.run("Release", PROJECT).unwrap() {
            UpdateOutcome::Bumped {
                previous, current, ..
            } => {
                assert!(current > previous);
                assert!(!seen.contains(&current));
                seen.push(current);
            }
            other => panic!("expected Bumped, got {:?}", other),
        }
    }
    assert_eq!(
        seen,
        vec![
            Version::new(0, 9, 998),
            Version::new(0, 9, 999),
            Version::new(1, 0, 0),
            Version::new(1, 0, 1),
            Version::new(1, 0, 2),
        ]
    );
}

#[test]
fn test_unknown_project_reports_missing_file() {
    let fixture = SolutionFixture::with_version("1.0.0");
    let err = VersionUpdater::default()
        .with_base_dir(&fixture.work_dir)
        .run("Release", "OtherApp")
        .unwrap_err();

    match err {
        UpdateError::Metadata(MetadataError::NotFound { path }) => {
            assert!(path.ends_with("OtherApp/Properties/AssemblyInfo.cs"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}
