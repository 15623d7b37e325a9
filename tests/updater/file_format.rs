//! Metadata file preservation around the rewritten markers

use appverinc::metadata::MetadataError;
use appverinc::updater::{UpdateError, VersionUpdater};

use crate::common::{SolutionFixture, PROJECT};

fn run_release(fixture: &SolutionFixture) -> Result<(), UpdateError> {
    VersionUpdater::default()
        .with_base_dir(&fixture.work_dir)
        .run("Release", PROJECT)
        .map(|_| ())
}

#[test]
fn test_template_comment_is_not_the_version_source() {
    let fixture = SolutionFixture::with_contents(
        "// [assembly: AssemblyVersion(\"1.0.*\")]\n[assembly: AssemblyVersion(\"1.2.3.0\")]\n[assembly: AssemblyFileVersion(\"1.2.3.0\")]\n",
    );
    run_release(&fixture).unwrap();
    assert_eq!(
        fixture.metadata_text(),
        "// [assembly: AssemblyVersion(\"1.2.4\")]\n[assembly: AssemblyVersion(\"1.2.4\")]\n[assembly: AssemblyFileVersion(\"1.2.4\")]\n"
    );
}

#[test]
fn test_long_form_file_version_attribute_is_rewritten() {
    let fixture = SolutionFixture::with_contents(
        "[assembly: AssemblyVersion(\"5.0.9\")]\r\n[assembly: System.Reflection.AssemblyFileVersionAttribute(\"0.0.0\")]\r\n",
    );
    run_release(&fixture).unwrap();
    assert_eq!(
        fixture.metadata_text(),
        "[assembly: AssemblyVersion(\"5.0.10\")]\r\n[assembly: System.Reflection.AssemblyFileVersionAttribute(\"5.0.10\")]\r\n"
    );
}

#[test]
fn test_non_ascii_content_survives() {
    let contents = "\u{feff}// Версия сборки\n[assembly: AssemblyTitle(\"Приложение\")]\n[assembly: AssemblyVersion(\"1.0.0\")]\n";
    let fixture = SolutionFixture::with_contents(contents);
    run_release(&fixture).unwrap();
    assert_eq!(
        fixture.metadata_text(),
        contents.replace("AssemblyVersion(\"1.0.0\")", "AssemblyVersion(\"1.0.1\")")
    );
}

#[test]
fn test_missing_marker_is_an_error_and_file_is_untouched() {
    let contents = "[assembly: AssemblyTitle(\"DemoApp\")]\n";
    let fixture = SolutionFixture::with_contents(contents);

    let err = run_release(&fixture).unwrap_err();
    assert!(matches!(
        err,
        UpdateError::Metadata(MetadataError::MarkerNotFound { .. })
    ));
    assert_eq!(fixture.metadata_text(), contents);
}

#[test]
fn test_wildcard_version_is_an_error() {
    let contents = "[assembly: AssemblyVersion(\"1.0.*\")]\n";
    let fixture = SolutionFixture::with_contents(contents);

    let err = run_release(&fixture).unwrap_err();
    assert!(err.to_string().contains("1.0.*"), "got: {}", err);
    assert_eq!(fixture.metadata_text(), contents);
}
