//! Integration tests for the `mft` commands.
//!
//! These tests exercise the command handlers against real manifest files
//! on disk, the same path the binary takes.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use appmanifest::cli::commands;
use appmanifest::manifest::{BundleInfo, Manifest};

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture that materializes manifest files in a temp directory.
struct ManifestDir {
    dir: TempDir,
}

impl ManifestDir {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write a manifest file and return its path.
    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write manifest");
        path
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A complete manifest covering every well-known field group.
const FULL_MANIFEST: &str = r#"{
    "CFBundleDisplayName": "IDFA Spike",
    "CFBundleName": "Spike",
    "CFBundleShortVersionString": "1.0",
    "CFBundleVersion": "42",
    "CFBundleIdentifier": "com.example.spike",
    "CFBundleExecutable": "Spike",
    "CFBundleURLTypes": [
        { "CFBundleURLSchemes": ["spike", "spike-beta"] }
    ],
    "UIFileSharingEnabled": true,
    "UIStatusBarHidden": false,
    "UIStatusBarStyle": "UIStatusBarStyleLightContent",
    "UIRequiresFullScreen": true,
    "UIBackgroundModes": ["audio", "remote-notification"],
    "UISupportedInterfaceOrientations": [
        "UIInterfaceOrientationPortrait",
        "UIInterfaceOrientationLandscapeLeft"
    ],
    "NSAppTransportSecurity": { "NSAllowsArbitraryLoads": true },
    "NSCameraUsageDescription": "We photograph things",
    "NSMicrophoneUsageDescription": "We record things"
}"#;

// =============================================================================
// show
// =============================================================================

#[test]
fn show_prints_full_manifest() {
    let fixture = ManifestDir::new();
    let path = fixture.write("Info.json", FULL_MANIFEST);

    commands::show(&path, false).expect("show should succeed");
    commands::show(&path, true).expect("show --json should succeed");
}

#[test]
fn show_rejects_manifest_missing_required_keys() {
    let fixture = ManifestDir::new();
    let path = fixture.write("Info.json", r#"{"CFBundleName": "Spike"}"#);

    let err = commands::show(&path, false).unwrap_err();
    assert!(err.to_string().contains("CFBundleDisplayName"));
}

#[test]
fn show_rejects_missing_file() {
    let fixture = ManifestDir::new();
    let missing = fixture.path().join("nope.json");
    assert!(commands::show(&missing, false).is_err());
}

#[test]
fn show_reads_toml_manifests() {
    let fixture = ManifestDir::new();
    let path = fixture.write(
        "Info.toml",
        r#"
CFBundleDisplayName = "IDFA Spike"
CFBundleName = "Spike"
CFBundleShortVersionString = "1.0"
CFBundleVersion = "42"
CFBundleIdentifier = "com.example.spike"
"#,
    );

    commands::show(&path, false).expect("show should read TOML");
}

// =============================================================================
// get
// =============================================================================

#[test]
fn get_succeeds_for_present_and_absent_keys() {
    let fixture = ManifestDir::new();
    let path = fixture.write("Info.json", FULL_MANIFEST);

    // Present key prints the value.
    commands::get(&path, "CFBundleIdentifier").expect("get should succeed");
    // Structured value prints as JSON.
    commands::get(&path, "CFBundleURLTypes").expect("get should succeed");
    // Absent key prints nothing but still exits successfully.
    commands::get(&path, "NoSuchKey").expect("absent key is not an error");
}

#[test]
fn get_rejects_unparseable_manifest() {
    let fixture = ManifestDir::new();
    let path = fixture.write("Info.json", "{ definitely not json");
    assert!(commands::get(&path, "CFBundleName").is_err());
}

// =============================================================================
// compare
// =============================================================================

#[test]
fn compare_accepts_well_formed_versions() {
    commands::compare("1.0", "1.0.0").expect("equal versions");
    commands::compare("2.0", "1.9.9").expect("greater version");
    commands::compare("", "1.0").expect("empty version");
}

#[test]
fn compare_rejects_malformed_versions() {
    let err = commands::compare("1.0.beta", "1.0").unwrap_err();
    assert!(err.to_string().contains("Failed to compare versions"));
}

// =============================================================================
// File loading end to end
// =============================================================================

#[test]
fn loaded_manifest_projects_expected_bundle_info() {
    let fixture = ManifestDir::new();
    let path = fixture.write("Info.json", FULL_MANIFEST);

    let manifest = Manifest::load(&path).unwrap();
    let info = BundleInfo::from_manifest(&manifest);

    assert_eq!(info.name, "IDFA Spike");
    assert_eq!(info.identifier, "com.example.spike");
    assert_eq!(info.version, "1.0");
    assert_eq!(info.build, "42");
    assert_eq!(info.url_schemes, ["spike", "spike-beta"]);
    assert_eq!(info.main_scheme.as_deref(), Some("spike"));
    assert!(info.file_sharing_enabled);
    assert!(info.requires_full_screen);
    assert!(info.allows_arbitrary_loads);
    assert_eq!(info.background_modes.len(), 2);
    assert_eq!(info.supported_orientations.len(), 2);
    assert_eq!(info.privacy.camera.as_deref(), Some("We photograph things"));
    assert_eq!(info.privacy.microphone.as_deref(), Some("We record things"));
    assert!(info.privacy.contacts.is_none());
}

#[test]
fn load_from_env_resolves_override_path() {
    let fixture = ManifestDir::new();
    let path = fixture.write("Info.json", FULL_MANIFEST);

    std::env::set_var("APPMANIFEST_TEST_PATH", &path);
    let manifest = Manifest::load_from_env("APPMANIFEST_TEST_PATH")
        .expect("load should succeed")
        .expect("manifest should be found");
    assert_eq!(manifest.string("CFBundleName"), Some("Spike"));
    std::env::remove_var("APPMANIFEST_TEST_PATH");

    let absent = Manifest::load_from_env("APPMANIFEST_UNSET_VAR").unwrap();
    assert!(absent.is_none());
}
