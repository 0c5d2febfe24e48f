//! Integration tests for the installer against temporary project trees.
//!
//! Each test fabricates the minimal host-project layout (`package.json` +
//! `src-tauri/`) in a `tempfile` directory and drives the library the way
//! `main.rs` does: discover, install, inspect the resulting tree.

use std::fs;
use std::path::Path;

use cornerkit_installer::install::{install, InstallOptions, ManifestAction, ModuleAction};
use cornerkit_installer::payload;
use cornerkit_installer::project::HostProject;
use tempfile::TempDir;

/// Creates a minimal host project and returns its root handle.
fn fabricate_project() -> TempDir {
    let dir = TempDir::new().expect("create temp project");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "demo-app", "private": true }"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("src-tauri").join("src")).unwrap();
    dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Discovery walks up from a nested directory to the root containing both
/// markers, and picks up the app name from package.json.
#[test]
fn discover_walks_up_to_project_root() {
    let dir = fabricate_project();
    let nested = dir.path().join("src-tauri").join("src");

    let project = HostProject::discover(&nested).expect("discover");

    assert_eq!(project.root, dir.path().canonicalize().unwrap());
    assert_eq!(project.app_name.as_deref(), Some("demo-app"));
}

/// A directory tree without the markers is not a project.
#[test]
fn discover_fails_outside_a_project() {
    let dir = TempDir::new().unwrap();
    let err = HostProject::discover(dir.path()).expect_err("no project here");
    assert!(err.to_string().contains("no host project found"));
}

/// A malformed package.json does not break installation; only the app
/// name is lost.
#[test]
fn malformed_package_json_only_loses_the_name() {
    let dir = fabricate_project();
    fs::write(dir.path().join("package.json"), "{ not json").unwrap();

    let project = HostProject::at_root(dir.path()).expect("layout is still valid");
    assert_eq!(project.app_name, None);
}

/// Fresh install: the module file is written with the embedded payload and
/// the manifest is created with the registration line.
#[test]
fn fresh_install_writes_module_and_manifest() {
    let dir = fabricate_project();
    let project = HostProject::at_root(dir.path()).unwrap();

    let summary = install(&project, InstallOptions::default()).expect("install");

    assert_eq!(summary.module_action, ModuleAction::Installed);
    assert_eq!(summary.manifest_action, ManifestAction::Created);
    assert_eq!(read(&summary.module_path), payload::NATIVE_MODULE_SOURCE);
    assert_eq!(
        read(&summary.manifest_path),
        format!("{}\n", payload::MODULE_REGISTRATION)
    );
}

/// Re-running the installer is a no-op: nothing is rewritten, nothing is
/// registered twice.
#[test]
fn reinstall_is_idempotent() {
    let dir = fabricate_project();
    let project = HostProject::at_root(dir.path()).unwrap();

    install(&project, InstallOptions::default()).unwrap();
    let summary = install(&project, InstallOptions::default()).expect("second run");

    assert_eq!(summary.module_action, ModuleAction::UpToDate);
    assert_eq!(summary.manifest_action, ManifestAction::AlreadyRegistered);
    assert_eq!(
        read(&summary.manifest_path)
            .matches(payload::MODULE_REGISTRATION)
            .count(),
        1
    );
}

/// An existing manifest with other registrations is appended to, not
/// overwritten.
#[test]
fn manifest_append_preserves_existing_registrations() {
    let dir = fabricate_project();
    let project = HostProject::at_root(dir.path()).unwrap();
    let manifest = payload::manifest_path(&project.root);
    fs::create_dir_all(manifest.parent().unwrap()).unwrap();
    fs::write(&manifest, "pub mod window_badge;\n").unwrap();

    let summary = install(&project, InstallOptions::default()).unwrap();

    assert_eq!(summary.manifest_action, ManifestAction::Appended);
    let content = read(&manifest);
    assert!(content.starts_with("pub mod window_badge;\n"));
    assert!(content.contains(payload::MODULE_REGISTRATION));
}

/// A locally edited module file is protected: the installer refuses to
/// overwrite it unless forced.
#[test]
fn locally_edited_module_requires_force() {
    let dir = fabricate_project();
    let project = HostProject::at_root(dir.path()).unwrap();
    install(&project, InstallOptions::default()).unwrap();

    let module = payload::module_path(&project.root);
    fs::write(&module, "// local edits\n").unwrap();

    let err = install(&project, InstallOptions::default()).expect_err("must refuse");
    assert!(err.to_string().contains("--force"));
    assert_eq!(read(&module), "// local edits\n");

    let summary = install(
        &project,
        InstallOptions {
            force: true,
            ..InstallOptions::default()
        },
    )
    .expect("forced install");
    assert_eq!(summary.module_action, ModuleAction::Replaced);
    assert_eq!(read(&module), payload::NATIVE_MODULE_SOURCE);
}

/// A dry run reports the plan without touching the filesystem.
#[test]
fn dry_run_leaves_the_tree_untouched() {
    let dir = fabricate_project();
    let project = HostProject::at_root(dir.path()).unwrap();

    let summary = install(
        &project,
        InstallOptions {
            dry_run: true,
            ..InstallOptions::default()
        },
    )
    .expect("dry run");

    assert_eq!(summary.module_action, ModuleAction::Installed);
    assert_eq!(summary.manifest_action, ManifestAction::Created);
    assert!(!summary.module_path.exists());
    assert!(!summary.manifest_path.exists());
}
