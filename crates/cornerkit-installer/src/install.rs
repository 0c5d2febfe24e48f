//! The installation steps: copy the module, register it in the manifest.
//!
//! Both steps are idempotent so the installer can be re-run after an
//! upgrade: an identical module file and an already-registered manifest
//! are left untouched. A module file with *different* content is only
//! replaced with `--force`, since it may carry local edits.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::payload;
use crate::project::HostProject;

/// Behavior switches from the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Report what would be done without touching the filesystem.
    pub dry_run: bool,
    /// Replace a module file whose content differs from the payload.
    pub force: bool,
}

/// What happened (or would happen, under `--dry-run`) to the module file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleAction {
    /// The file did not exist and was written.
    Installed,
    /// The file existed with different content and was replaced (`--force`).
    Replaced,
    /// The file already matches the payload.
    UpToDate,
}

/// What happened (or would happen) to the plugin manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestAction {
    /// `mod.rs` did not exist and was created with the registration line.
    Created,
    /// The registration line was appended to an existing `mod.rs`.
    Appended,
    /// `mod.rs` already registers the module.
    AlreadyRegistered,
}

/// Summary of one installer run, for reporting and for tests.
#[derive(Debug)]
pub struct InstallSummary {
    pub module_path: PathBuf,
    pub module_action: ModuleAction,
    pub manifest_path: PathBuf,
    pub manifest_action: ManifestAction,
}

/// Runs the two installation steps against `project`.
///
/// Under `--dry-run` the summary describes the writes that would happen;
/// nothing is created, and precondition failures (an existing module file
/// without `--force`) still fail so a dry run is an honest preview.
///
/// # Errors
///
/// Fails on filesystem errors, and when the module file exists with
/// content differing from the payload and `force` is not set.
pub fn install(project: &HostProject, options: InstallOptions) -> Result<InstallSummary> {
    let module_path = payload::module_path(&project.root);
    let manifest_path = payload::manifest_path(&project.root);

    let module_action = plan_module(&module_path, options.force)?;
    let manifest_action = plan_manifest(&manifest_path)?;

    if !options.dry_run {
        apply_module(&module_path, module_action)?;
        apply_manifest(&manifest_path, manifest_action)?;
    }

    Ok(InstallSummary {
        module_path,
        module_action,
        manifest_path,
        manifest_action,
    })
}

fn plan_module(module_path: &PathBuf, force: bool) -> Result<ModuleAction> {
    if !module_path.exists() {
        return Ok(ModuleAction::Installed);
    }

    let existing = fs::read_to_string(module_path)
        .with_context(|| format!("failed to read {}", module_path.display()))?;
    if existing == payload::NATIVE_MODULE_SOURCE {
        return Ok(ModuleAction::UpToDate);
    }
    if !force {
        bail!(
            "{} already exists with different content; re-run with --force to overwrite",
            module_path.display()
        );
    }
    Ok(ModuleAction::Replaced)
}

fn plan_manifest(manifest_path: &PathBuf) -> Result<ManifestAction> {
    if !manifest_path.exists() {
        return Ok(ManifestAction::Created);
    }

    let existing = fs::read_to_string(manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    if existing.contains(payload::NATIVE_MODULE_NAME) {
        return Ok(ManifestAction::AlreadyRegistered);
    }
    Ok(ManifestAction::Appended)
}

fn apply_module(module_path: &PathBuf, action: ModuleAction) -> Result<()> {
    if action == ModuleAction::UpToDate {
        return Ok(());
    }

    if let Some(parent) = module_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(module_path, payload::NATIVE_MODULE_SOURCE)
        .with_context(|| format!("failed to write {}", module_path.display()))
}

fn apply_manifest(manifest_path: &PathBuf, action: ManifestAction) -> Result<()> {
    match action {
        ManifestAction::AlreadyRegistered => Ok(()),
        ManifestAction::Created => {
            if let Some(parent) = manifest_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(manifest_path, format!("{}\n", payload::MODULE_REGISTRATION))
                .with_context(|| format!("failed to write {}", manifest_path.display()))
        }
        ManifestAction::Appended => {
            let mut existing = fs::read_to_string(manifest_path)
                .with_context(|| format!("failed to read {}", manifest_path.display()))?;
            if !existing.is_empty() && !existing.ends_with('\n') {
                existing.push('\n');
            }
            existing.push_str(payload::MODULE_REGISTRATION);
            existing.push('\n');
            fs::write(manifest_path, existing)
                .with_context(|| format!("failed to update {}", manifest_path.display()))
        }
    }
}
