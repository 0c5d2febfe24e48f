//! Host project discovery.
//!
//! The installer is meant to be run from anywhere inside a host project.
//! A project root is the nearest ancestor directory containing both a
//! `package.json` and a `src-tauri/` directory, the conventional layout
//! of a shell project with a web frontend and a Rust backend.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// A discovered host project.
#[derive(Debug, Clone)]
pub struct HostProject {
    /// Absolute path of the project root.
    pub root: PathBuf,
    /// The `name` field of `package.json`, when it parses.
    pub app_name: Option<String>,
}

impl HostProject {
    /// Walks upward from `start` until a directory contains both
    /// `package.json` and `src-tauri/`.
    ///
    /// # Errors
    ///
    /// Fails when `start` cannot be resolved or when the filesystem root
    /// is reached without finding a project.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("failed to resolve starting path: {}", start.display()))?;

        for dir in start.ancestors() {
            if dir.join("package.json").is_file() && dir.join("src-tauri").is_dir() {
                return Ok(Self {
                    root: dir.to_path_buf(),
                    app_name: read_app_name(dir),
                });
            }
        }

        bail!(
            "no host project found: no ancestor of {} contains both package.json and src-tauri/",
            start.display()
        );
    }

    /// Uses `root` directly as the project root, validating the layout.
    ///
    /// # Errors
    ///
    /// Fails when `root` is missing either `package.json` or `src-tauri/`.
    pub fn at_root(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve project root: {}", root.display()))?;

        if !root.join("package.json").is_file() {
            bail!("{} has no package.json", root.display());
        }
        if !root.join("src-tauri").is_dir() {
            bail!("{} has no src-tauri/ directory", root.display());
        }

        let app_name = read_app_name(&root);
        Ok(Self { root, app_name })
    }
}

/// Best-effort read of the `name` field from `package.json`. A missing or
/// malformed file is not an installation error.
fn read_app_name(root: &Path) -> Option<String> {
    let raw = fs::read_to_string(root.join("package.json")).ok()?;
    let parsed: serde_json::Value = serde_json::from_str(&raw).ok()?;
    parsed
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
