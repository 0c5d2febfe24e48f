//! The embedded native module and the paths it installs to.
//!
//! The module source is compiled into the binary with `include_str!` so
//! the installer is self-contained: no runtime asset lookup, nothing to
//! ship next to the executable.

use std::path::{Path, PathBuf};

/// Source of the native command module copied into the host project.
pub const NATIVE_MODULE_SOURCE: &str = include_str!("../assets/mac_rounded_corners.rs");

/// File name the module is installed under.
pub const NATIVE_MODULE_FILE: &str = "mac_rounded_corners.rs";

/// Module name as registered in the plugin manifest.
pub const NATIVE_MODULE_NAME: &str = "mac_rounded_corners";

/// Registration line appended to the plugin manifest.
pub const MODULE_REGISTRATION: &str = "pub mod mac_rounded_corners;";

/// The conventional plugin directory, relative to the project root.
pub fn plugins_dir(project_root: &Path) -> PathBuf {
    project_root
        .join("src-tauri")
        .join("src")
        .join("plugins")
}

/// Where the module source lands, relative to the project root.
pub fn module_path(project_root: &Path) -> PathBuf {
    plugins_dir(project_root).join(NATIVE_MODULE_FILE)
}

/// The plugin manifest (`plugins/mod.rs`), relative to the project root.
pub fn manifest_path(project_root: &Path) -> PathBuf {
    plugins_dir(project_root).join("mod.rs")
}
