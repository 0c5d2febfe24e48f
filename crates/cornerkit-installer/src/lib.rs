//! cornerkit-installer library.
//!
//! Drops the CornerKit native command module into a host shell project:
//! finds the project root, copies the embedded module source into the
//! conventional plugin directory, registers it in the plugin manifest, and
//! reports the manual follow-up steps (dependencies, handler registration,
//! permission grants) that cannot be automated safely.
//!
//! The binary in `main.rs` is a thin clap wrapper over these modules;
//! integration tests drive them directly against temporary project trees.

pub mod install;
pub mod payload;
pub mod project;
pub mod report;
