//! Terminal reporting: the run summary and the manual follow-up steps.
//!
//! Dependency declarations, handler registration, and permission grants
//! touch files the host project owns (`Cargo.toml`, `lib.rs`,
//! `tauri.conf.json`); editing those automatically risks clobbering user
//! content, so they are printed as instructions instead.

use cornerkit_core::commands;
use owo_colors::OwoColorize;

use crate::install::{InstallSummary, ManifestAction, ModuleAction};
use crate::payload;
use crate::project::HostProject;

/// Prints where the installer ran and what it found.
pub fn print_target(project: &HostProject) {
    match &project.app_name {
        Some(name) => println!(
            "{} {} ({})",
            "Project:".cyan(),
            name,
            project.root.display()
        ),
        None => println!("{} {}", "Project:".cyan(), project.root.display()),
    }
}

/// Prints one line per installation step.
pub fn print_summary(summary: &InstallSummary, dry_run: bool) {
    let prefix = if dry_run { "Would " } else { "" };

    let module_line = match summary.module_action {
        ModuleAction::Installed => format!("{prefix}install native module"),
        ModuleAction::Replaced => format!("{prefix}replace native module"),
        ModuleAction::UpToDate => "Native module already up to date".to_string(),
    };
    println!(
        "{} {} -> {}",
        "ok".green(),
        module_line,
        summary.module_path.display()
    );

    let manifest_line = match summary.manifest_action {
        ManifestAction::Created => format!("{prefix}create plugin manifest"),
        ManifestAction::Appended => format!("{prefix}register module in plugin manifest"),
        ManifestAction::AlreadyRegistered => "Module already registered".to_string(),
    };
    println!(
        "{} {} -> {}",
        "ok".green(),
        manifest_line,
        summary.manifest_path.display()
    );
}

/// Prints the manual follow-up steps.
pub fn print_next_steps() {
    println!();
    println!("{}", "Next steps".bold());
    println!();

    println!(
        "{}",
        "1. Add the macOS dependencies to src-tauri/Cargo.toml:".cyan()
    );
    println!(
        r#"
[target.'cfg(target_os = "macos")'.dependencies]
cocoa = "0.26"
objc = "0.2.7"
"#
    );

    println!(
        "{}",
        "2. Register the command handlers in src-tauri/src/lib.rs:".cyan()
    );
    println!();
    println!("mod plugins;");
    println!();
    println!(".invoke_handler(tauri::generate_handler![");
    for command in commands::HOST_COMMANDS {
        println!("    plugins::{}::{command},", payload::NATIVE_MODULE_NAME);
    }
    println!("])");
    println!();

    println!(
        "{}",
        "3. Grant the window/event permissions in tauri.conf.json:".cyan()
    );
    println!(
        r#"
"permissions": [
    "core:window:allow-start-dragging",
    "core:window:allow-is-fullscreen",
    "core:window:allow-is-maximized",
    "core:event:allow-listen"
]
"#
    );
}
