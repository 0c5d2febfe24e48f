//! cornerkit-installer: drops the CornerKit native command module into a
//! host shell project.
//!
//! Run from anywhere inside the host project (or pass `--project-root`).
//! The installer copies the module source into `src-tauri/src/plugins/`,
//! registers it in `plugins/mod.rs`, and prints the manual follow-up steps.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

use cornerkit_installer::install::{install, InstallOptions};
use cornerkit_installer::project::HostProject;
use cornerkit_installer::report;

#[derive(Parser)]
#[command(name = "cornerkit-installer")]
#[command(about = "Install the CornerKit native command module into a host project")]
#[command(version)]
struct Cli {
    /// Host project root; discovered by walking up from the current
    /// directory when omitted
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Overwrite an existing native module file whose content differs
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dry_run {
        println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
    }

    let project = match &cli.project_root {
        Some(root) => HostProject::at_root(root)?,
        None => {
            let cwd = env::current_dir().context("failed to read the current directory")?;
            HostProject::discover(&cwd)?
        }
    };
    report::print_target(&project);

    let summary = install(
        &project,
        InstallOptions {
            dry_run: cli.dry_run,
            force: cli.force,
        },
    )?;
    report::print_summary(&summary, cli.dry_run);

    if !cli.dry_run {
        report::print_next_steps();
        println!("{}", "Installation complete.".green().bold());
    }

    Ok(())
}
