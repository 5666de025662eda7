//! VRStack - unified Linux AR/VR component installer
//!
//! Detects the host environment, resolves component dependencies into a
//! deterministic plan, and drives each component through its
//! install/configure/uninstall lifecycle with per-component fallback chains.

use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod component;
mod error;
mod orchestrator;
mod paths;
mod probe;
mod progress;
mod registry;
mod resolver;
mod runner;
mod ui;

use cli::Cli;
use error::Result;
use paths::InstallDirs;
use probe::{detect_distro, detect_hardware};
use registry::Registry;
use runner::ShellRunner;

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "vrstack", &mut std::io::stdout());
        return;
    }

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    // Registry validation is fatal before any installation activity
    let registry = Registry::builtin()?;
    let dirs = InstallDirs::from_home()?;
    let runner = ShellRunner;

    // Machine-readable listing stays clean of banners
    if cli.list && cli.json {
        return commands::list::run(&registry, &dirs, true);
    }

    ui::header();
    let distro = detect_distro();
    let hardware = detect_hardware(&runner);
    ui::environment_summary(distro, &hardware);

    if cli.list {
        return commands::list::run(&registry, &dirs, false);
    }
    if cli.uninstall {
        return commands::uninstall::run(&registry, &runner, &dirs, distro, &hardware);
    }

    // Required components are unioned in by the orchestrator; the explicit
    // selection only carries what the user asked for on top
    let selection = if cli.minimal {
        Some(Vec::new())
    } else if cli.full {
        Some(
            registry
                .iter()
                .map(|c| c.spec().name.to_string())
                .collect(),
        )
    } else if let Some(names) = cli.components.clone() {
        Some(names)
    } else {
        commands::list::print_catalog(&registry, &dirs);
        commands::menu::select_components(&registry, &dirs)?
    };

    let Some(selection) = selection else {
        println!("No components selected.");
        return Ok(0);
    };

    commands::install::run(
        &registry, &runner, &dirs, distro, &hardware, &selection, cli.yes,
    )
}
