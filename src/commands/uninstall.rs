//! Uninstall command: remove every component currently installed

use crate::error::Result;
use crate::orchestrator::{ComponentOutcome, Orchestrator};
use crate::paths::InstallDirs;
use crate::probe::{Distro, HardwareInfo};
use crate::registry::Registry;
use crate::runner::Runner;
use crate::ui;

/// Uninstall all installed components. Always reports completion; individual
/// failures are shown but do not change the exit code.
pub fn run(
    registry: &Registry,
    runner: &dyn Runner,
    dirs: &InstallDirs,
    distro: Distro,
    hardware: &HardwareInfo,
) -> Result<i32> {
    println!("Uninstalling all components...");

    let orchestrator = Orchestrator::new(registry, runner, dirs, distro, hardware);
    let outcome = orchestrator.uninstall_all();

    let removed = outcome
        .components
        .iter()
        .filter(|(_, o)| matches!(o, ComponentOutcome::Removed))
        .count();
    if removed == 0 {
        ui::detail("Nothing to remove");
    }
    println!("Done!");
    Ok(0)
}
