//! Install command: plan preview, confirmation, execution, summary

use console::Style;
use inquire::{Confirm, InquireError};

use crate::component::ComponentStatus;
use crate::error::Result;
use crate::orchestrator::{ComponentOutcome, Orchestrator, Outcome};
use crate::paths::InstallDirs;
use crate::probe::{Distro, HardwareInfo};
use crate::registry::Registry;
use crate::runner::Runner;
use crate::ui;

/// Resolve, confirm, and execute an installation selection
pub fn run(
    registry: &Registry,
    runner: &dyn Runner,
    dirs: &InstallDirs,
    distro: Distro,
    hardware: &HardwareInfo,
    selection: &[String],
    assume_yes: bool,
) -> Result<i32> {
    let orchestrator = Orchestrator::new(registry, runner, dirs, distro, hardware);

    let plan = orchestrator.plan(selection);
    for unknown in &plan.unknown {
        ui::warn(&format!("Unknown component '{unknown}' skipped"));
    }
    if plan.is_empty() {
        println!("No components selected.");
        return Ok(0);
    }

    print_plan(registry, dirs, &plan.ordered);

    if !assume_yes && !confirm()? {
        println!("Installation cancelled.");
        return Ok(0);
    }
    println!();

    let outcome = orchestrator.execute(&plan);
    print_summary(&outcome);
    Ok(i32::from(!outcome.overall_success()))
}

fn print_plan(registry: &Registry, dirs: &InstallDirs, ordered: &[String]) {
    println!("\n{}", ui::bold("Installation Plan:"));
    for name in ordered {
        let installed = registry
            .get(name)
            .map(|c| c.check_installed(dirs) == ComponentStatus::Installed)
            .unwrap_or(false);
        if installed {
            println!(
                "  {} {name} (already installed)",
                Style::new().green().apply_to("✓")
            );
        } else {
            println!(
                "  {} {name} (will install)",
                Style::new().yellow().apply_to("○")
            );
        }
    }
    println!();
}

fn confirm() -> Result<bool> {
    match Confirm::new("Proceed with installation?")
        .with_default(true)
        .prompt()
    {
        Ok(answer) => Ok(answer),
        // No terminal: proceed, matching non-interactive pipeline use
        Err(InquireError::NotTTY) => Ok(true),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn print_summary(outcome: &Outcome) {
    println!();
    for (name, result) in &outcome.components {
        match result {
            ComponentOutcome::Installed => ui::ok(&format!("{name} installed")),
            ComponentOutcome::Skipped => ui::detail(&format!("{name} already installed, skipped")),
            ComponentOutcome::Removed => ui::ok(&format!("{name} removed")),
            ComponentOutcome::Failed(reason) => ui::fail(&format!("{name} failed: {reason}")),
        }
    }
    println!();

    if outcome.overall_success() {
        println!("{}", Style::new().green().bold().apply_to("Installation complete!"));
        println!("\nNext steps:");
        println!("  1. Connect your AR glasses");
        println!("  2. Run 'xr_driver_cli -e' to enable the driver");
        println!("  3. Check the wiki: https://github.com/bl4ckj4ck777/VRStack");
    } else {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Installation completed with some errors.")
        );
        println!("Check the output above for details.");
    }
}
