//! Installation orchestration: plan execution and outcome aggregation
//!
//! Walks the resolved plan strictly sequentially. Already-installed
//! components are skipped, install failures are recorded and the walk
//! continues — dependency order is an ordering hint for installs, not a
//! circuit breaker, since later components of an independent category may
//! still install fine. Configure failures are logged but never flip the
//! overall result.
//!
//! Required components are unioned into the selection here, once, so every
//! entry point (flags or interactive) gets identical behavior.

use serde::Serialize;

use crate::component::{ComponentStatus, InstallContext};
use crate::paths::InstallDirs;
use crate::probe::{Distro, HardwareInfo};
use crate::progress::ProgressDisplay;
use crate::registry::Registry;
use crate::resolver::{self, Plan};
use crate::runner::Runner;
use crate::ui;

/// Per-component result of an orchestration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result", content = "message")]
pub enum ComponentOutcome {
    Installed,
    Skipped,
    Failed(String),
    Removed,
}

/// Aggregated result of a run, in execution order
#[derive(Debug, Default, Serialize)]
pub struct Outcome {
    pub components: Vec<(String, ComponentOutcome)>,
}

impl Outcome {
    fn record(&mut self, name: &str, outcome: ComponentOutcome) {
        self.components.push((name.to_string(), outcome));
    }

    /// True iff no component failed
    pub fn overall_success(&self) -> bool {
        !self
            .components
            .iter()
            .any(|(_, o)| matches!(o, ComponentOutcome::Failed(_)))
    }

    pub fn get(&self, name: &str) -> Option<&ComponentOutcome> {
        self.components
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, o)| o)
    }
}

pub struct Orchestrator<'a> {
    registry: &'a Registry,
    runner: &'a dyn Runner,
    dirs: &'a InstallDirs,
    distro: Distro,
    hardware: &'a HardwareInfo,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        registry: &'a Registry,
        runner: &'a dyn Runner,
        dirs: &'a InstallDirs,
        distro: Distro,
        hardware: &'a HardwareInfo,
    ) -> Self {
        Self {
            registry,
            runner,
            dirs,
            distro,
            hardware,
        }
    }

    fn context(&self) -> InstallContext<'a> {
        InstallContext {
            runner: self.runner,
            dirs: self.dirs,
            distro: self.distro,
            hardware: self.hardware,
        }
    }

    /// Union required components (registration order) ahead of the explicit
    /// selection and resolve
    pub fn plan(&self, selection: &[String]) -> Plan {
        let mut unioned = self.registry.required_names();
        for name in selection {
            if !unioned.contains(name) {
                unioned.push(name.clone());
            }
        }
        resolver::resolve(self.registry, &unioned)
    }

    /// Execute an already-resolved plan in order
    pub fn execute(&self, plan: &Plan) -> Outcome {
        let ctx = self.context();
        let mut outcome = Outcome::default();
        #[allow(clippy::cast_possible_truncation)]
        let progress = ProgressDisplay::new(plan.ordered.len() as u64);

        for name in &plan.ordered {
            progress.update_component(name);
            let Some(component) = self.registry.get(name) else {
                // Plans come from the resolver, which only emits known names
                continue;
            };

            // Re-checked here, not at plan time: an earlier install in this
            // run may have satisfied this component already
            if component.check_installed(self.dirs) == ComponentStatus::Installed {
                outcome.record(name, ComponentOutcome::Skipped);
                progress.inc();
                continue;
            }

            ui::step(&format!("Installing {name}..."));
            match component.install(&ctx) {
                Ok(()) => {
                    if let Err(e) = component.configure(&ctx) {
                        ui::warn(&format!("Configuration of {name} failed: {e}"));
                    }
                    ui::ok(&format!("Installed {name}"));
                    outcome.record(name, ComponentOutcome::Installed);
                }
                Err(e) => {
                    ui::fail(&format!("Failed to install {name}: {e}"));
                    outcome.record(name, ComponentOutcome::Failed(e.to_string()));
                }
            }
            progress.inc();
        }

        progress.finish();
        outcome
    }

    /// Resolve and execute a selection
    pub fn run(&self, selection: &[String]) -> Outcome {
        let plan = self.plan(selection);
        for unknown in &plan.unknown {
            ui::warn(&format!("Unknown component '{unknown}' skipped"));
        }
        self.execute(&plan)
    }

    /// Uninstall every component currently reporting Installed
    pub fn uninstall_all(&self) -> Outcome {
        let ctx = self.context();
        let mut outcome = Outcome::default();

        for component in self.registry.iter() {
            let name = component.spec().name;
            if component.check_installed(self.dirs) != ComponentStatus::Installed {
                outcome.record(name, ComponentOutcome::Skipped);
                continue;
            }
            ui::step(&format!("Removing {name}..."));
            match component.uninstall(&ctx) {
                Ok(()) => outcome.record(name, ComponentOutcome::Removed),
                Err(e) => {
                    ui::fail(&format!("Failed to remove {name}: {e}"));
                    outcome.record(name, ComponentOutcome::Failed(e.to_string()));
                }
            }
        }
        outcome
    }
}
