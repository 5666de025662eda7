//! Component model: the per-component lifecycle and its fallback chain
//!
//! Every installable unit implements [`Component`]: a cheap status probe, an
//! ordered chain of install [`Strategy`] values, optional hardware
//! configuration, and best-effort uninstall. Concrete components live in the
//! sibling modules; the orchestrator only ever sees the trait.
//!
//! Fallback policy: `install` walks the chain in order and stops at the first
//! success. A component must always declare at least one strategy for any
//! distro, ending with a universal fallback (usually a source build) — an
//! empty chain is an error, never a silent no-op.

pub mod build;
pub mod breezy;
pub mod depth3d;
pub mod monado;
pub mod opentrack;
pub mod stardust;
pub mod vrto3d;
pub mod xr_driver;

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, VrstackError};
use crate::paths::InstallDirs;
use crate::probe::{Distro, HardwareInfo};
use crate::runner::Runner;
use crate::ui;

/// Presentation grouping for components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Tracking,
    Desktop,
    Gaming,
    Controllers,
}

impl Category {
    /// Display label used by the `--list` grouping
    pub fn label(self) -> &'static str {
        match self {
            Category::Core => "Core (Required)",
            Category::Tracking => "Head Tracking",
            Category::Desktop => "AR Desktop",
            Category::Gaming => "Gaming",
            Category::Controllers => "Controllers",
        }
    }

    /// All categories in presentation order
    pub fn all() -> [Category; 5] {
        [
            Category::Core,
            Category::Tracking,
            Category::Desktop,
            Category::Gaming,
            Category::Controllers,
        ]
    }
}

/// Install state of a component, derived on demand and never cached
/// across components within a run (an earlier install can change a later
/// component's check result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    NotInstalled,
    Installed,
    UpdateAvailable,
    Failed,
}

/// Immutable definition of a component
///
/// `conflicts` is carried for presentation and future use; no selection
/// validation enforces it.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub required: bool,
    pub dependencies: &'static [&'static str],
    pub conflicts: &'static [&'static str],
}

/// Everything an install strategy may touch
pub struct InstallContext<'a> {
    pub runner: &'a dyn Runner,
    pub dirs: &'a InstallDirs,
    pub distro: Distro,
    pub hardware: &'a HardwareInfo,
}

/// One named attempt in a component's fallback chain
pub struct Strategy<'c> {
    pub name: &'static str,
    run: Box<dyn Fn(&InstallContext) -> Result<()> + 'c>,
}

impl<'c> Strategy<'c> {
    pub fn new(name: &'static str, run: impl Fn(&InstallContext) -> Result<()> + 'c) -> Self {
        Self {
            name,
            run: Box::new(run),
        }
    }

    pub fn attempt(&self, ctx: &InstallContext) -> Result<()> {
        (self.run)(ctx)
    }
}

/// A named, independently installable unit of the AR/VR stack
pub trait Component {
    /// Immutable definition fields
    fn spec(&self) -> &ComponentSpec;

    /// Cheap, side-effect-free probe: executable on PATH or file present.
    /// Must not require network access or elevated privileges.
    fn check_installed(&self, dirs: &InstallDirs) -> ComponentStatus;

    /// Ordered fallback chain for the given distro. Must never be empty:
    /// components without a packaged option still return their universal
    /// source-build (or explicit "install manually") strategy.
    fn strategies(&self, distro: Distro) -> Vec<Strategy<'_>>;

    /// Walk the fallback chain, stopping at the first success
    fn install(&self, ctx: &InstallContext) -> Result<()> {
        let chain = self.strategies(ctx.distro);
        if chain.is_empty() {
            return Err(VrstackError::NoStrategy {
                component: self.spec().name.to_string(),
            });
        }

        let total = chain.len();
        let mut last_err = None;
        for (i, strategy) in chain.iter().enumerate() {
            if total > 1 {
                ui::detail(&format!("Trying {}...", strategy.name));
            }
            match strategy.attempt(ctx) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if i + 1 < total {
                        ui::detail(&format!("{} failed ({e}), falling back", strategy.name));
                    }
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| VrstackError::NoStrategy {
            component: self.spec().name.to_string(),
        }))
    }

    /// Hardware-specific post-install setup. Safe to call when install was
    /// skipped because the component was already present.
    fn configure(&self, _ctx: &InstallContext) -> Result<()> {
        Ok(())
    }

    /// Best-effort removal of every artifact this component places.
    /// Idempotent: absent artifacts are not errors.
    fn uninstall(&self, ctx: &InstallContext) -> Result<()>;
}

/// PATH probe shared by status checks
pub fn command_on_path(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Remove a file or directory if it exists; absence is success
pub fn remove_artifact(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    if path.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
