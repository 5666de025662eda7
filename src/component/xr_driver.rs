//! XRLinuxDriver: core driver for AR glasses (IMU, display detection)
//!
//! Installed through the upstream setup script. The script is downloaded
//! into the cache root first so a partial download never executes.

use super::{
    Category, Component, ComponentSpec, ComponentStatus, InstallContext, Strategy, build,
    command_on_path, remove_artifact,
};
use crate::error::Result;
use crate::paths::InstallDirs;
use crate::probe::Distro;

const SETUP_SCRIPT_URL: &str =
    "https://github.com/wheaney/XRLinuxDriver/releases/latest/download/xr_driver_setup.sh";

pub struct XrDriver {
    spec: ComponentSpec,
}

impl XrDriver {
    pub fn new() -> Self {
        Self {
            spec: ComponentSpec {
                name: "xrlinuxdriver",
                description: "Core driver for AR glasses (IMU, display detection)",
                category: Category::Core,
                required: true,
                dependencies: &[],
                conflicts: &[],
            },
        }
    }

    fn run_setup_script(ctx: &InstallContext) -> Result<()> {
        std::fs::create_dir_all(&ctx.dirs.cache)?;
        let script = tempfile::Builder::new()
            .prefix("xr_driver_setup")
            .suffix(".sh")
            .tempfile_in(&ctx.dirs.cache)?;
        let script_path = script.path().to_path_buf();

        ctx.runner.run(&format!(
            "curl -Lo {} {SETUP_SCRIPT_URL}",
            script_path.display()
        ))?;
        build::make_executable(&script_path)?;
        ctx.runner.run(&script_path.display().to_string())?;
        Ok(())
    }
}

impl Component for XrDriver {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn check_installed(&self, _dirs: &InstallDirs) -> ComponentStatus {
        if command_on_path("xr_driver_cli") {
            ComponentStatus::Installed
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn strategies(&self, _distro: Distro) -> Vec<Strategy<'_>> {
        // The upstream script handles every distro itself
        vec![Strategy::new("upstream setup script", |ctx| {
            Self::run_setup_script(ctx)
        })]
    }

    fn uninstall(&self, ctx: &InstallContext) -> Result<()> {
        // No clean upstream uninstall; remove the known artifact paths
        let home = &ctx.dirs.home;
        remove_artifact(&home.join(".local").join("bin").join("xr_driver_cli"))?;
        remove_artifact(&home.join(".local").join("share").join("xr_driver"))?;
        remove_artifact(&home.join(".config").join("xr_driver"))?;
        Ok(())
    }
}
