//! VRto3D: OpenVR driver for side-by-side 3D output
//!
//! Builds the driver from source and drops it into the SteamVR drivers
//! directory. SteamVR itself is a hard prerequisite: without a drivers
//! directory there is nowhere to install to, so the single strategy fails
//! with an actionable message instead of pretending to succeed.

use std::path::{Path, PathBuf};

use super::{
    Category, Component, ComponentSpec, ComponentStatus, InstallContext, Strategy, build,
    remove_artifact,
};
use crate::error::{Result, VrstackError};
use crate::paths::InstallDirs;
use crate::probe::Distro;

const REPO_URL: &str = "https://github.com/oneup03/VRto3D.git";

pub struct VrTo3d {
    spec: ComponentSpec,
}

impl VrTo3d {
    pub fn new() -> Self {
        Self {
            spec: ComponentSpec {
                name: "vrto3d",
                description: "OpenVR driver for SBS 3D output (play VR games on AR glasses)",
                category: Category::Gaming,
                required: false,
                dependencies: &["xrlinuxdriver"],
                conflicts: &[],
            },
        }
    }

    /// SteamVR drivers directories for native, ~/.local/share, and flatpak
    /// Steam layouts
    fn steamvr_driver_roots(home: &Path) -> [PathBuf; 3] {
        let steamvr = |base: PathBuf| {
            base.join("steamapps")
                .join("common")
                .join("SteamVR")
                .join("drivers")
        };
        [
            steamvr(home.join(".steam").join("steam")),
            steamvr(home.join(".local").join("share").join("Steam")),
            steamvr(
                home.join(".var")
                    .join("app")
                    .join("com.valvesoftware.Steam")
                    .join(".steam")
                    .join("steam"),
            ),
        ]
    }

    fn find_drivers_dir(home: &Path) -> Option<PathBuf> {
        Self::steamvr_driver_roots(home)
            .into_iter()
            .find(|p| p.exists())
    }

    fn build_deps(distro: Distro) -> &'static [&'static str] {
        match distro {
            Distro::Ubuntu | Distro::Debian => &["build-essential", "cmake"],
            Distro::Fedora => &["gcc-c++", "cmake"],
            Distro::Arch => &["base-devel", "cmake"],
            _ => &[],
        }
    }

    fn build_into_steamvr(ctx: &InstallContext) -> Result<()> {
        let Some(drivers_dir) = Self::find_drivers_dir(&ctx.dirs.home) else {
            return Err(VrstackError::InstallFailed {
                component: "vrto3d".to_string(),
                reason: "SteamVR not found. Install SteamVR first, then re-run this installer"
                    .to_string(),
            });
        };

        build::install_build_deps(ctx, Self::build_deps(ctx.distro));

        let src_dir = ctx.dirs.cache.join("vrto3d");
        build::clone_or_update(REPO_URL, &src_dir)?;

        ctx.runner.run_checked_in("cmake -B build", &src_dir)?;
        ctx.runner
            .run_checked_in("cmake --build build --config Release", &src_dir)?;

        let built_driver = src_dir.join("build").join("vrto3d");
        if !built_driver.exists() {
            return Err(VrstackError::InstallFailed {
                component: "vrto3d".to_string(),
                reason: format!("built driver not found at {}", built_driver.display()),
            });
        }

        build::replace_dir(&built_driver, &drivers_dir.join("vrto3d"))
    }
}

impl Component for VrTo3d {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn check_installed(&self, dirs: &InstallDirs) -> ComponentStatus {
        let installed = Self::steamvr_driver_roots(&dirs.home)
            .iter()
            .any(|root| root.join("vrto3d").exists());
        if installed {
            ComponentStatus::Installed
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn strategies(&self, _distro: Distro) -> Vec<Strategy<'_>> {
        vec![Strategy::new("source build into SteamVR", |ctx| {
            Self::build_into_steamvr(ctx)
        })]
    }

    fn uninstall(&self, ctx: &InstallContext) -> Result<()> {
        for root in Self::steamvr_driver_roots(&ctx.dirs.home) {
            remove_artifact(&root.join("vrto3d"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::HardwareInfo;
    use crate::runner::mock::MockRunner;
    use tempfile::TempDir;

    fn ctx<'a>(
        runner: &'a MockRunner,
        dirs: &'a InstallDirs,
        hardware: &'a HardwareInfo,
    ) -> InstallContext<'a> {
        InstallContext {
            runner,
            dirs,
            distro: Distro::Ubuntu,
            hardware,
        }
    }

    #[test]
    fn test_install_fails_without_steamvr() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let runner = MockRunner::new();
        let hardware = HardwareInfo::default();

        let err = VrTo3d::new()
            .install(&ctx(&runner, &dirs, &hardware))
            .unwrap_err();
        assert!(err.to_string().contains("SteamVR not found"));
        // No commands were run before the precondition check
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_status_detects_flatpak_install() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let vrto3d = VrTo3d::new();
        assert_eq!(vrto3d.check_installed(&dirs), ComponentStatus::NotInstalled);

        let flatpak = temp
            .path()
            .join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".steam")
            .join("steam")
            .join("steamapps")
            .join("common")
            .join("SteamVR")
            .join("drivers")
            .join("vrto3d");
        std::fs::create_dir_all(&flatpak).unwrap();
        assert_eq!(vrto3d.check_installed(&dirs), ComponentStatus::Installed);
    }

    #[test]
    fn test_uninstall_idempotent() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let runner = MockRunner::new();
        let hardware = HardwareInfo::default();
        let c = ctx(&runner, &dirs, &hardware);

        let native = temp
            .path()
            .join(".steam")
            .join("steam")
            .join("steamapps")
            .join("common")
            .join("SteamVR")
            .join("drivers")
            .join("vrto3d");
        std::fs::create_dir_all(&native).unwrap();

        let vrto3d = VrTo3d::new();
        vrto3d.uninstall(&c).unwrap();
        assert!(!native.exists());
        vrto3d.uninstall(&c).unwrap();
    }
}
