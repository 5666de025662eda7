//! Breezy Desktop: virtual desktop environment for AR glasses
//!
//! Ships bundled with XRLinuxDriver, so the install strategy only announces
//! that fact. It still has an explicit strategy rather than a silent no-op so
//! the orchestration summary shows what happened.

use super::{
    Category, Component, ComponentSpec, ComponentStatus, InstallContext, Strategy, command_on_path,
};
use crate::error::Result;
use crate::paths::InstallDirs;
use crate::probe::Distro;
use crate::ui;

pub struct BreezyDesktop {
    spec: ComponentSpec,
}

impl BreezyDesktop {
    pub fn new() -> Self {
        Self {
            spec: ComponentSpec {
                name: "breezy-desktop",
                description: "Virtual desktop environment for AR glasses",
                category: Category::Core,
                required: true,
                dependencies: &["xrlinuxdriver"],
                conflicts: &[],
            },
        }
    }
}

impl Component for BreezyDesktop {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn check_installed(&self, dirs: &InstallDirs) -> ComponentStatus {
        let config = dirs
            .home
            .join(".config")
            .join("xr_driver")
            .join("config.ini");
        if config.exists() {
            ComponentStatus::Installed
        } else if command_on_path("xr_driver_cli") {
            // Driver present but not yet configured: enabling it writes the config
            ComponentStatus::UpdateAvailable
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn strategies(&self, _distro: Distro) -> Vec<Strategy<'_>> {
        vec![Strategy::new("bundled with XRLinuxDriver", |_ctx| {
            ui::detail("breezy-desktop is bundled with XRLinuxDriver");
            Ok(())
        })]
    }

    fn uninstall(&self, _ctx: &InstallContext) -> Result<()> {
        // Removed together with the driver's config tree
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_status_from_driver_config() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let breezy = BreezyDesktop::new();
        assert_eq!(
            breezy.check_installed(&dirs),
            ComponentStatus::NotInstalled
        );

        let config_dir = temp.path().join(".config").join("xr_driver");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.ini"), "[driver]\n").unwrap();
        assert_eq!(breezy.check_installed(&dirs), ComponentStatus::Installed);
    }

    #[test]
    fn test_depends_on_driver() {
        assert_eq!(BreezyDesktop::new().spec().dependencies, ["xrlinuxdriver"]);
    }
}
