//! Depth3D: ReShade + SuperDepth3D shader for 3D in regular games
//!
//! Clones the reshade-steam-proton helper into the install root and writes a
//! `reshade-setup` launcher into the bin root.

use super::{
    Category, Component, ComponentSpec, ComponentStatus, InstallContext, Strategy, build,
    remove_artifact,
};
use crate::error::Result;
use crate::paths::InstallDirs;
use crate::probe::Distro;
use crate::ui;

const REPO_URL: &str = "https://github.com/kevinlekiller/reshade-steam-proton.git";

pub struct Depth3d {
    spec: ComponentSpec,
}

impl Depth3d {
    pub fn new() -> Self {
        Self {
            spec: ComponentSpec {
                name: "depth3d",
                description: "ReShade + SuperDepth3D shader for 3D in regular games",
                category: Category::Gaming,
                required: false,
                dependencies: &["xrlinuxdriver"],
                conflicts: &[],
            },
        }
    }

    fn runtime_deps(distro: Distro) -> &'static [&'static str] {
        match distro {
            Distro::Ubuntu | Distro::Debian => &["p7zip-full", "curl", "wget"],
            _ => &["p7zip", "curl", "wget"],
        }
    }

    fn install_helper(ctx: &InstallContext) -> Result<()> {
        build::install_build_deps(ctx, Self::runtime_deps(ctx.distro));

        let src_dir = ctx.dirs.install.join("reshade-steam-proton");
        std::fs::create_dir_all(&ctx.dirs.install)?;
        build::clone_or_update(REPO_URL, &src_dir)?;

        let script = src_dir.join("reshade-linux.sh");
        if script.exists() {
            build::make_executable(&script)?;
        }

        std::fs::create_dir_all(&ctx.dirs.bin)?;
        let launcher = ctx.dirs.bin.join("reshade-setup");
        std::fs::write(
            &launcher,
            format!(
                "#!/bin/bash\ncd \"{}\"\nexec ./reshade-linux.sh \"$@\"\n",
                src_dir.display()
            ),
        )?;
        build::make_executable(&launcher)?;

        ui::detail("Run 'reshade-setup' to install ReShade for specific games");
        Ok(())
    }
}

impl Component for Depth3d {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn check_installed(&self, dirs: &InstallDirs) -> ComponentStatus {
        if dirs.install.join("reshade-steam-proton").exists() {
            ComponentStatus::Installed
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn strategies(&self, _distro: Distro) -> Vec<Strategy<'_>> {
        vec![Strategy::new("reshade helper checkout", |ctx| {
            Self::install_helper(ctx)
        })]
    }

    fn uninstall(&self, ctx: &InstallContext) -> Result<()> {
        remove_artifact(&ctx.dirs.install.join("reshade-steam-proton"))?;
        remove_artifact(&ctx.dirs.bin.join("reshade-setup"))?;
        Ok(())
    }
}
