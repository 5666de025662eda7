//! OpenTrack: head tracking with webcam AI (NeuralNet tracker built in)
//!
//! No usable distro packages, so the only strategy is a cmake source build.

use super::{
    Category, Component, ComponentSpec, ComponentStatus, InstallContext, Strategy, build,
    command_on_path, remove_artifact,
};
use crate::error::Result;
use crate::paths::InstallDirs;
use crate::probe::Distro;
use crate::ui;

const REPO_URL: &str = "https://github.com/opentrack/opentrack.git";

pub struct OpenTrack {
    spec: ComponentSpec,
}

impl OpenTrack {
    pub fn new() -> Self {
        Self {
            spec: ComponentSpec {
                name: "opentrack",
                description: "Head tracking with webcam AI (NeuralNet tracker built-in)",
                category: Category::Tracking,
                required: false,
                dependencies: &[],
                conflicts: &[],
            },
        }
    }

    fn build_deps(distro: Distro) -> &'static [&'static str] {
        match distro {
            Distro::Ubuntu | Distro::Debian => &[
                "cmake",
                "git",
                "qttools5-dev",
                "qtbase5-private-dev",
                "libprocps-dev",
                "libopencv-dev",
                "libqt5x11extras5-dev",
                "qt6-base-dev",
                "qt6-tools-dev",
                "qt6-tools-dev-tools",
                "qt6-base-private-dev",
            ],
            Distro::Fedora => &[
                "cmake",
                "git",
                "qt6-qttools-devel",
                "qt6-qtbase-private-devel",
                "procps-ng-devel",
                "opencv-devel",
            ],
            Distro::Arch => &["cmake", "git", "qt6-tools", "qt6-base", "opencv", "procps-ng"],
            _ => &[],
        }
    }

    fn build_from_source(ctx: &InstallContext) -> Result<()> {
        ui::detail("Building from source (this may take a few minutes)...");
        build::install_build_deps(ctx, Self::build_deps(ctx.distro));

        let src_dir = ctx.dirs.cache.join("opentrack-src");
        build::clone_or_update(REPO_URL, &src_dir)?;
        build::cmake_build_install(ctx, &src_dir)
    }
}

impl Component for OpenTrack {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn check_installed(&self, _dirs: &InstallDirs) -> ComponentStatus {
        if command_on_path("opentrack") {
            ComponentStatus::Installed
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn strategies(&self, _distro: Distro) -> Vec<Strategy<'_>> {
        vec![Strategy::new("source build", |ctx| {
            Self::build_from_source(ctx)
        })]
    }

    fn uninstall(&self, ctx: &InstallContext) -> Result<()> {
        remove_artifact(&ctx.dirs.bin.join("opentrack"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_source_build_strategy() {
        let opentrack = OpenTrack::new();
        for distro in [Distro::Ubuntu, Distro::Arch, Distro::Unknown] {
            let chain = opentrack.strategies(distro);
            assert_eq!(chain.len(), 1);
            assert_eq!(chain[0].name, "source build");
        }
    }

    #[test]
    fn test_no_build_deps_for_unknown_distro() {
        assert!(OpenTrack::build_deps(Distro::Unknown).is_empty());
        assert!(!OpenTrack::build_deps(Distro::Fedora).is_empty());
    }
}
