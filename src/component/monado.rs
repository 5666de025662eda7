//! Monado: open source OpenXR runtime
//!
//! Fallback chain: distro package (PPA on apt systems, native package on
//! Fedora/Arch), then a cmake source build with per-distro build
//! dependencies. Unknown distros go straight to the source build.

use std::path::PathBuf;

use super::{
    Category, Component, ComponentSpec, ComponentStatus, InstallContext, Strategy, build,
    command_on_path, remove_artifact,
};
use crate::error::Result;
use crate::paths::InstallDirs;
use crate::probe::Distro;

const REPO_URL: &str = "https://gitlab.freedesktop.org/monado/monado.git";

pub struct Monado {
    spec: ComponentSpec,
}

impl Monado {
    pub fn new() -> Self {
        Self {
            spec: ComponentSpec {
                name: "monado",
                description: "Open source OpenXR runtime (required for VR games)",
                category: Category::Core,
                required: false,
                dependencies: &["xrlinuxdriver"],
                conflicts: &[],
            },
        }
    }

    fn install_from_ppa(ctx: &InstallContext) -> Result<()> {
        ctx.runner
            .run("sudo add-apt-repository -y ppa:monado-xr/monado")?;
        ctx.runner.run("sudo apt update")?;
        ctx.runner
            .run("sudo apt install -y libopenxr-loader1 libopenxr-dev monado")?;
        Ok(())
    }

    fn install_from_package(ctx: &InstallContext) -> Result<()> {
        build::install_packages(ctx, &["monado"])
    }

    fn build_deps(distro: Distro) -> &'static [&'static str] {
        match distro {
            Distro::Ubuntu | Distro::Debian => &[
                "build-essential",
                "cmake",
                "libeigen3-dev",
                "libgl-dev",
                "libvulkan-dev",
                "libx11-xcb-dev",
                "libxrandr-dev",
                "libxcb-randr0-dev",
                "libudev-dev",
                "libhidapi-dev",
                "libwayland-dev",
                "glslang-tools",
                "libcjson-dev",
                "libegl-dev",
                "libusb-1.0-0-dev",
            ],
            Distro::Fedora => &[
                "cmake",
                "gcc-c++",
                "eigen3-devel",
                "mesa-libGL-devel",
                "vulkan-headers",
                "libX11-devel",
                "libXrandr-devel",
                "systemd-devel",
                "hidapi-devel",
                "wayland-devel",
                "glslang",
                "cjson-devel",
                "mesa-libEGL-devel",
                "libusb1-devel",
            ],
            _ => &[],
        }
    }

    fn build_from_source(ctx: &InstallContext) -> Result<()> {
        build::install_build_deps(ctx, Self::build_deps(ctx.distro));

        let src_dir = Self::src_dir(ctx);
        build::clone_or_update(REPO_URL, &src_dir)?;
        build::cmake_build_install(ctx, &src_dir)
    }

    fn src_dir(ctx: &InstallContext) -> PathBuf {
        ctx.dirs.cache.join("monado")
    }
}

impl Component for Monado {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn check_installed(&self, _dirs: &InstallDirs) -> ComponentStatus {
        if command_on_path("monado-service") {
            ComponentStatus::Installed
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn strategies(&self, distro: Distro) -> Vec<Strategy<'_>> {
        let mut chain = Vec::new();
        match distro {
            Distro::Ubuntu | Distro::Debian => {
                chain.push(Strategy::new("Monado PPA", |ctx| Self::install_from_ppa(ctx)));
            }
            Distro::Fedora | Distro::Arch => {
                chain.push(Strategy::new("distro package", |ctx| {
                    Self::install_from_package(ctx)
                }));
            }
            Distro::OpenSuse | Distro::Unknown => {}
        }
        chain.push(Strategy::new("source build", |ctx| {
            Self::build_from_source(ctx)
        }));
        chain
    }

    fn uninstall(&self, ctx: &InstallContext) -> Result<()> {
        for binary in ["monado-service", "monado-cli"] {
            remove_artifact(&ctx.dirs.bin.join(binary))?;
        }
        Ok(())
    }
}
