//! Stardust XR: 3D desktop with floating windows and XR widgets
//!
//! Fedora gets packages from the Terra repository; everything else builds
//! the server, flatland, and protostar from source with cargo, installing
//! rustup first when no toolchain is present. Built binaries are located by
//! scanning `target/release` since upstream binary names have shifted
//! between releases.

use std::path::Path;

use walkdir::WalkDir;

use super::{
    Category, Component, ComponentSpec, ComponentStatus, InstallContext, Strategy, build,
    command_on_path, remove_artifact,
};
use crate::error::{Result, VrstackError};
use crate::paths::InstallDirs;
use crate::probe::Distro;
use crate::ui;

/// (repo, checkout dir, binary, installed name)
const REPOS: &[(&str, &str, &str, &str)] = &[
    (
        "https://github.com/StardustXR/server.git",
        "stardust-server",
        "stardust-xr-server",
        "stardust-xr-server",
    ),
    (
        "https://github.com/StardustXR/flatland.git",
        "stardust-flatland",
        "flatland",
        "stardust-xr-flatland",
    ),
    (
        "https://github.com/StardustXR/protostar.git",
        "stardust-protostar",
        "hexagon_launcher",
        "stardust-xr-hexagon_launcher",
    ),
];

const INSTALLED_BINARIES: &[&str] = &[
    "stardust-xr-server",
    "stardust-xr-flatland",
    "stardust-xr-protostar",
    "stardust-xr-hexagon_launcher",
    "flatland",
    "hexagon_launcher",
];

pub struct StardustXr {
    spec: ComponentSpec,
}

impl StardustXr {
    pub fn new() -> Self {
        Self {
            spec: ComponentSpec {
                name: "stardust-xr",
                description: "3D desktop with floating windows, skyboxes, and XR widgets",
                category: Category::Desktop,
                required: false,
                dependencies: &["monado"],
                conflicts: &[],
            },
        }
    }

    fn install_from_terra(ctx: &InstallContext) -> Result<()> {
        // Terra repo setup is best-effort: it may already be configured
        let _ = ctx.runner.run_unchecked(
            "sudo dnf install -y --nogpgcheck --repofrompath \
             'terra,https://repos.fyralabs.com/terra$releasever' terra-release",
        );
        ctx.runner.run(
            "sudo dnf install -y stardust-xr-server stardust-xr-flatland \
             stardust-xr-protostar stardust-xr-atmosphere",
        )?;
        Ok(())
    }

    fn ensure_rust(ctx: &InstallContext) -> Result<()> {
        if command_on_path("cargo") {
            return Ok(());
        }
        ui::detail("Installing Rust...");
        ctx.runner
            .run("curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh -s -- -y")?;
        Ok(())
    }

    fn build_deps(distro: Distro) -> &'static [&'static str] {
        match distro {
            Distro::Ubuntu | Distro::Debian => &[
                "libfontconfig1-dev",
                "libxkbcommon-dev",
                "pkg-config",
                "libasound2-dev",
            ],
            Distro::Fedora => &[
                "fontconfig-devel",
                "libxkbcommon-devel",
                "pkg-config",
                "alsa-lib-devel",
            ],
            Distro::Arch => &["fontconfig", "libxkbcommon", "pkgconf", "alsa-lib"],
            _ => &[],
        }
    }

    fn build_from_source(ctx: &InstallContext) -> Result<()> {
        Self::ensure_rust(ctx)?;
        build::install_build_deps(ctx, Self::build_deps(ctx.distro));

        std::fs::create_dir_all(&ctx.dirs.cache)?;
        std::fs::create_dir_all(&ctx.dirs.bin)?;

        // cargo may have just been installed outside the current PATH
        let cargo = ctx.dirs.home.join(".cargo").join("bin").join("cargo");
        let cargo_cmd = if cargo.exists() {
            cargo.display().to_string()
        } else {
            "cargo".to_string()
        };

        let mut first_err = None;
        for (url, dir_name, binary, installed_name) in REPOS {
            let src_dir = ctx.dirs.cache.join(dir_name);
            let result = build::clone_or_update(url, &src_dir).and_then(|()| {
                ui::detail(&format!("Building {dir_name}..."));
                ctx.runner
                    .run_checked_in(&format!("{cargo_cmd} build --release"), &src_dir)?;
                Self::install_binary(ctx, &src_dir, binary, installed_name)
            });
            if let Err(e) = result {
                ui::warn(&format!("Failed to build {dir_name}: {e}"));
                first_err.get_or_insert(e);
            }
        }

        match first_err {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Locate the built binary under target/release and copy it to the bin
    /// root under its installed name
    fn install_binary(
        ctx: &InstallContext,
        src_dir: &Path,
        binary: &str,
        installed_name: &str,
    ) -> Result<()> {
        let target_dir = src_dir.join("target").join("release");
        let found = WalkDir::new(&target_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .find(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_str() == Some(binary)
            });

        let Some(entry) = found else {
            return Err(VrstackError::BinaryNotFound {
                name: binary.to_string(),
                dir: target_dir.display().to_string(),
            });
        };

        let dest = ctx.dirs.bin.join(installed_name);
        std::fs::copy(entry.path(), &dest)?;
        build::make_executable(&dest)?;
        ui::detail(&format!("Installed {installed_name}"));
        Ok(())
    }
}

impl Component for StardustXr {
    fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    fn check_installed(&self, _dirs: &InstallDirs) -> ComponentStatus {
        if command_on_path("stardust-xr-server") {
            ComponentStatus::Installed
        } else {
            ComponentStatus::NotInstalled
        }
    }

    fn strategies(&self, distro: Distro) -> Vec<Strategy<'_>> {
        let mut chain = Vec::new();
        if distro == Distro::Fedora {
            chain.push(Strategy::new("Terra repository", |ctx| {
                Self::install_from_terra(ctx)
            }));
        }
        chain.push(Strategy::new("cargo source build", |ctx| {
            Self::build_from_source(ctx)
        }));
        chain
    }

    fn uninstall(&self, ctx: &InstallContext) -> Result<()> {
        for binary in INSTALLED_BINARIES {
            remove_artifact(&ctx.dirs.bin.join(binary))?;
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

    #[test]
    fn test_terra_only_on_fedora() {
        let stardust = StardustXr::new();
        let fedora: Vec<_> = stardust
            .strategies(Distro::Fedora)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(fedora, ["Terra repository", "cargo source build"]);

        let arch: Vec<_> = stardust
            .strategies(Distro::Arch)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(arch, ["cargo source build"]);
    }

    #[test]
    fn test_install_binary_copies_to_bin_root() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        std::fs::create_dir_all(&dirs.bin).unwrap();
        let runner = MockRunner::new();
        let hardware = HardwareInfo::default();
        let ctx = InstallContext {
            runner: &runner,
            dirs: &dirs,
            distro: Distro::Ubuntu,
            hardware: &hardware,
        };

        let src_dir = temp.path().join("stardust-flatland");
        let release = src_dir.join("target").join("release");
        std::fs::create_dir_all(&release).unwrap();
        std::fs::write(release.join("flatland"), "binary").unwrap();

        StardustXr::install_binary(&ctx, &src_dir, "flatland", "stardust-xr-flatland").unwrap();
        assert!(dirs.bin.join("stardust-xr-flatland").exists());
    }

    #[test]
    fn test_install_binary_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let runner = MockRunner::new();
        let hardware = HardwareInfo::default();
        let ctx = InstallContext {
            runner: &runner,
            dirs: &dirs,
            distro: Distro::Ubuntu,
            hardware: &hardware,
        };

        let src_dir = temp.path().join("stardust-server");
        std::fs::create_dir_all(src_dir.join("target").join("release")).unwrap();
        let err =
            StardustXr::install_binary(&ctx, &src_dir, "stardust-xr-server", "stardust-xr-server")
                .unwrap_err();
        assert!(matches!(err, VrstackError::BinaryNotFound { .. }));
    }
}
