//! Shared helpers for source-build install strategies
//!
//! Source checkouts live under the cache root and are updated in place on
//! re-runs. Cloning and updating goes through git2 rather than shelling out;
//! everything else (cmake, make, cargo) goes through the [`Runner`].

use std::path::Path;

use git2::{FetchOptions, Repository, build::RepoBuilder};

use crate::component::InstallContext;
use crate::error::{Result, VrstackError};
use crate::ui;

/// Clone a repository, or fetch and hard-reset if the checkout already exists
pub fn clone_or_update(url: &str, dest: &Path) -> Result<()> {
    if dest.join(".git").exists() {
        ui::detail(&format!("Updating {}...", dest_name(dest)));
        update(dest)
    } else {
        ui::detail(&format!("Cloning {}...", dest_name(dest)));
        clone(url, dest)
    }
}

fn dest_name(dest: &Path) -> String {
    dest.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dest.display().to_string())
}

fn clone(url: &str, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Shallow clone: only the tip of the default branch is ever built
    let mut fetch_options = FetchOptions::new();
    fetch_options.depth(1);

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);
    builder
        .clone(url, dest)
        .map(|_| ())
        .map_err(|e| VrstackError::GitCloneFailed {
            url: url.to_string(),
            reason: e.message().to_string(),
        })
}

fn update(dest: &Path) -> Result<()> {
    let update_err = |e: git2::Error| VrstackError::GitUpdateFailed {
        path: dest.display().to_string(),
        reason: e.message().to_string(),
    };

    let repo = Repository::open(dest).map_err(update_err)?;
    {
        let mut remote = repo.find_remote("origin").map_err(update_err)?;
        // Empty refspec list fetches the remote's configured refspecs
        remote
            .fetch(&[] as &[&str], None, None)
            .map_err(update_err)?;
    }

    let fetch_head = repo.find_reference("FETCH_HEAD").map_err(update_err)?;
    let commit = fetch_head.peel_to_commit().map_err(update_err)?;
    repo.reset(commit.as_object(), git2::ResetType::Hard, None)
        .map_err(update_err)?;
    Ok(())
}

/// Install system packages through the distro's package manager
pub fn install_packages(ctx: &InstallContext, packages: &[&str]) -> Result<()> {
    let Some(install_cmd) = ctx.distro.install_command() else {
        ui::warn(&format!(
            "Unknown distro, please install manually: {}",
            packages.join(" ")
        ));
        return Err(VrstackError::NoPackageManager);
    };
    ctx.runner
        .run(&format!("{install_cmd} {}", packages.join(" ")))?;
    Ok(())
}

/// Install build dependencies, warning instead of failing
///
/// The build itself is the authoritative failure signal; a partially
/// unavailable dependency list should not stop the attempt.
pub fn install_build_deps(ctx: &InstallContext, packages: &[&str]) {
    if packages.is_empty() {
        return;
    }
    if let Err(e) = install_packages(ctx, packages) {
        ui::warn(&format!("Could not install build dependencies: {e}"));
    }
}

/// Parallel build job count
pub fn num_cores() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(4)
}

/// Out-of-tree cmake configure, parallel make, and `make install` into
/// the user's `~/.local` prefix
pub fn cmake_build_install(ctx: &InstallContext, src_dir: &Path) -> Result<()> {
    let build_dir = src_dir.join("build");
    std::fs::create_dir_all(&build_dir)?;

    let prefix = ctx.dirs.home.join(".local");
    ctx.runner.run_checked_in(
        &format!("cmake .. -DCMAKE_INSTALL_PREFIX={}", prefix.display()),
        &build_dir,
    )?;
    ctx.runner
        .run_checked_in(&format!("make -j{}", num_cores()), &build_dir)?;
    ctx.runner.run_checked_in("make install", &build_dir)?;
    Ok(())
}

/// Copy a directory tree, replacing the destination if it exists
pub fn replace_dir(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        std::fs::remove_dir_all(dst)?;
    }
    copy_dir_recursive(src, dst)?;
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            std::fs::copy(&entry_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Mark a file executable (0o755)
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::InstallDirs;
    use crate::probe::{Distro, HardwareInfo};
    use crate::runner::mock::MockRunner;
    use tempfile::TempDir;

    fn ctx<'a>(
        runner: &'a MockRunner,
        dirs: &'a InstallDirs,
        distro: Distro,
        hardware: &'a HardwareInfo,
    ) -> InstallContext<'a> {
        InstallContext {
            runner,
            dirs,
            distro,
            hardware,
        }
    }

    #[test]
    fn test_install_packages_unknown_distro() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let runner = MockRunner::new();
        let hardware = HardwareInfo::default();
        let c = ctx(&runner, &dirs, Distro::Unknown, &hardware);

        let err = install_packages(&c, &["cmake"]).unwrap_err();
        assert!(matches!(err, VrstackError::NoPackageManager));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_install_packages_builds_command() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let runner = MockRunner::new();
        let hardware = HardwareInfo::default();
        let c = ctx(&runner, &dirs, Distro::Fedora, &hardware);

        install_packages(&c, &["cmake", "gcc-c++"]).unwrap();
        assert!(runner.ran("sudo dnf install -y cmake gcc-c++"));
    }

    #[test]
    fn test_cmake_build_install_sequence() {
        let temp = TempDir::new().unwrap();
        let dirs = InstallDirs::rooted_at(temp.path());
        let runner = MockRunner::new();
        let hardware = HardwareInfo::default();
        let c = ctx(&runner, &dirs, Distro::Ubuntu, &hardware);

        let src = temp.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        cmake_build_install(&c, &src).unwrap();

        let calls = runner.calls.borrow();
        assert!(calls[0].starts_with("cmake .. -DCMAKE_INSTALL_PREFIX="));
        assert!(calls[1].starts_with("make -j"));
        assert_eq!(calls[2], "make install");
        assert!(src.join("build").is_dir());
    }

    #[test]
    fn test_replace_dir_overwrites() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        std::fs::create_dir_all(src.join("sub")).unwrap();
        std::fs::write(src.join("sub").join("a"), "new").unwrap();

        let dst = temp.path().join("dst");
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(dst.join("stale"), "old").unwrap();

        replace_dir(&src, &dst).unwrap();
        assert!(dst.join("sub").join("a").exists());
        assert!(!dst.join("stale").exists());
    }
}
