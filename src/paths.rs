//! Filesystem roots used by component installs
//!
//! Every component receives an explicit [`InstallDirs`] rather than reading
//! ambient paths, so tests can point the whole installer at a temp directory.

use std::path::{Path, PathBuf};

use crate::error::{Result, VrstackError};

/// Filesystem locations components install into
#[derive(Debug, Clone)]
pub struct InstallDirs {
    /// User home directory
    pub home: PathBuf,
    /// Installation root for component payloads (`~/.local/share/VRStack`)
    pub install: PathBuf,
    /// Launcher/binary directory (`~/.local/bin`)
    pub bin: PathBuf,
    /// Configuration root (`~/.config/VRStack`)
    pub config: PathBuf,
    /// Source checkout / download cache (`~/.cache/VRStack`)
    pub cache: PathBuf,
}

impl InstallDirs {
    /// Build the standard layout under the user's home directory
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(VrstackError::HomeDirNotFound)?;
        Ok(Self::rooted_at(&home))
    }

    /// Build the standard layout under an arbitrary root (used by tests)
    pub fn rooted_at(home: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
            install: home.join(".local").join("share").join("VRStack"),
            bin: home.join(".local").join("bin"),
            config: home.join(".config").join("VRStack"),
            cache: home.join(".cache").join("VRStack"),
        }
    }
}
