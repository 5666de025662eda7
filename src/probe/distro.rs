//! Linux distribution detection and package-manager commands

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Package-manager family of the host system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    Ubuntu,
    Debian,
    Fedora,
    Arch,
    OpenSuse,
    Unknown,
}

impl Distro {
    /// Non-interactive package install command prefix, `None` when no
    /// supported package manager is available
    pub fn install_command(self) -> Option<&'static str> {
        match self {
            Distro::Ubuntu | Distro::Debian => Some("sudo apt install -y"),
            Distro::Fedora => Some("sudo dnf install -y"),
            Distro::Arch => Some("sudo pacman -S --noconfirm"),
            Distro::OpenSuse => Some("sudo zypper install -y"),
            Distro::Unknown => None,
        }
    }

    /// Package index refresh command, `None` when no supported package
    /// manager is available
    pub fn update_command(self) -> Option<&'static str> {
        match self {
            Distro::Ubuntu | Distro::Debian => Some("sudo apt update"),
            Distro::Fedora => Some("sudo dnf check-update"),
            Distro::Arch => Some("sudo pacman -Sy"),
            Distro::OpenSuse => Some("sudo zypper refresh"),
            Distro::Unknown => None,
        }
    }

    pub fn is_apt_based(self) -> bool {
        matches!(self, Distro::Ubuntu | Distro::Debian)
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distro::Ubuntu => "Ubuntu",
            Distro::Debian => "Debian",
            Distro::Fedora => "Fedora",
            Distro::Arch => "Arch",
            Distro::OpenSuse => "openSUSE",
            Distro::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// Detect the host distribution from `/etc/os-release`
pub fn detect_distro() -> Distro {
    detect_distro_from(Path::new("/etc/os-release"))
}

fn detect_distro_from(os_release: &Path) -> Distro {
    let Ok(content) = std::fs::read_to_string(os_release) else {
        return Distro::Unknown;
    };
    classify_os_release(&content)
}

fn classify_os_release(content: &str) -> Distro {
    let content = content.to_lowercase();
    // Ubuntu before Debian: Ubuntu's os-release mentions both
    if content.contains("ubuntu") {
        Distro::Ubuntu
    } else if content.contains("debian") {
        Distro::Debian
    } else if content.contains("fedora") {
        Distro::Fedora
    } else if content.contains("arch") {
        Distro::Arch
    } else if content.contains("opensuse") {
        Distro::OpenSuse
    } else {
        Distro::Unknown
    }
}
