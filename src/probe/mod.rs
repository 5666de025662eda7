//! Environment probing: distribution family and connected hardware
//!
//! All probes are best-effort. Detection failures never abort the run; they
//! degrade to `Distro::Unknown` or an empty [`HardwareInfo`], which in turn
//! degrades package-based install strategies to their source-build fallbacks.

pub mod distro;
pub mod hardware;

pub use distro::{Distro, detect_distro};
pub use hardware::{HardwareInfo, detect_hardware};
