//! Console output helpers
//!
//! Plain `println!` with `console` styling, matching the rest of the tool's
//! textual status output. No logging framework: this is a short-lived
//! interactive CLI and everything user-relevant goes straight to the terminal.

use console::Style;

use crate::probe::{Distro, HardwareInfo};

pub fn header() {
    let banner = Style::new().cyan().bold();
    println!(
        "{}",
        banner.apply_to(
            "╔══════════════════════════════════════════════════════════════╗\n\
             ║             VRStack Installer v0.2.0                         ║\n\
             ║         Unified Linux AR/VR Component Manager                ║\n\
             ╚══════════════════════════════════════════════════════════════╝"
        )
    );
    println!();
}

/// `[*]` progress line for a component or strategy starting
pub fn step(msg: &str) {
    println!("{} {}", Style::new().cyan().apply_to("[*]"), msg);
}

/// `[✓]` success line
pub fn ok(msg: &str) {
    println!("{} {}", Style::new().green().apply_to("[✓]"), msg);
}

/// `[!]` warning line
pub fn warn(msg: &str) {
    println!("{} {}", Style::new().yellow().apply_to("[!]"), msg);
}

/// `[!]` failure line in red
pub fn fail(msg: &str) {
    println!("{} {}", Style::new().red().apply_to("[!]"), msg);
}

/// Indented detail line
pub fn detail(msg: &str) {
    println!("    {msg}");
}

pub fn bold(msg: &str) -> String {
    Style::new().bold().apply_to(msg).to_string()
}

pub fn environment_summary(distro: Distro, hardware: &HardwareInfo) {
    println!("Detected distro: {}", Style::new().cyan().apply_to(distro));
    println!();
    println!("{}", bold("Detected Hardware:"));

    let yes = Style::new().green().apply_to("✓").to_string();
    let no = Style::new().yellow().apply_to("○").to_string();

    if hardware.glasses_detected {
        println!("  {yes} AR Glasses: {}", hardware.glasses_name);
    } else {
        println!("  {no} AR Glasses: Not detected (will work when connected)");
    }

    if hardware.webcam_detected {
        println!(
            "  {yes} Webcam: {} ({})",
            hardware.webcam_name, hardware.webcam_path
        );
    } else {
        println!("  {no} Webcam: Not detected (needed for 6DOF tracking)");
    }

    if !hardware.gpu_vendor.is_empty() {
        println!(
            "  {yes} GPU: {} ({})",
            hardware.gpu_name, hardware.gpu_vendor
        );
    }
    println!();
}
