//! CLI definitions using clap derive API
//!
//! Flag-driven surface rather than subcommands: the tool does one thing
//! (drive the component lifecycle) and the flags pick the mode.

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use clap_complete::Shell;

/// VRStack - unified Linux AR/VR component installer
#[derive(Parser, Debug)]
#[command(
    name = "vrstack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Unified installer for Linux AR/VR components",
    long_about = "VRStack installs and manages the Linux AR/VR component stack \
                  (glasses driver, OpenXR runtime, head tracking, 3D desktop, gaming shims), \
                  resolving dependencies and falling back from packages to source builds.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  vrstack                        \x1b[90m# Interactive component selection\x1b[0m\n   \
                  vrstack --minimal              \x1b[90m# Just the required core components\x1b[0m\n   \
                  vrstack --full                 \x1b[90m# Everything, including optional components\x1b[0m\n   \
                  vrstack --components monado opentrack\n   \
                  vrstack --list                 \x1b[90m# Show components and their status\x1b[0m\n   \
                  vrstack --uninstall            \x1b[90m# Remove installed components\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Install only the required core components
    #[arg(long, conflicts_with_all = ["full", "list", "uninstall", "components"])]
    pub minimal: bool,

    /// Install every registered component
    #[arg(long, conflicts_with_all = ["list", "uninstall", "components"])]
    pub full: bool,

    /// List available components grouped by category, with live status
    #[arg(long, conflicts_with_all = ["uninstall", "components"])]
    pub list: bool,

    /// Emit the component listing as JSON (with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Uninstall every component currently installed
    #[arg(long, conflicts_with = "components")]
    pub uninstall: bool,

    /// Specific components to install, by name
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub components: Option<Vec<String>>,

    /// Skip the installation confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub completions: Option<Shell>,
}
