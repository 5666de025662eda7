//! Interactive component selection

use std::fmt;

use inquire::{InquireError, MultiSelect};

use crate::component::ComponentStatus;
use crate::error::Result;
use crate::paths::InstallDirs;
use crate::registry::Registry;

struct MenuItem {
    name: String,
    label: String,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Prompt for the optional components to install on top of the required set
///
/// Returns `None` when the selection was cancelled or no terminal is
/// attached; required components are implied and not offered.
pub fn select_components(registry: &Registry, dirs: &InstallDirs) -> Result<Option<Vec<String>>> {
    let items: Vec<MenuItem> = registry
        .iter()
        .filter(|c| !c.spec().required)
        .map(|c| {
            let spec = c.spec();
            let installed = match c.check_installed(dirs) {
                ComponentStatus::Installed => " [installed]",
                _ => "",
            };
            MenuItem {
                name: spec.name.to_string(),
                label: format!("{} - {}{installed}", spec.name, spec.description),
            }
        })
        .collect();

    if items.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let result = MultiSelect::new("Select additional components to install:", items)
        .with_help_message("↑↓ to move, SPACE to select, ENTER to confirm, ESC to cancel")
        .prompt();

    match result {
        Ok(chosen) => Ok(Some(chosen.into_iter().map(|item| item.name).collect())),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(InquireError::NotTTY) => {
            println!("Non-interactive mode detected. Use --minimal, --full, or --components.");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
