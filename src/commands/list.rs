//! List command: the registry grouped by category, with live status

use console::Style;
use serde::Serialize;

use crate::component::{Category, ComponentSpec, ComponentStatus};
use crate::error::Result;
use crate::paths::InstallDirs;
use crate::registry::Registry;
use crate::ui;

#[derive(Serialize)]
struct ListEntry {
    #[serde(flatten)]
    spec: ComponentSpec,
    status: ComponentStatus,
}

/// Print the component listing; JSON when requested
pub fn run(registry: &Registry, dirs: &InstallDirs, json: bool) -> Result<i32> {
    if json {
        print_json(registry, dirs)?;
    } else {
        print_catalog(registry, dirs);
    }
    Ok(0)
}

fn print_json(registry: &Registry, dirs: &InstallDirs) -> Result<()> {
    let entries: Vec<ListEntry> = registry
        .iter()
        .map(|c| ListEntry {
            spec: c.spec().clone(),
            status: c.check_installed(dirs),
        })
        .collect();
    let rendered = serde_json::to_string_pretty(&entries).map_err(|e| {
        crate::error::VrstackError::IoError {
            message: format!("Failed to serialize component list: {e}"),
            source: None,
        }
    })?;
    println!("{rendered}");
    Ok(())
}

/// Human-readable catalog, grouped by category in presentation order
pub fn print_catalog(registry: &Registry, dirs: &InstallDirs) {
    println!("{}\n", ui::bold("Available Components:"));

    for category in Category::all() {
        let components: Vec<_> = registry
            .iter()
            .filter(|c| c.spec().category == category)
            .collect();
        if components.is_empty() {
            continue;
        }

        println!("  {}", ui::bold(&format!("{}:", category.label())));
        for component in components {
            let spec = component.spec();
            let status = match component.check_installed(dirs) {
                ComponentStatus::Installed => {
                    Style::new().green().apply_to("[installed]").to_string()
                }
                ComponentStatus::UpdateAvailable => Style::new()
                    .cyan()
                    .apply_to("[update available]")
                    .to_string(),
                _ => Style::new()
                    .yellow()
                    .apply_to("[not installed]")
                    .to_string(),
            };
            let required = if spec.required {
                Style::new().red().apply_to("*").to_string()
            } else {
                " ".to_string()
            };
            println!(
                "    {required} {:20} {status:30} {}",
                spec.name, spec.description
            );
        }
        println!();
    }
}
