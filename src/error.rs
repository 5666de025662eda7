//! Error types and handling for vrstack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Registry construction errors are fatal at startup; everything raised during
//! an install is contained at the component boundary by the orchestrator and
//! surfaces only as a per-component failure message.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for vrstack operations
#[derive(Error, Diagnostic, Debug)]
pub enum VrstackError {
    // Registry configuration errors (fatal at startup)
    #[error("Duplicate component name in registry: {name}")]
    #[diagnostic(code(vrstack::registry::duplicate_component))]
    DuplicateComponent { name: String },

    #[error("Component '{component}' depends on unknown component '{dependency}'")]
    #[diagnostic(
        code(vrstack::registry::unknown_dependency),
        help("Every declared dependency must name a registered component")
    )]
    UnknownDependency {
        component: String,
        dependency: String,
    },

    #[error("Dependency cycle in registry: {chain}")]
    #[diagnostic(code(vrstack::registry::dependency_cycle))]
    DependencyCycle { chain: String },

    // Runner errors
    #[error("Command failed with exit code {exit_code}: {command}")]
    #[diagnostic(code(vrstack::runner::command_failed))]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Failed to spawn command: {command}: {reason}")]
    #[diagnostic(code(vrstack::runner::spawn_failed))]
    CommandSpawnFailed { command: String, reason: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(vrstack::git::clone_failed),
        help("Check network access and that the URL is correct")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Failed to update repository at {path}: {reason}")]
    #[diagnostic(code(vrstack::git::update_failed))]
    GitUpdateFailed { path: String, reason: String },

    // Component install errors
    #[error("Failed to install {component}: {reason}")]
    #[diagnostic(code(vrstack::component::install_failed))]
    InstallFailed { component: String, reason: String },

    #[error("No install strategy declared for {component}")]
    #[diagnostic(
        code(vrstack::component::no_strategy),
        help("Every component must end its fallback chain with a universal strategy")
    )]
    NoStrategy { component: String },

    #[error("Built binary '{name}' not found under {dir}")]
    #[diagnostic(code(vrstack::component::binary_not_found))]
    BinaryNotFound { name: String, dir: String },

    #[error("No supported package manager for this distribution")]
    #[diagnostic(
        code(vrstack::probe::no_package_manager),
        help("Install the listed packages manually, then re-run the installer")
    )]
    NoPackageManager,

    // Environment errors
    #[error("Could not determine home directory")]
    #[diagnostic(code(vrstack::paths::home_not_found))]
    HomeDirNotFound,

    #[error("IO error: {message}")]
    #[diagnostic(code(vrstack::io::error))]
    IoError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Interactive prompt failed: {0}")]
    #[diagnostic(code(vrstack::ui::prompt_failed))]
    PromptFailed(String),
}

impl From<std::io::Error> for VrstackError {
    fn from(err: std::io::Error) -> Self {
        VrstackError::IoError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<inquire::InquireError> for VrstackError {
    fn from(err: inquire::InquireError) -> Self {
        VrstackError::PromptFailed(err.to_string())
    }
}

/// Result type alias for vrstack operations
pub type Result<T> = std::result::Result<T, VrstackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_duplicate_component() {
        let err = VrstackError::DuplicateComponent {
            name: "monado".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate component name in registry: monado"
        );
    }

    #[test]
    fn test_error_display_command_failed() {
        let err = VrstackError::CommandFailed {
            command: "sudo apt install -y monado".to_string(),
            exit_code: 100,
            stderr: "E: Unable to locate package".to_string(),
        };
        assert!(err.to_string().contains("exit code 100"));
        assert!(err.to_string().contains("sudo apt install"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: VrstackError = io_err.into();
        assert!(matches!(err, VrstackError::IoError { .. }));
    }
}
