//! Command entry points
//!
//! Thin functions over the orchestrator, one per CLI mode. Each returns the
//! process exit code: 0 for a clean completion (including "nothing
//! selected"), 1 when the run completed with component failures.

pub mod install;
pub mod list;
pub mod menu;
pub mod uninstall;
