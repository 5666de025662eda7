//! External command execution boundary
//!
//! Install strategies shell out to package managers, build tools, and
//! third-party installer scripts. All of that goes through the [`Runner`]
//! capability so failure is always an explicit result at the boundary and
//! tests can script outcomes without touching the system.
//!
//! Execution is blocking and strictly sequential: package managers take
//! exclusive database locks, and a dependent component's install needs its
//! dependency's artifacts on disk before it starts. No timeout is enforced;
//! a hung external process hangs the run.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, VrstackError};

/// Captured result of an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Capability to execute system commands
///
/// `run` raises on a nonzero exit; `run_unchecked` returns the output either
/// way, for probes that interpret the exit code themselves.
pub trait Runner {
    /// Run a shell command, erroring on spawn failure or nonzero exit
    fn run(&self, command: &str) -> Result<CommandOutput> {
        let output = self.run_unchecked(command)?;
        if output.success() {
            Ok(output)
        } else {
            Err(VrstackError::CommandFailed {
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.clone(),
            })
        }
    }

    /// Run a shell command, erroring only on spawn failure
    fn run_unchecked(&self, command: &str) -> Result<CommandOutput> {
        self.run_in(command, None)
    }

    /// Run a shell command in an optional working directory
    fn run_in(&self, command: &str, cwd: Option<&Path>) -> Result<CommandOutput>;

    /// Run a shell command in a working directory, erroring on nonzero exit
    fn run_checked_in(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        let output = self.run_in(command, Some(cwd))?;
        if output.success() {
            Ok(output)
        } else {
            Err(VrstackError::CommandFailed {
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.clone(),
            })
        }
    }
}

/// Runner that executes commands through `sh -c`
///
/// Strategies need pipes and redirects (e.g. `curl ... | sh`), so commands
/// are passed to the shell verbatim rather than being split into argv.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl Runner for ShellRunner {
    fn run_in(&self, command: &str, cwd: Option<&Path>) -> Result<CommandOutput> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| VrstackError::CommandSpawnFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
pub mod mock {
    //! Scripted runner for unit tests

    use std::cell::RefCell;
    use std::path::Path;

    use super::{CommandOutput, Runner};
    use crate::error::Result;

    /// Runner that matches commands against scripted substring rules
    ///
    /// Commands with no matching rule succeed with empty output. Every
    /// executed command line is recorded for assertions.
    #[derive(Default)]
    pub struct MockRunner {
        rules: Vec<(String, i32, String)>,
        pub calls: RefCell<Vec<String>>,
    }

    impl MockRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script a response: commands containing `pattern` exit with
        /// `exit_code` and print `stdout`
        pub fn on(mut self, pattern: &str, exit_code: i32, stdout: &str) -> Self {
            self.rules
                .push((pattern.to_string(), exit_code, stdout.to_string()));
            self
        }

        /// Script a failure for commands containing `pattern`
        pub fn failing_on(self, pattern: &str) -> Self {
            self.on(pattern, 1, "")
        }

        pub fn ran(&self, pattern: &str) -> bool {
            self.calls.borrow().iter().any(|c| c.contains(pattern))
        }
    }

    impl Runner for MockRunner {
        fn run_in(&self, command: &str, _cwd: Option<&Path>) -> Result<CommandOutput> {
            self.calls.borrow_mut().push(command.to_string());
            for (pattern, exit_code, stdout) in &self.rules {
                if command.contains(pattern.as_str()) {
                    return Ok(CommandOutput {
                        exit_code: *exit_code,
                        stdout: stdout.clone(),
                        stderr: if *exit_code == 0 {
                            String::new()
                        } else {
                            format!("mock failure for: {command}")
                        },
                    });
                }
            }
            Ok(CommandOutput {
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }
}
