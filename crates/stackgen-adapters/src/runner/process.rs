//! Subprocess runner using std::process.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use stackgen_core::application::ports::{CommandOutput, CommandRunner};
use stackgen_core::application::{ApplicationError, resolve_working_dir};
use stackgen_core::domain::CommandStep;
use stackgen_core::error::StackgenResult;

/// Production runner: spawns the tool, blocks until it exits, captures both
/// output streams. Exit-code interpretation is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, step: &CommandStep, project_root: &Path) -> StackgenResult<CommandOutput> {
        let working_dir = resolve_working_dir(project_root, &step.working_dir);
        debug!(command = %step, dir = %working_dir.display(), "Spawning process");

        let output = Command::new(step.program)
            .args(&step.args)
            .current_dir(&working_dir)
            .output()
            .map_err(|e| ApplicationError::CommandLaunchFailed {
                command: step.to_string(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
