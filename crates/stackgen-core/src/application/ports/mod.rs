//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the orchestrator needs from external systems.
//! The `stackgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::CommandStep;
use crate::error::StackgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stackgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()>;

    /// Write content to a file, overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> StackgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StackgenResult<()>;
}

/// Captured outcome of one external-tool invocation.
///
/// The runner never interprets output content; success is solely the exit
/// code. Output is kept only for diagnostics on failure.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Process exit code; `None` if terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout and stderr joined for display.
    pub fn combined(&self) -> String {
        let mut out = String::new();
        if !self.stdout.trim().is_empty() {
            out.push_str(self.stdout.trim_end());
        }
        if !self.stderr.trim().is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(self.stderr.trim_end());
        }
        out
    }
}

/// Port for external-tool execution.
///
/// Implemented by:
/// - `stackgen_adapters::runner::ProcessRunner` (production)
/// - `stackgen_adapters::runner::RecordingRunner` (testing)
///
/// Execution is synchronous and blocks until the process exits; there is no
/// timeout. Callers needing bounded runtime must wrap the whole run.
pub trait CommandRunner: Send + Sync {
    /// Execute a step with its working directory resolved against
    /// `project_root`. Returns the captured outcome; spawn failures are
    /// errors, non-zero exits are not (the orchestrator applies the
    /// `must_succeed` rule).
    fn run(&self, step: &CommandStep, project_root: &Path) -> StackgenResult<CommandOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_exit_zero_only() {
        let ok = CommandOutput {
            exit_code: Some(0),
            ..Default::default()
        };
        let fail = CommandOutput {
            exit_code: Some(1),
            ..Default::default()
        };
        let signal = CommandOutput {
            exit_code: None,
            ..Default::default()
        };
        assert!(ok.success());
        assert!(!fail.success());
        assert!(!signal.success());
    }

    #[test]
    fn combined_joins_streams() {
        let out = CommandOutput {
            exit_code: Some(1),
            stdout: "progress\n".into(),
            stderr: "boom\n".into(),
        };
        assert_eq!(out.combined(), "progress\nboom");
    }
}
