//! Application layer errors.
//!
//! These errors represent failures in orchestration — filesystem mutation
//! and external-tool execution. Business logic errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while executing a scaffold plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target directory already exists (precondition check, before any
    /// filesystem mutation).
    #[error("Target directory already exists at {path}")]
    TargetExists { path: PathBuf },

    /// Directory/file creation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external tool ran and exited non-zero on a must-succeed step.
    /// Always fatal: later steps assume this one's side effects exist.
    #[error("Command failed: `{command}` in {working_dir} (exit code {exit_code:?})")]
    CommandFailed {
        command: String,
        working_dir: PathBuf,
        exit_code: Option<i32>,
        output: String,
    },

    /// An external tool could not be started at all (not installed, not in
    /// PATH, spawn failure).
    #[error("Could not launch `{command}`: {reason}")]
    CommandLaunchFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::CommandFailed {
                command, output, ..
            } => {
                let mut s = vec![
                    format!("External command failed: {}", command),
                    "Nothing is retried; fix the underlying problem and re-run".into(),
                ];
                if !output.trim().is_empty() {
                    s.push(format!("Tool output:\n{}", output.trim()));
                }
                s
            }
            Self::CommandLaunchFailed { command, .. } => vec![
                format!("Could not start: {}", command),
                "Ensure the tool is installed and in your PATH".into(),
                "Required tools: pnpm, npx (Node.js), git".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::CommandFailed { .. }
            | Self::CommandLaunchFailed { .. } => ErrorCategory::Internal,
        }
    }
}
