//! Scripted runner for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use stackgen_core::application::ports::{CommandOutput, CommandRunner};
use stackgen_core::application::{ApplicationError, resolve_working_dir};
use stackgen_core::domain::CommandStep;
use stackgen_core::error::StackgenResult;

/// One invocation the runner saw, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInvocation {
    /// Rendered command line (`program arg arg ...`).
    pub command: String,
    pub working_dir: PathBuf,
}

/// Test runner: records every invocation and succeeds with exit code 0 unless
/// scripted otherwise. Matching is by substring of the rendered command line.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    invocations: Vec<RecordedInvocation>,
    exit_failures: Vec<(String, i32)>,
    launch_failures: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a non-zero exit for any command containing `matcher`.
    pub fn fail_on(&self, matcher: impl Into<String>, exit_code: i32) {
        let mut inner = self.inner.lock().unwrap();
        inner.exit_failures.push((matcher.into(), exit_code));
    }

    /// Script a spawn failure (tool not installed) for any command containing
    /// `matcher`.
    pub fn refuse_to_launch(&self, matcher: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.launch_failures.push(matcher.into());
    }

    /// Every invocation seen so far, in order.
    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.inner.lock().unwrap().invocations.clone()
    }

    /// Rendered command lines only, for terse assertions.
    pub fn commands(&self) -> Vec<String> {
        self.invocations().into_iter().map(|i| i.command).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, step: &CommandStep, project_root: &Path) -> StackgenResult<CommandOutput> {
        let command = step.to_string();
        let working_dir = resolve_working_dir(project_root, &step.working_dir);

        let mut inner = self.inner.lock().map_err(|_| {
            stackgen_core::error::StackgenError::Internal {
                message: "recording runner lock poisoned".into(),
            }
        })?;
        inner.invocations.push(RecordedInvocation {
            command: command.clone(),
            working_dir,
        });

        if inner.launch_failures.iter().any(|m| command.contains(m)) {
            return Err(ApplicationError::CommandLaunchFailed {
                command,
                reason: "No such file or directory (os error 2)".into(),
            }
            .into());
        }

        if let Some((_, code)) = inner
            .exit_failures
            .iter()
            .find(|(m, _)| command.contains(m))
        {
            return Ok(CommandOutput {
                exit_code: Some(*code),
                stdout: String::new(),
                stderr: format!("scripted failure for `{command}`\n"),
            });
        }

        Ok(CommandOutput {
            exit_code: Some(0),
            ..Default::default()
        })
    }
}
