//! Scaffold orchestrator - drives the end-to-end sequence.
//!
//! The orchestrator is an explicit state machine over the plan groups from
//! the directory planner. Transitions are strictly sequential: each state
//! executes exactly one plan group through the filesystem or command-runner
//! port, and the first failure moves to the terminal `Failed` state with no
//! further steps and no rollback (partially created files are left in
//! place).

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::application::ApplicationError;
use crate::application::ports::{CommandRunner, Filesystem};
use crate::domain::{
    CommandStep, FileContent, FilePlanEntry, ProjectSpec, RelativePath, ScaffoldPlan,
    TemplateRegistry,
};
use crate::error::{StackgenError, StackgenResult};

/// States of a scaffold run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    CreatingDirs,
    RunningBackendTools,
    WritingBackendFiles,
    RunningFrontendTools,
    WritingFrontendFiles,
    WritingRootFiles,
    InitializingVcs,
    Done,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::CreatingDirs => "creating-dirs",
            Self::RunningBackendTools => "running-backend-tools",
            Self::WritingBackendFiles => "writing-backend-files",
            Self::RunningFrontendTools => "running-frontend-tools",
            Self::WritingFrontendFiles => "writing-frontend-files",
            Self::WritingRootFiles => "writing-root-files",
            Self::InitializingVcs => "initializing-vcs",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Outcome of one scaffold run, produced exactly once — at completion or at
/// the first fatal failure.
#[derive(Debug)]
pub struct ScaffoldResult {
    /// Every path this run created, in sorted order.
    pub created_paths: BTreeSet<PathBuf>,
    /// `Done` on success, `Failed` otherwise.
    pub phase: Phase,
    /// The command step that failed, if the failure was an external tool.
    pub failed_step: Option<CommandStep>,
    pub error: Option<StackgenError>,
}

impl ScaffoldResult {
    fn new() -> Self {
        Self {
            created_paths: BTreeSet::new(),
            phase: Phase::Start,
            failed_step: None,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.phase == Phase::Done
    }
}

/// Run-level options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Remove a pre-existing target directory instead of refusing.
    pub overwrite_existing: bool,
}

/// Drives a plan to completion against the injected adapters.
pub struct ScaffoldOrchestrator {
    registry: TemplateRegistry,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl ScaffoldOrchestrator {
    pub fn new(
        registry: TemplateRegistry,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            registry,
            filesystem,
            runner,
        }
    }

    /// Execute the plan. `project_root` is the directory named after the
    /// project; it must not exist yet unless overwrite is enabled.
    #[instrument(skip_all, fields(project = %spec, root = %project_root.display()))]
    pub fn run(
        &self,
        spec: &ProjectSpec,
        plan: &ScaffoldPlan,
        project_root: &Path,
        options: &ScaffoldOptions,
    ) -> ScaffoldResult {
        let mut result = ScaffoldResult::new();
        info!("Scaffold started");

        // Precondition: checked before any filesystem mutation.
        if self.filesystem.exists(project_root) {
            if options.overwrite_existing {
                warn!("Target exists; removing before scaffold (overwrite enabled)");
                if let Err(e) = self.filesystem.remove_dir_all(project_root) {
                    return fail(result, e);
                }
            } else {
                return fail(
                    result,
                    ApplicationError::TargetExists {
                        path: project_root.to_path_buf(),
                    }
                    .into(),
                );
            }
        }

        result.phase = Phase::CreatingDirs;
        if let Err(e) = self.create_dirs(project_root, plan, &mut result.created_paths) {
            return fail(result, e);
        }

        result.phase = Phase::RunningBackendTools;
        if let Err((step, e)) = self.run_steps(project_root, &plan.backend_commands) {
            return fail_step(result, step, e);
        }

        result.phase = Phase::WritingBackendFiles;
        if let Err(e) =
            self.write_files(project_root, spec, &plan.backend_files, &mut result.created_paths)
        {
            return fail(result, e);
        }

        result.phase = Phase::RunningFrontendTools;
        if let Err((step, e)) = self.run_steps(project_root, &plan.frontend_commands) {
            return fail_step(result, step, e);
        }

        result.phase = Phase::WritingFrontendFiles;
        if let Err(e) =
            self.write_files(project_root, spec, &plan.frontend_files, &mut result.created_paths)
        {
            return fail(result, e);
        }

        result.phase = Phase::WritingRootFiles;
        if let Err(e) =
            self.write_files(project_root, spec, &plan.root_files, &mut result.created_paths)
        {
            return fail(result, e);
        }

        result.phase = Phase::InitializingVcs;
        if let Err((step, e)) = self.run_steps(project_root, &plan.vcs_commands) {
            return fail_step(result, step, e);
        }

        result.phase = Phase::Done;
        info!(created = result.created_paths.len(), "Scaffold completed");
        result
    }

    // -------------------------------------------------------------------------
    // Internal helpers - one per plan group kind
    // -------------------------------------------------------------------------

    fn create_dirs(
        &self,
        root: &Path,
        plan: &ScaffoldPlan,
        created: &mut BTreeSet<PathBuf>,
    ) -> StackgenResult<()> {
        self.filesystem.create_dir_all(root)?;
        created.insert(root.to_path_buf());

        for dir in &plan.directories {
            let path = root.join(dir.as_path());
            debug!(dir = %path.display(), "Creating directory");
            self.filesystem.create_dir_all(&path)?;
            created.insert(path);
        }
        Ok(())
    }

    /// Run a command group; the failing step travels with the error so the
    /// result can name it.
    fn run_steps(
        &self,
        root: &Path,
        steps: &[CommandStep],
    ) -> Result<(), (CommandStep, StackgenError)> {
        for step in steps {
            debug!(command = %step, dir = %step.working_dir, "Running external tool");

            let output = match self.runner.run(step, root) {
                Ok(output) => output,
                Err(e) => return Err((step.clone(), e)),
            };

            if step.must_succeed && !output.success() {
                let error = ApplicationError::CommandFailed {
                    command: step.to_string(),
                    working_dir: resolve_working_dir(root, &step.working_dir),
                    exit_code: output.exit_code,
                    output: output.combined(),
                };
                return Err((step.clone(), error.into()));
            }
        }
        Ok(())
    }

    fn write_files(
        &self,
        root: &Path,
        spec: &ProjectSpec,
        entries: &[FilePlanEntry],
        created: &mut BTreeSet<PathBuf>,
    ) -> StackgenResult<()> {
        for entry in entries {
            let content = match &entry.content {
                FileContent::Template(id) => self.registry.render(id, spec)?,
                FileContent::Literal(body) => body.clone(),
            };

            let path = root.join(entry.target.as_path());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            debug!(file = %path.display(), bytes = content.len(), "Writing file");
            self.filesystem.write_file(&path, &content)?;
            created.insert(path);
        }
        Ok(())
    }
}

/// Resolve a step's working directory against the project root.
pub fn resolve_working_dir(root: &Path, working_dir: &RelativePath) -> PathBuf {
    if working_dir.as_str() == "." {
        root.to_path_buf()
    } else {
        root.join(working_dir.as_path())
    }
}

fn fail(mut result: ScaffoldResult, error: StackgenError) -> ScaffoldResult {
    warn!(phase = %result.phase, error = %error, "Scaffold failed");
    result.phase = Phase::Failed;
    result.error = Some(error);
    result
}

fn fail_step(result: ScaffoldResult, step: CommandStep, error: StackgenError) -> ScaffoldResult {
    let mut result = fail(result, error);
    result.failed_step = Some(step);
    result
}
