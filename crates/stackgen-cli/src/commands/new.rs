//! Implementation of the `stackgen new` command.
//!
//! Responsibility: translate CLI arguments into a validated `ProjectSpec`,
//! compute the plan, and drive the orchestrator with production adapters.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use stackgen_adapters::{LocalFilesystem, ProcessRunner, builtin_registry};
use stackgen_core::application::{ScaffoldOptions, ScaffoldOrchestrator};
use stackgen_core::domain::{PlanOptions, ProjectSpec, plan};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    commands::plan::print_plan,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stackgen new` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Resolve plan options from flags and config
/// 3. Early-exit if `--dry-run` (prints the plan, writes nothing)
/// 4. Check for an existing directory
/// 5. Confirm with user unless `--yes` or `--quiet`
/// 6. Execute the plan via the orchestrator
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate name; the spec derives the db name and template variables.
    let spec = ProjectSpec::new(&args.name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Flags win over config file defaults.
    let plan_options = PlanOptions {
        run_installers: !(args.skip_install || config.defaults.skip_install),
        init_vcs: !(args.no_git || config.defaults.no_git),
    };
    let scaffold_plan = plan(&spec, &plan_options);
    scaffold_plan
        .validate()
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        run_installers = plan_options.run_installers,
        init_vcs = plan_options.init_vcs,
        files = scaffold_plan.file_entries().count(),
        commands = scaffold_plan.command_steps().count(),
        "Plan computed"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        print_plan(&spec, &scaffold_plan, &output)?;
        output.print("")?;
        output.info("Dry run: nothing was created")?;
        return Ok(());
    }

    // 4. Check for existing directory before prompting.
    let project_root = PathBuf::from(spec.name());
    if project_root.exists() && !args.force {
        return Err(CliError::ProjectExists { path: project_root });
    }

    // 5. Show configuration and confirm.
    if !global.quiet && !args.yes {
        print_plan(&spec, &scaffold_plan, &output)?;
        output.print("")?;
        if args.force && project_root.exists() {
            output.warning(&format!(
                "'{}' exists and will be removed first (--force)",
                project_root.display()
            ))?;
        }
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Wire production adapters and run.
    let registry = builtin_registry().map_err(CliError::Core)?;
    let orchestrator = ScaffoldOrchestrator::new(
        registry,
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
    );
    let scaffold_options = ScaffoldOptions {
        overwrite_existing: args.force,
    };

    output.header(&format!("Creating '{spec}'..."))?;
    info!(project = %spec, path = %project_root.display(), "Scaffold started");

    let result = orchestrator.run(&spec, &scaffold_plan, &project_root, &scaffold_options);

    if !result.is_success() {
        if let Some(step) = &result.failed_step {
            output.error(&format!("Step failed: {step}"))?;
        }
        let error = result.error.unwrap_or_else(|| {
            stackgen_core::error::StackgenError::Internal {
                message: "scaffold failed without an error".into(),
            }
        });
        return Err(CliError::Core(error));
    }

    info!(created = result.created_paths.len(), "Scaffold completed");

    // 7. Success + next steps.
    output.success(&format!("Project '{spec}' created!"))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {spec}"))?;
        output.print("  cp .env.example .env")?;
        output.print("  docker compose up -d db")?;
        output.print("  cd backend && pnpm prisma:migrate")?;
        output.print("  docker compose up")?;
    }

    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.no_git = true;

        // Config alone disables git even when the flag is not passed.
        let no_git_flag = false;
        let options = PlanOptions {
            run_installers: !config.defaults.skip_install,
            init_vcs: !(no_git_flag || config.defaults.no_git),
        };
        assert!(options.run_installers);
        assert!(!options.init_vcs);
    }

    #[test]
    fn invalid_name_maps_to_core_error() {
        let result = ProjectSpec::new("a/b").map_err(|e| CliError::Core(e.into()));
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
