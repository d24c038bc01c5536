//! Implementation of the `stackgen plan` command.
//!
//! Prints what a scaffold run would do, in execution order, without touching
//! the filesystem or running any tool.

use tracing::instrument;

use stackgen_core::domain::{PlanOptions, ProjectSpec, ScaffoldPlan, plan};

use crate::{
    cli::{PlanArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: PlanArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let spec = ProjectSpec::new(&args.name).map_err(|e| CliError::Core(e.into()))?;

    let options = PlanOptions {
        run_installers: !args.skip_install,
        init_vcs: !args.no_git,
    };
    let plan = plan(&spec, &options);
    plan.validate().map_err(|e| CliError::Core(e.into()))?;

    print_plan(&spec, &plan, &output)?;
    Ok(())
}

/// Render a plan for humans, grouped in execution order.
///
/// Also used by `stackgen new --dry-run`.
pub fn print_plan(spec: &ProjectSpec, plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.header(&format!("Plan for '{spec}'"))?;
    out.print("")?;

    out.print("Directories:")?;
    out.print(&format!("  {spec}/"))?;
    for dir in &plan.directories {
        out.print(&format!("  {spec}/{dir}/"))?;
    }

    print_commands(out, "Backend commands", &plan.backend_commands)?;
    print_files(out, "Backend files", spec, &plan.backend_files)?;
    print_commands(out, "Frontend commands", &plan.frontend_commands)?;
    print_files(out, "Frontend files", spec, &plan.frontend_files)?;
    print_files(out, "Root files", spec, &plan.root_files)?;
    print_commands(out, "Version control", &plan.vcs_commands)?;

    Ok(())
}

fn print_commands(
    out: &OutputManager,
    title: &str,
    steps: &[stackgen_core::domain::CommandStep],
) -> CliResult<()> {
    if steps.is_empty() {
        return Ok(());
    }
    out.print("")?;
    out.print(&format!("{title}:"))?;
    for step in steps {
        if step.working_dir.as_str() == "." {
            out.print(&format!("  $ {step}"))?;
        } else {
            out.print(&format!("  $ {step}  (in {}/)", step.working_dir))?;
        }
    }
    Ok(())
}

fn print_files(
    out: &OutputManager,
    title: &str,
    spec: &ProjectSpec,
    entries: &[stackgen_core::domain::FilePlanEntry],
) -> CliResult<()> {
    if entries.is_empty() {
        return Ok(());
    }
    out.print("")?;
    out.print(&format!("{title}:"))?;
    for entry in entries {
        out.print(&format!("  {spec}/{}", entry.target))?;
    }
    Ok(())
}
