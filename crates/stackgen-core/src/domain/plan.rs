//! Directory planner: computes what a scaffold run will do, without doing it.
//!
//! Planning is pure — no filesystem access, no subprocesses. The plan's
//! group ordering is a hard contract: later groups may assume earlier ones
//! completed (file writes into `backend/` assume the backend directory
//! exists, the VCS commit assumes every file is on disk).

use std::collections::HashSet;
use std::fmt;

use super::common::RelativePath;
use super::error::DomainError;
use super::project::ProjectSpec;
use super::template::{TemplateId, ids};

/// Content source for a planned file: a registered template or a literal body.
#[derive(Debug, Clone)]
pub enum FileContent {
    Template(TemplateId),
    Literal(String),
}

/// One file to materialize, relative to the project root.
#[derive(Debug, Clone)]
pub struct FilePlanEntry {
    pub target: RelativePath,
    pub content: FileContent,
}

impl FilePlanEntry {
    pub fn from_template(target: impl Into<RelativePath>, id: TemplateId) -> Self {
        Self {
            target: target.into(),
            content: FileContent::Template(id),
        }
    }
}

/// One external-tool invocation.
///
/// The program is a fixed static string — never templated with user input —
/// so the project name cannot inject a different executable. Only arguments
/// may carry derived values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    /// Working directory relative to the project root (`.` for the root).
    pub working_dir: RelativePath,
    pub program: &'static str,
    pub args: Vec<String>,
    pub must_succeed: bool,
}

impl CommandStep {
    pub fn new(working_dir: impl Into<RelativePath>, program: &'static str, args: &[&str]) -> Self {
        Self {
            working_dir: working_dir.into(),
            program,
            args: args.iter().map(|s| s.to_string()).collect(),
            must_succeed: true,
        }
    }
}

impl fmt::Display for CommandStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

/// Knobs that drop whole command groups from the plan.
///
/// File and directory groups are always present; only external-tool groups
/// are optional (offline runs, no-VCS runs).
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    /// Run the package-manager and generator commands.
    pub run_installers: bool,
    /// Initialize a git repository with one commit.
    pub init_vcs: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            run_installers: true,
            init_vcs: true,
        }
    }
}

/// The complete, ordered plan for one scaffold run.
///
/// Field order mirrors execution order.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub directories: Vec<RelativePath>,
    pub backend_commands: Vec<CommandStep>,
    pub backend_files: Vec<FilePlanEntry>,
    pub frontend_commands: Vec<CommandStep>,
    pub frontend_files: Vec<FilePlanEntry>,
    pub root_files: Vec<FilePlanEntry>,
    pub vcs_commands: Vec<CommandStep>,
}

impl ScaffoldPlan {
    /// All file entries across groups, in execution order.
    pub fn file_entries(&self) -> impl Iterator<Item = &FilePlanEntry> {
        self.backend_files
            .iter()
            .chain(&self.frontend_files)
            .chain(&self.root_files)
    }

    /// All command steps across groups, in execution order.
    pub fn command_steps(&self) -> impl Iterator<Item = &CommandStep> {
        self.backend_commands
            .iter()
            .chain(&self.frontend_commands)
            .chain(&self.vcs_commands)
    }

    /// Check plan-level invariants: no duplicate file targets.
    ///
    /// Path containment is already guaranteed per-entry by [`RelativePath`].
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in self.file_entries() {
            if !seen.insert(entry.target.as_str().to_string()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.target.as_str().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Fixed commit message; names the stack so `git log` explains the tree.
pub const INITIAL_COMMIT_MESSAGE: &str =
    "Initial commit: full-stack scaffold (Next.js + Express + Prisma + Tailwind + Docker)";

/// Compute the plan for a project spec.
///
/// The structural shape is name-invariant: for any valid name the same
/// directories, targets, and programs come out — only interpolated argument
/// values differ (and with the current step set, none do).
pub fn plan(spec: &ProjectSpec, options: &PlanOptions) -> ScaffoldPlan {
    let _ = spec; // targets are fixed; the spec feeds rendering, not layout

    let directories = vec![
        RelativePath::from("backend"),
        RelativePath::from("backend/src"),
        RelativePath::from("frontend"),
    ];

    let backend_commands = if options.run_installers {
        vec![
            CommandStep::new("backend", "pnpm", &["init"]),
            CommandStep::new("backend", "pnpm", &["add", "express", "@prisma/client"]),
            CommandStep::new(
                "backend",
                "pnpm",
                &[
                    "add",
                    "-D",
                    "typescript",
                    "ts-node",
                    "prisma",
                    "@types/express",
                    "@types/node",
                ],
            ),
            CommandStep::new(
                "backend",
                "npx",
                &["prisma", "init", "--datasource-provider", "postgresql"],
            ),
        ]
    } else {
        Vec::new()
    };

    let backend_files = vec![
        FilePlanEntry::from_template("backend/package.json", ids::BACKEND_MANIFEST),
        FilePlanEntry::from_template("backend/tsconfig.json", ids::BACKEND_TSCONFIG),
        FilePlanEntry::from_template("backend/prisma/schema.prisma", ids::PRISMA_SCHEMA),
        FilePlanEntry::from_template("backend/src/index.ts", ids::BACKEND_ENTRYPOINT),
        FilePlanEntry::from_template("backend/Dockerfile", ids::BACKEND_DOCKERFILE),
    ];

    let frontend_commands = if options.run_installers {
        vec![
            CommandStep::new(
                ".",
                "npx",
                &[
                    "create-next-app@latest",
                    "frontend",
                    "--typescript",
                    "--eslint",
                    "--no-app",
                    "--use-pnpm",
                ],
            ),
            CommandStep::new("frontend", "pnpm", &["add", "@nextui-org/react"]),
            CommandStep::new("frontend", "npx", &["tailwindcss", "init", "-p"]),
        ]
    } else {
        Vec::new()
    };

    let frontend_files = vec![
        FilePlanEntry::from_template("frontend/tailwind.config.js", ids::TAILWIND_CONFIG),
        FilePlanEntry::from_template("frontend/styles/globals.css", ids::GLOBAL_STYLESHEET),
        FilePlanEntry::from_template("frontend/pages/index.tsx", ids::INDEX_PAGE),
    ];

    let root_files = vec![
        FilePlanEntry::from_template("docker-compose.yml", ids::COMPOSE_FILE),
        FilePlanEntry::from_template(".env.example", ids::ENV_EXAMPLE),
    ];

    let vcs_commands = if options.init_vcs {
        vec![
            CommandStep::new(".", "git", &["init"]),
            CommandStep::new(".", "git", &["add", "-A"]),
            CommandStep::new(".", "git", &["commit", "-m", INITIAL_COMMIT_MESSAGE]),
        ]
    } else {
        Vec::new()
    };

    ScaffoldPlan {
        directories,
        backend_commands,
        backend_files,
        frontend_commands,
        frontend_files,
        root_files,
        vcs_commands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> ProjectSpec {
        ProjectSpec::new(name).unwrap()
    }

    #[test]
    fn plan_group_ordering_is_populated() {
        let plan = plan(&spec("demo"), &PlanOptions::default());
        assert!(!plan.directories.is_empty());
        assert!(!plan.backend_commands.is_empty());
        assert!(!plan.backend_files.is_empty());
        assert!(!plan.frontend_commands.is_empty());
        assert!(!plan.frontend_files.is_empty());
        assert!(!plan.root_files.is_empty());
        assert!(!plan.vcs_commands.is_empty());
    }

    #[test]
    fn plan_shape_is_name_invariant() {
        let a = plan(&spec("alpha"), &PlanOptions::default());
        let b = plan(&spec("totally-different"), &PlanOptions::default());

        let targets = |p: &ScaffoldPlan| -> Vec<String> {
            p.file_entries()
                .map(|e| e.target.as_str().to_string())
                .collect()
        };
        let programs = |p: &ScaffoldPlan| -> Vec<&'static str> {
            p.command_steps().map(|s| s.program).collect()
        };

        assert_eq!(targets(&a), targets(&b));
        assert_eq!(programs(&a), programs(&b));
    }

    #[test]
    fn plan_passes_validation() {
        let plan = plan(&spec("demo"), &PlanOptions::default());
        plan.validate().unwrap();
    }

    #[test]
    fn all_targets_stay_inside_root() {
        // RelativePath construction would have panicked otherwise, but make
        // the containment contract explicit.
        let plan = plan(&spec("demo"), &PlanOptions::default());
        for entry in plan.file_entries() {
            assert!(!entry.target.as_path().is_absolute());
            assert!(!entry.target.as_str().contains(".."));
        }
    }

    #[test]
    fn executables_are_a_fixed_set() {
        let plan = plan(&spec("demo"), &PlanOptions::default());
        for step in plan.command_steps() {
            assert!(
                matches!(step.program, "pnpm" | "npx" | "git"),
                "unexpected program: {}",
                step.program
            );
        }
    }

    #[test]
    fn skipping_installers_drops_tool_groups_only() {
        let opts = PlanOptions {
            run_installers: false,
            init_vcs: true,
        };
        let plan = plan(&spec("demo"), &opts);
        assert!(plan.backend_commands.is_empty());
        assert!(plan.frontend_commands.is_empty());
        assert!(!plan.vcs_commands.is_empty());
        assert_eq!(plan.file_entries().count(), 10);
    }

    #[test]
    fn skipping_vcs_drops_git_steps() {
        let opts = PlanOptions {
            run_installers: true,
            init_vcs: false,
        };
        let plan = plan(&spec("demo"), &opts);
        assert!(plan.vcs_commands.is_empty());
        assert!(plan.command_steps().all(|s| s.program != "git"));
    }

    #[test]
    fn commit_message_names_the_stack() {
        let plan = plan(&spec("demo"), &PlanOptions::default());
        let commit = plan.vcs_commands.last().unwrap();
        assert_eq!(commit.program, "git");
        assert!(commit.args.iter().any(|a| a.contains("Next.js")));
        assert!(commit.args.iter().any(|a| a.contains("Prisma")));
    }

    #[test]
    fn all_steps_must_succeed() {
        let plan = plan(&spec("demo"), &PlanOptions::default());
        assert!(plan.command_steps().all(|s| s.must_succeed));
    }
}
