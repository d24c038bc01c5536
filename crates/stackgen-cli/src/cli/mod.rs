//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackgen",
    bin_name = "stackgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Full-stack project scaffolding",
    long_about = "Stackgen generates a complete full-stack project: a TypeScript \
                  Express backend with Prisma, a Next.js frontend with Tailwind \
                  and NextUI, and Docker Compose wiring for Postgres.",
    after_help = "EXAMPLES:\n\
        \x20 stackgen new my-shop\n\
        \x20 stackgen new my-shop --skip-install --no-git\n\
        \x20 stackgen plan my-shop\n\
        \x20 stackgen completions bash > /usr/share/bash-completion/completions/stackgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new full-stack project.
    #[command(
        visible_alias = "n",
        about = "Create a new full-stack project",
        after_help = "EXAMPLES:\n\
            \x20 stackgen new my-shop\n\
            \x20 stackgen new my-shop --yes\n\
            \x20 stackgen new my-shop --dry-run\n\
            \x20 stackgen new my-shop --skip-install --no-git"
    )]
    New(NewArgs),

    /// Show what a scaffold run would do, without doing it.
    #[command(
        about = "Print the scaffold plan for a project name",
        after_help = "EXAMPLES:\n\
            \x20 stackgen plan my-shop\n\
            \x20 stackgen plan my-shop --skip-install"
    )]
    Plan(PlanArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackgen completions bash > ~/.local/share/bash-completion/completions/stackgen\n\
            \x20 stackgen completions zsh  > ~/.zfunc/_stackgen\n\
            \x20 stackgen completions fish > ~/.config/fish/completions/stackgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; becomes the directory name under the current directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the package-manager and generator commands (offline scaffold).
    #[arg(
        long = "skip-install",
        help = "Write files only; skip pnpm/npx commands"
    )]
    pub skip_install: bool,

    /// Do not initialize a git repository.
    #[arg(long = "no-git", help = "Skip git init and the initial commit")]
    pub no_git: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackgen plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Project name to plan for.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Plan without the package-manager and generator commands.
    #[arg(long = "skip-install", help = "Exclude pnpm/npx commands from the plan")]
    pub skip_install: bool,

    /// Plan without git initialization.
    #[arg(long = "no-git", help = "Exclude git commands from the plan")]
    pub no_git: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["stackgen", "new", "my-shop"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn new_flags_default_off() {
        let cli = Cli::parse_from(["stackgen", "new", "my-shop"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(!args.yes);
        assert!(!args.force);
        assert!(!args.dry_run);
        assert!(!args.skip_install);
        assert!(!args.no_git);
    }

    #[test]
    fn parse_plan_with_skips() {
        let cli = Cli::parse_from(["stackgen", "plan", "demo", "--skip-install", "--no-git"]);
        let Commands::Plan(args) = cli.command else {
            panic!("expected Plan command");
        };
        assert!(args.skip_install);
        assert!(args.no_git);
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        assert!(Cli::try_parse_from(["stackgen", "new"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stackgen", "--quiet", "--verbose", "plan", "demo"]);
        assert!(result.is_err());
    }
}
