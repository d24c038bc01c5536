//! Command handler modules; one per subcommand.

pub mod completions;
pub mod new;
pub mod plan;
