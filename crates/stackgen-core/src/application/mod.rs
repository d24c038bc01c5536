//! Application layer: orchestration over the domain.
//!
//! Defines the driven ports (filesystem, command runner) and the scaffold
//! orchestrator that executes a plan through them.

pub mod error;
pub mod orchestrator;
pub mod ports;

pub use error::ApplicationError;
pub use orchestrator::{
    Phase, ScaffoldOptions, ScaffoldOrchestrator, ScaffoldResult, resolve_working_dir,
};
pub use ports::{CommandOutput, CommandRunner, Filesystem};
