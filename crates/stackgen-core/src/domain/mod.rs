//! Core domain layer for Stackgen.
//!
//! Pure logic only: no I/O, no subprocesses, no async. Filesystem and
//! external-tool concerns are behind the ports defined in the application
//! layer.

pub mod common;
pub mod error;
pub mod plan;
pub mod project;
pub mod template;

// Re-exports for convenience
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use plan::{
    CommandStep, FileContent, FilePlanEntry, INITIAL_COMMIT_MESSAGE, PlanOptions, ScaffoldPlan,
    plan,
};
pub use project::{ProjectSpec, VARIABLE_NAMES};
pub use template::{Template, TemplateId, TemplateRegistry, TemplateSource, ids};
