//! Stackgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stackgen
//! full-stack scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        ScaffoldOrchestrator             │
//! │    Executes the Plan, State by State    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, CommandRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stackgen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, ProcessRunner, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, ScaffoldPlan, Templates) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stackgen_core::prelude::*;
//!
//! // 1. Validate the project name
//! let spec = ProjectSpec::new("my-shop")?;
//!
//! // 2. Compute the plan (pure, no side effects)
//! let plan = plan(&spec, &PlanOptions::default());
//!
//! // 3. Execute it (with injected adapters)
//! let orchestrator = ScaffoldOrchestrator::new(registry, filesystem, runner);
//! let result = orchestrator.run(&spec, &plan, root, &ScaffoldOptions::default());
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommandOutput, CommandRunner, Filesystem, Phase, ScaffoldOptions, ScaffoldOrchestrator,
        ScaffoldResult,
    };
    pub use crate::domain::{
        CommandStep, FileContent, FilePlanEntry, PlanOptions, ProjectSpec, RelativePath,
        ScaffoldPlan, Template, TemplateId, TemplateRegistry, ids, plan,
    };
    pub use crate::error::{StackgenError, StackgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
