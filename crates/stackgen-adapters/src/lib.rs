//! Infrastructure adapters for Stackgen.
//!
//! This crate implements the ports defined in `stackgen-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the built-in
//! template registry that ships with the tool.

pub mod builtin_templates;
pub mod filesystem;
pub mod runner;

// Re-export commonly used adapters
pub use builtin_templates::builtin_registry;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use runner::{ProcessRunner, RecordingRunner};
