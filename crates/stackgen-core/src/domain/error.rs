//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (results carry them by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate path in plan: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Template Registry Errors
    // ========================================================================
    /// Requested template id is not registered. With a well-formed built-in
    /// registry this is an internal-consistency fault, not a user error.
    #[error("Unknown template: {id}")]
    UnknownTemplate { id: String },

    #[error("Template '{id}' is already registered")]
    DuplicateTemplate { id: String },

    /// A placeholder in a template body has no known source in the project
    /// spec. Caught at registration time, never at render time.
    #[error("Template '{template}' references unresolved placeholder '{token}'")]
    UnresolvedPlaceholder { template: String, token: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Start with a letter or number".into(),
                "Examples: my-shop, blog_api, project123".into(),
            ],
            Self::UnknownTemplate { id } => vec![
                format!("Template '{}' is not registered", id),
                "This is a bug in the built-in registry, please report it".into(),
            ],
            Self::UnresolvedPlaceholder { template, token } => vec![
                format!("Template '{}' uses '{{{{{}}}}}'", template, token),
                "Placeholders must map to a project spec variable".into(),
            ],
            Self::PathEscapesRoot { path } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("Refusing to write outside the project root: {}", path),
                "All generated paths must be relative to the project directory".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. }
            | Self::DuplicateTemplate { .. }
            | Self::UnresolvedPlaceholder { .. } => ErrorCategory::Internal,
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
