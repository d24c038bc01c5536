//! Project specification: the single validated input for a scaffold run.

use std::fmt;

use super::error::DomainError;

/// Placeholder variable names every template may reference.
///
/// This is the contract between the project spec and the template registry:
/// registration rejects any template whose placeholders fall outside this set.
pub const VARIABLE_NAMES: &[&str] = &["PROJECT_NAME", "DB_NAME"];

/// Immutable, validated project specification.
///
/// The name is validated exactly once, before any filesystem mutation, and
/// reused verbatim everywhere it is interpolated (directory name, database
/// name, compose project name, displayed title). Derived values are pure
/// functions of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
}

impl ProjectSpec {
    /// Create a spec from a user-supplied name.
    ///
    /// Rules: non-empty, no path separators, no leading `.` or `-`, not a
    /// dot-path, only `[A-Za-z0-9._-]`. Hostile names are rejected here so
    /// they can never reach path construction.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name == "." || name == ".." {
            Some("name cannot be a dot-path")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name.starts_with('.') {
            Some("name cannot start with '.'")
        } else if name.starts_with('-') {
            Some("name cannot start with '-'")
        } else if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            Some("name may only contain letters, digits, '-', '_', and '.'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                name,
                reason: reason.into(),
            }),
            None => Ok(Self { name }),
        }
    }

    /// The validated project name, verbatim as the user supplied it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database name derived from the project name.
    pub fn db_name(&self) -> String {
        format!("{}_db", self.name)
    }

    /// Title shown in generated pages. Kept verbatim; no re-derivation drift.
    pub fn title(&self) -> &str {
        &self.name
    }

    /// The placeholder variable map used for template rendering.
    ///
    /// Keys must stay in sync with [`VARIABLE_NAMES`].
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PROJECT_NAME", self.name.clone()),
            ("DB_NAME", self.db_name()),
        ]
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in &["my-shop", "blog_api", "project123", "MyApp", "a.b"] {
            assert!(ProjectSpec::new(*name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            ProjectSpec::new(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn path_separators_are_invalid() {
        assert!(ProjectSpec::new("a/b").is_err());
        assert!(ProjectSpec::new("a\\b").is_err());
        assert!(ProjectSpec::new("../escape").is_err());
    }

    #[test]
    fn dot_paths_are_invalid() {
        assert!(ProjectSpec::new(".").is_err());
        assert!(ProjectSpec::new("..").is_err());
        assert!(ProjectSpec::new(".hidden").is_err());
    }

    #[test]
    fn leading_dash_is_invalid() {
        // Would be parsed as a flag by the external tools we shell out to.
        assert!(ProjectSpec::new("-rf").is_err());
    }

    #[test]
    fn whitespace_is_invalid() {
        assert!(ProjectSpec::new("my app").is_err());
    }

    #[test]
    fn db_name_is_derived() {
        let spec = ProjectSpec::new("demo").unwrap();
        assert_eq!(spec.db_name(), "demo_db");
    }

    #[test]
    fn variables_cover_the_declared_contract() {
        let spec = ProjectSpec::new("demo").unwrap();
        let vars = spec.variables();
        for name in VARIABLE_NAMES {
            assert!(
                vars.iter().any(|(k, _)| k == name),
                "missing variable: {name}"
            );
        }
        assert_eq!(vars.len(), VARIABLE_NAMES.len());
    }
}
