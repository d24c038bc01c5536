use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::error::DomainError;

/// A filesystem path guaranteed to stay inside the project root.
///
/// Invariants: never absolute, never contains a `..` component.
/// Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path is absolute or escapes the root
    /// (use `try_new` for fallible construction).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::try_new(path).expect("RelativePath invariant violated")
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(DomainError::PathEscapesRoot {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    /// Join a segment, maintaining the invariants.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::try_new(self.0.join(segment))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_relative_paths() {
        assert!(RelativePath::try_new("backend/src/index.ts").is_ok());
        assert!(RelativePath::try_new(".env.example").is_ok());
    }

    #[test]
    fn rejects_absolute_paths() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_traversal() {
        assert!(matches!(
            RelativePath::try_new("../outside"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(matches!(
            RelativePath::try_new("backend/../../outside"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn join_preserves_invariants() {
        let base = RelativePath::new("backend");
        assert_eq!(base.join("src").unwrap().as_str(), "backend/src");
        assert!(base.join("../escape").is_err());
    }
}
