//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stackgen_core::{application::ports::Filesystem, error::StackgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StackgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> StackgenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> stackgen_core::error::StackgenError {
    use stackgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));

        let file = nested.join("hello.txt");
        fs.write_file(&file, "hi\n").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hi\n");

        fs.remove_dir_all(dir.path().join("a").as_path()).unwrap();
        assert!(!fs.exists(&file));
    }

    #[test]
    fn remove_missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.remove_dir_all(&dir.path().join("nope")).is_err());
    }
}
