//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stackgen_core::application::ports::Filesystem;
use stackgen_core::application::ApplicationError;
use stackgen_core::error::{StackgenError, StackgenResult};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Pre-create a directory, e.g. to simulate an existing target.
    pub fn seed_dir(&self, path: &Path) {
        let mut inner = self.inner.write().unwrap();
        inner.directories.insert(path.to_path_buf());
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(path: &Path) -> StackgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StackgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Parents must be created first, as on a real filesystem.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> StackgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/proj/backend/src")).unwrap();
        assert!(fs.exists(Path::new("/proj")));
        assert!(fs.exists(Path::new("/proj/backend")));
        assert!(fs.exists(Path::new("/proj/backend/src")));
    }

    #[test]
    fn write_without_parent_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/proj/file.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/proj")).unwrap();
        fs.write_file(Path::new("/proj/file.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/proj/file.txt")).unwrap(), "x");
    }

    #[test]
    fn remove_dir_all_takes_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/proj/backend")).unwrap();
        fs.write_file(Path::new("/proj/backend/a.txt"), "a").unwrap();
        fs.write_file(Path::new("/proj/b.txt"), "b").unwrap();

        fs.remove_dir_all(Path::new("/proj/backend")).unwrap();
        assert!(!fs.exists(Path::new("/proj/backend")));
        assert!(fs.read_file(Path::new("/proj/backend/a.txt")).is_none());
        assert!(fs.exists(Path::new("/proj/b.txt")));
    }
}
