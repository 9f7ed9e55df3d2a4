//! Filesystem abstraction module.
//!
//! The [`FileSystem`] trait keeps document access swappable: the CLI uses
//! [`RealFileSystem`], unit tests use an in-memory mock.

#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(not(target_arch = "wasm32"))]
pub use native::RealFileSystem;

use std::io::Result;
use std::path::{Path, PathBuf};

/// Abstraction over the handful of filesystem operations a run needs.
pub trait FileSystem {
    /// Reads the whole document
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Overwrites a file with new content
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Lists the direct entries of a directory (not recursive)
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Checks if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Checks if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Lists the files in `dir` whose extension equals `extension`, sorted by path.
    fn list_files_with_extension(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = self
            .list_files(dir)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .filter(|p| !self.is_dir(p))
            .collect();
        files.sort();
        Ok(files)
    }
}

// Blanket implementation for references to FileSystem
impl<T: FileSystem> FileSystem for &T {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        (*self).read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        (*self).write_file(path, content)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        (*self).list_files(dir)
    }

    fn exists(&self, path: &Path) -> bool {
        (*self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (*self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        (*self).create_dir_all(path)
    }
}
