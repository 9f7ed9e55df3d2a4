//! Candidate document discovery.

use std::path::{Path, PathBuf};

use crate::error::{CuratorError, Result};
use crate::fs::FileSystem;

/// Result of scanning one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryScan {
    /// The directory does not exist (or is not a directory). Not fatal.
    NotFound(PathBuf),
    /// Documents with the recognized extension, sorted by path.
    Found(Vec<PathBuf>),
}

impl DirectoryScan {
    pub fn is_found(&self) -> bool {
        matches!(self, DirectoryScan::Found(_))
    }
}

impl IntoIterator for DirectoryScan {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    /// A missing directory yields nothing.
    fn into_iter(self) -> Self::IntoIter {
        match self {
            DirectoryScan::NotFound(_) => Vec::new().into_iter(),
            DirectoryScan::Found(paths) => paths.into_iter(),
        }
    }
}

/// Lists documents with a given extension.
pub struct Scanner<'a, FS: FileSystem> {
    fs: &'a FS,
    extension: &'a str,
}

impl<'a, FS: FileSystem> Scanner<'a, FS> {
    pub fn new(fs: &'a FS, extension: &'a str) -> Self {
        Self { fs, extension }
    }

    pub fn scan(&self, dir: &Path) -> Result<DirectoryScan> {
        if !self.fs.is_dir(dir) {
            log::warn!("Directory not found: {}", dir.display());
            return Ok(DirectoryScan::NotFound(dir.to_path_buf()));
        }

        let documents = self
            .fs
            .list_files_with_extension(dir, self.extension)
            .map_err(|e| CuratorError::FileRead {
                path: dir.to_path_buf(),
                source: e,
            })?;
        log::debug!("{}: {} candidate(s)", dir.display(), documents.len());
        Ok(DirectoryScan::Found(documents))
    }
}
