//! A content document as seen by one run.

use std::path::{Path, PathBuf};

use crate::error::{CuratorError, Result};
use crate::field::{DeclaredField, FieldLookup};
use crate::fs::FileSystem;

/// One document: identity, full text, and what it declares for the image field.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub body: String,
    pub declared: FieldLookup,
    file_name: String,
}

impl Document {
    /// Build a document from text already in memory.
    pub fn new(path: impl Into<PathBuf>, body: String, field: &DeclaredField) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();
        let declared = field.read(&body);
        Self {
            path,
            body,
            declared,
            file_name,
        }
    }

    /// Read a document from the filesystem.
    pub fn load<FS: FileSystem>(fs: &FS, path: &Path, field: &DeclaredField) -> Result<Self> {
        let body = fs
            .read_to_string(path)
            .map_err(|e| CuratorError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self::new(path, body, field))
    }

    /// Bare file name, e.g. `old-naples.mdx`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// First declared image value, if any.
    pub fn declared_image(&self) -> Option<&str> {
        self.declared.first_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockFileSystem;

    #[test]
    fn test_load_reads_declared_image() {
        let fs = MockFileSystem::new().with_file(
            "content/hotels/inn.mdx",
            "---\nfeaturedImage: '/images/inn.jpg'\n---\nBody",
        );
        let field = DeclaredField::new("featuredImage").unwrap();
        let doc = Document::load(&fs, Path::new("content/hotels/inn.mdx"), &field).unwrap();
        assert_eq!(doc.file_name(), "inn.mdx");
        assert_eq!(doc.declared_image(), Some("/images/inn.jpg"));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let fs = MockFileSystem::new();
        let field = DeclaredField::new("featuredImage").unwrap();
        let err = Document::load(&fs, Path::new("gone.mdx"), &field).unwrap_err();
        assert!(matches!(err, CuratorError::FileRead { .. }));
    }
}
