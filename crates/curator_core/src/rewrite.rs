//! Classify-and-rewrite, and the restore-to-placeholder reset.
//!
//! Both operations visit documents one at a time and write each document at
//! most once. A run is not transactional: documents already written stay
//! written if a later one fails. Re-running is safe because values that are
//! already correct produce no write.

use crate::catalog::ImageAsset;
use crate::curator::{Category, Curator};
use crate::document::Document;
use crate::error::{CuratorError, Result};
use crate::field::{Declaration, FieldLookup};
use crate::fs::FileSystem;
use crate::report::{Outcome, RunEvent, RunReport};

pub struct Rewriter<'a, FS: FileSystem> {
    curator: &'a Curator,
    fs: &'a FS,
    dry_run: bool,
}

impl<'a, FS: FileSystem> Rewriter<'a, FS> {
    pub fn new(curator: &'a Curator, fs: &'a FS) -> Self {
        Self {
            curator,
            fs,
            dry_run: false,
        }
    }

    /// Report what would change without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reclassify every document in every category.
    pub fn update_all<O>(&self, observe: O) -> Result<RunReport>
    where
        O: FnMut(RunEvent<'_>),
    {
        self.curator.walk(
            self.fs,
            self.dry_run,
            |_, doc| self.update_document(doc).map(Some),
            observe,
        )
    }

    /// Reset every non-kept document to its category placeholder.
    pub fn restore_all<O>(&self, observe: O) -> Result<RunReport>
    where
        O: FnMut(RunEvent<'_>),
    {
        self.curator.walk(
            self.fs,
            self.dry_run,
            |category, doc| self.restore_document(doc, category).map(Some),
            observe,
        )
    }

    /// Reclassify one document.
    ///
    /// Keep-list and curated values are checked before any rule runs.
    pub fn update_document(&self, doc: &Document) -> Result<Outcome> {
        if self.curator.keep().contains(doc.file_name()) {
            return Ok(Outcome::Kept);
        }

        let current = match declaration(doc) {
            Ok(d) => d,
            Err(outcome) => return Ok(outcome),
        };

        if self.curator.is_curated(&current.value) {
            return Ok(Outcome::Curated {
                value: current.value.clone(),
            });
        }

        let target = self
            .curator
            .rules()
            .classify(&doc.body, doc.file_name())
            .clone();
        self.replace(doc, current, target)
    }

    /// Reset one document to `category`'s placeholder. No content inspection.
    pub fn restore_document(&self, doc: &Document, category: &Category) -> Result<Outcome> {
        if self.curator.keep().contains(doc.file_name()) {
            return Ok(Outcome::Kept);
        }

        let current = match declaration(doc) {
            Ok(d) => d,
            Err(outcome) => return Ok(outcome),
        };

        self.replace(doc, current, category.placeholder.clone())
    }

    fn replace(
        &self,
        doc: &Document,
        current: &Declaration,
        target: ImageAsset,
    ) -> Result<Outcome> {
        if current.value == target.as_str() {
            return Ok(Outcome::Unchanged);
        }

        let content = self
            .curator
            .field()
            .rewrite(&doc.body, current, target.as_str());

        if self.dry_run {
            log::debug!("dry run: not writing {}", doc.path.display());
        } else {
            self.fs
                .write_file(&doc.path, &content)
                .map_err(|e| CuratorError::FileWrite {
                    path: doc.path.clone(),
                    source: e,
                })?;
        }

        Ok(Outcome::Updated {
            from: current.value.clone(),
            to: target,
        })
    }
}

/// The single declaration to rewrite, or the outcome explaining why there is none.
fn declaration(doc: &Document) -> std::result::Result<&Declaration, Outcome> {
    match &doc.declared {
        FieldLookup::Declared(d) => Ok(d),
        FieldLookup::Absent => Err(Outcome::MissingField),
        FieldLookup::Duplicate { count, .. } => Err(Outcome::DuplicateField { count: *count }),
    }
}
