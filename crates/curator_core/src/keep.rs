//! Documents exempt from automatic rewriting.

use std::collections::BTreeSet;

/// Filenames whose declared image was curated by hand.
///
/// Checked before any rule evaluation; membership never changes during a run.
#[derive(Debug, Clone, Default)]
pub struct KeepList {
    names: BTreeSet<String>,
}

impl KeepList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `file_name` (e.g. `old-naples.mdx`) is exempt.
    pub fn contains(&self, file_name: &str) -> bool {
        self.names.contains(file_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
