//! Read-only scan for documents still showing a generic image.

use crate::curator::Curator;
use crate::error::Result;
use crate::field::FieldLookup;
use crate::fs::FileSystem;
use crate::report::{Outcome, RunEvent, RunReport};

/// Reports placeholder-looking values, missing fields and duplicates. Never writes.
pub struct Auditor<'a, FS: FileSystem> {
    curator: &'a Curator,
    fs: &'a FS,
}

impl<'a, FS: FileSystem> Auditor<'a, FS> {
    pub fn new(curator: &'a Curator, fs: &'a FS) -> Self {
        Self { curator, fs }
    }

    pub fn run<O>(&self, observe: O) -> Result<RunReport>
    where
        O: FnMut(RunEvent<'_>),
    {
        self.curator.walk(
            self.fs,
            true,
            |_, doc| {
                Ok(match &doc.declared {
                    FieldLookup::Absent => Some(Outcome::MissingField),
                    FieldLookup::Duplicate { count, .. } => {
                        Some(Outcome::DuplicateField { count: *count })
                    }
                    FieldLookup::Declared(d) if self.curator.is_placeholder(&d.value) => {
                        Some(Outcome::Placeholder {
                            value: d.value.clone(),
                        })
                    }
                    FieldLookup::Declared(_) => None,
                })
            },
            observe,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CuratorConfig;
    use crate::test_utils::MockFileSystem;
    use std::path::Path;

    #[test]
    fn test_audit_findings() {
        let fs = MockFileSystem::new()
            .with_file(
                "content/hotels/a.mdx",
                "featuredImage: '/images/placeholders/hotel.svg'\n",
            )
            .with_file("content/hotels/b.mdx", "featuredImage: /images/hotels/b.jpg\n")
            .with_file("content/hotels/c.mdx", "title: C\n")
            .with_file(
                "content/where-to-stay/d.mdx",
                "featuredImage: /images/placeholders/naples_pier_sunset_4k.jpg\n",
            );
        let curator = Curator::from_config(&CuratorConfig::default()).unwrap();
        let report = Auditor::new(&curator, &fs).run(|_| {}).unwrap();

        assert_eq!(report.scanned, 4);
        assert_eq!(report.files.len(), 3);
        assert_eq!(
            report.outcome_for(Path::new("content/hotels/a.mdx")),
            Some(&Outcome::Placeholder {
                value: "/images/placeholders/hotel.svg".to_string()
            })
        );
        assert_eq!(report.outcome_for(Path::new("content/hotels/b.mdx")), None);
        assert_eq!(
            report.outcome_for(Path::new("content/hotels/c.mdx")),
            Some(&Outcome::MissingField)
        );
        // anything under /placeholders/ counts, even a 4k shot
        assert!(matches!(
            report.outcome_for(Path::new("content/where-to-stay/d.mdx")),
            Some(Outcome::Placeholder { .. })
        ));
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_audit_reports_missing_directories() {
        let fs = MockFileSystem::new();
        let curator = Curator::from_config(&CuratorConfig::default()).unwrap();
        let report = Auditor::new(&curator, &fs).run(|_| {}).unwrap();
        assert_eq!(report.missing_dirs.len(), 2);
        assert_eq!(report.scanned, 0);
    }
}
