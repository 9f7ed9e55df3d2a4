//! Per-file outcomes and run summaries.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::catalog::ImageAsset;

/// What happened to one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Declared value replaced (or would be, in a dry run).
    Updated { from: String, to: ImageAsset },
    /// Declared value already equals the target.
    Unchanged,
    /// Declared value carries a curated marker; left alone.
    Curated { value: String },
    /// File name is on the keep list; left alone.
    Kept,
    /// No declaration line.
    MissingField,
    /// More than one declaration line; left alone.
    DuplicateField { count: usize },
    /// Declared value looks like a generic placeholder (audit only).
    Placeholder { value: String },
}

impl Outcome {
    pub fn is_write(&self) -> bool {
        matches!(self, Outcome::Updated { .. })
    }
}

/// Outcome for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub category: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Progress notification handed to observers while a run is in flight.
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    MissingDirectory { category: &'a str, dir: &'a Path },
    File(&'a FileReport),
}

/// Everything a run did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    /// Documents read
    pub scanned: usize,
    pub missing_dirs: Vec<PathBuf>,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Documents written (or that would be written in a dry run).
    pub fn written(&self) -> usize {
        self.count(Outcome::is_write)
    }

    pub fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    pub fn outcome_for(&self, path: &Path) -> Option<&Outcome> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| &f.outcome)
    }

    pub(crate) fn record_missing<O>(&mut self, category: &str, dir: &Path, observe: &mut O)
    where
        O: FnMut(RunEvent<'_>),
    {
        observe(RunEvent::MissingDirectory { category, dir });
        self.missing_dirs.push(dir.to_path_buf());
    }

    pub(crate) fn record<O>(&mut self, report: FileReport, observe: &mut O)
    where
        O: FnMut(RunEvent<'_>),
    {
        observe(RunEvent::File(&report));
        self.files.push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(path: &str, outcome: Outcome) -> FileReport {
        FileReport {
            category: "hotels".to_string(),
            path: PathBuf::from(path),
            outcome,
        }
    }

    #[test]
    fn test_counts() {
        let mut run = RunReport::new(false);
        let mut seen = 0;
        let mut observe = |_: RunEvent<'_>| seen += 1;
        run.record(
            report(
                "a.mdx",
                Outcome::Updated {
                    from: "/old.svg".to_string(),
                    to: "/new.jpg".into(),
                },
            ),
            &mut observe,
        );
        run.record(report("b.mdx", Outcome::Unchanged), &mut observe);
        run.record(report("c.mdx", Outcome::Kept), &mut observe);
        run.record_missing("where-to-stay", Path::new("content/where-to-stay"), &mut observe);

        assert_eq!(seen, 4);
        assert_eq!(run.written(), 1);
        assert_eq!(run.count(|o| matches!(o, Outcome::Kept)), 1);
        assert_eq!(run.outcome_for(Path::new("b.mdx")), Some(&Outcome::Unchanged));
        assert_eq!(run.missing_dirs, vec![PathBuf::from("content/where-to-stay")]);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report(
            "a.mdx",
            Outcome::Placeholder {
                value: "/images/placeholders/hotel.svg".to_string(),
            },
        ))
        .unwrap();
        assert_eq!(json["status"], "placeholder");
        assert_eq!(json["value"], "/images/placeholders/hotel.svg");
        assert_eq!(json["category"], "hotels");
    }
}
