//! The compiled, read-only context shared by every operation of a run.
//!
//! [`Curator::from_config`] validates a [`CuratorConfig`] once (asset keys,
//! rule needles, field name) and turns it into the structures the classifier
//! and rewriter consult. Nothing in a `Curator` changes while documents are
//! processed.

use std::path::{Path, PathBuf};

use crate::catalog::{AssetCatalog, ImageAsset};
use crate::config::{CuratorConfig, PromptsConfig};
use crate::document::Document;
use crate::error::{CuratorError, Result};
use crate::field::DeclaredField;
use crate::fs::FileSystem;
use crate::keep::KeepList;
use crate::report::{FileReport, Outcome, RunEvent, RunReport};
use crate::rules::{Rule, RuleTable};
use crate::scanner::{DirectoryScan, Scanner};

/// A content directory with its generic placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub dir: PathBuf,
    pub placeholder: ImageAsset,
}

#[derive(Debug, Clone)]
pub struct Curator {
    field: DeclaredField,
    extension: String,
    categories: Vec<Category>,
    rules: RuleTable,
    keep: KeepList,
    curated_markers: Vec<String>,
    placeholder_markers: Vec<String>,
    prompts: PromptsConfig,
}

impl Curator {
    pub fn from_config(config: &CuratorConfig) -> Result<Self> {
        let field = DeclaredField::new(&config.field)?;
        let catalog = AssetCatalog::new(&config.assets);

        let mut rules = Vec::with_capacity(config.rules.len());
        for (idx, rule) in config.rules.iter().enumerate() {
            // Reported 1-based, matching the order rules appear in config
            let number = idx + 1;
            if rule.needles.is_empty() || rule.needles.iter().any(|n| n.is_empty()) {
                return Err(CuratorError::EmptyRule(number));
            }
            let asset = catalog
                .resolve(&rule.asset)
                .ok_or_else(|| CuratorError::UnknownAsset {
                    rule: number,
                    key: rule.asset.clone(),
                })?;
            rules.push(Rule::new(rule.kind, rule.needles.iter().cloned(), asset));
        }

        let fallback = catalog
            .resolve(&config.fallback)
            .ok_or_else(|| CuratorError::UnknownFallback(config.fallback.clone()))?;

        let categories = config
            .categories
            .iter()
            .map(|c| Category {
                name: c.name.clone(),
                dir: config.category_dir(c),
                placeholder: ImageAsset::new(c.placeholder.as_str()),
            })
            .collect();

        Ok(Self {
            field,
            extension: config.extension.trim_start_matches('.').to_string(),
            categories,
            rules: RuleTable::new(rules, fallback),
            keep: KeepList::new(config.keep.iter().cloned()),
            curated_markers: config.curated_markers.clone(),
            placeholder_markers: config.placeholder_markers.clone(),
            prompts: config.prompts.clone(),
        })
    }

    pub fn field(&self) -> &DeclaredField {
        &self.field
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CuratorError::UnknownCategory(name.to_string()))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn keep(&self) -> &KeepList {
        &self.keep
    }

    pub fn prompts(&self) -> &PromptsConfig {
        &self.prompts
    }

    /// Whether a declared value is a hand-picked asset that must not be reclassified.
    pub fn is_curated(&self, value: &str) -> bool {
        self.curated_markers.iter().any(|m| value.contains(m.as_str()))
    }

    /// Whether a declared value looks like a generic placeholder.
    pub fn is_placeholder(&self, value: &str) -> bool {
        self.placeholder_markers
            .iter()
            .any(|m| value.contains(m.as_str()))
    }

    pub fn scan<FS: FileSystem>(&self, fs: &FS, dir: &Path) -> Result<DirectoryScan> {
        Scanner::new(fs, &self.extension).scan(dir)
    }

    pub fn load<FS: FileSystem>(&self, fs: &FS, path: &Path) -> Result<Document> {
        Document::load(fs, path, &self.field)
    }

    /// Visit every document of every category, one at a time, in order.
    ///
    /// `visit` returns `None` for documents that need no report line. Missing
    /// directories are recorded and skipped; read errors end the walk.
    pub(crate) fn walk<FS, V, O>(
        &self,
        fs: &FS,
        dry_run: bool,
        mut visit: V,
        mut observe: O,
    ) -> Result<RunReport>
    where
        FS: FileSystem,
        V: FnMut(&Category, &Document) -> Result<Option<Outcome>>,
        O: FnMut(RunEvent<'_>),
    {
        let mut report = RunReport::new(dry_run);

        for category in &self.categories {
            let paths = match self.scan(fs, &category.dir)? {
                DirectoryScan::NotFound(dir) => {
                    report.record_missing(&category.name, &dir, &mut observe);
                    continue;
                }
                DirectoryScan::Found(paths) => paths,
            };

            for path in paths {
                let doc = self.load(fs, &path)?;
                report.scanned += 1;
                if let Some(outcome) = visit(category, &doc)? {
                    report.record(
                        FileReport {
                            category: category.name.clone(),
                            path,
                            outcome,
                        },
                        &mut observe,
                    );
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::rules::RuleKind;
    use crate::test_utils::MockFileSystem;

    #[test]
    fn test_default_config_compiles() {
        let curator = Curator::from_config(&CuratorConfig::default()).unwrap();
        assert_eq!(curator.rules().rules().len(), 10);
        assert_eq!(
            curator.rules().fallback().as_str(),
            "/images/placeholders/naples_pier_sunset_4k.jpg"
        );
        assert_eq!(curator.categories().len(), 2);
        assert!(curator.keep().contains("old-naples.mdx"));
    }

    #[test]
    fn test_unknown_asset_key() {
        let mut config = CuratorConfig::default();
        config.rules.push(RuleConfig {
            kind: RuleKind::Content,
            needles: vec!["spa".to_string()],
            asset: "spa_day".to_string(),
        });
        match Curator::from_config(&config) {
            Err(CuratorError::UnknownAsset { rule, key }) => {
                assert_eq!(rule, 11);
                assert_eq!(key, "spa_day");
            }
            other => panic!("expected UnknownAsset, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_needle_rejected() {
        let mut config = CuratorConfig::default();
        config.rules[0].needles = vec![String::new()];
        assert!(matches!(
            Curator::from_config(&config),
            Err(CuratorError::EmptyRule(1))
        ));
    }

    #[test]
    fn test_unknown_fallback() {
        let config = CuratorConfig {
            fallback: "dusk".to_string(),
            ..CuratorConfig::default()
        };
        assert!(matches!(
            Curator::from_config(&config),
            Err(CuratorError::UnknownFallback(_))
        ));
    }

    #[test]
    fn test_markers() {
        let curator = Curator::from_config(&CuratorConfig::default()).unwrap();
        assert!(curator.is_curated("/images/placeholders/naples_beach_aerial_4k.jpg"));
        assert!(curator.is_curated("/images/where-to-stay/park-shore-venetian-village.jpg"));
        assert!(!curator.is_curated("/images/placeholders/hotel.svg"));
        assert!(curator.is_placeholder("/images/placeholders/hotel.svg"));
        assert!(curator.is_placeholder("/images/logo.svg"));
        assert!(!curator.is_placeholder("/images/hotels/inn.jpg"));
    }

    #[test]
    fn test_walk_skips_missing_directory() {
        let fs = MockFileSystem::new()
            .with_file("content/hotels/a.mdx", "featuredImage: /a.jpg\n")
            .with_file("content/hotels/b.mdx", "featuredImage: /b.jpg\n");
        let curator = Curator::from_config(&CuratorConfig::default()).unwrap();

        let mut missing = Vec::new();
        let report = curator
            .walk(
                &fs,
                false,
                |_, doc| Ok((doc.file_name() == "b.mdx").then_some(Outcome::Unchanged)),
                |event| {
                    if let RunEvent::MissingDirectory { dir, .. } = event {
                        missing.push(dir.to_path_buf());
                    }
                },
            )
            .unwrap();

        assert_eq!(report.scanned, 2);
        assert_eq!(report.files.len(), 1);
        assert_eq!(missing, vec![PathBuf::from("content/where-to-stay")]);
        assert_eq!(report.missing_dirs, missing);
    }
}
