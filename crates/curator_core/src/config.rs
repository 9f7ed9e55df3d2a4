//! Configuration for curator.
//!
//! [`CuratorConfig`] holds every static table a run needs: the categories to
//! scan, the asset catalog, the ordered rules, curated markers and the keep
//! list. The built-in [`Default`] reproduces the site's hand-tuned tables; a
//! TOML file (typically `~/.config/curator/config.toml`) may override any
//! top-level key.
//!
//! # Example
//!
//! ```toml
//! root = "content"
//! fallback = "sunset"
//! keep = ["old-naples.mdx"]
//!
//! [[rules]]
//! kind = "content"
//! needles = ["marco"]
//! asset = "marco"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CuratorError, Result};
use crate::fs::FileSystem;
use crate::rules::RuleKind;

/// A content directory and its generic placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Short name used in reports and by `prompts.category`
    pub name: String,
    /// Directory, relative to `root` unless absolute
    pub dir: PathBuf,
    /// Placeholder asset written by restore
    pub placeholder: String,
}

/// One classification rule as written in config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub kind: RuleKind,
    /// Substrings; the rule holds when any one is found
    pub needles: Vec<String>,
    /// Catalog key, or a literal path starting with `/`
    pub asset: String,
}

/// Settings for the hotel prompt worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Category whose documents get prompts
    pub category: String,
    /// Worksheet path, relative to the working directory
    pub output: PathBuf,
    /// Where generated images are expected to land
    pub image_dir: String,
    /// Used when a document declares no `area`
    pub default_area: String,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            category: "hotels".to_string(),
            output: PathBuf::from("IMAGE_PROMPTS_HOTELS.md"),
            image_dir: "public/images/hotels".to_string(),
            default_area: "Naples, FL".to_string(),
        }
    }
}

/// `CuratorConfig` is everything about a run that is not a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    /// Content root; category directories are resolved against it
    pub root: PathBuf,

    /// Document extension, without the dot
    pub extension: String,

    /// Front matter field holding the image path
    pub field: String,

    /// Catalog key (or literal path) used when no rule matches
    pub fallback: String,

    /// A declared value containing any of these is hand-picked and never reclassified
    pub curated_markers: Vec<String>,

    /// A declared value containing any of these is reported by audit
    pub placeholder_markers: Vec<String>,

    /// Filenames exempt from update and restore
    pub keep: Vec<String>,

    // Tables last so TOML output stays valid
    pub categories: Vec<CategoryConfig>,

    /// Named assets, in declaration order
    pub assets: IndexMap<String, String>,

    /// Ordered rules; filename rules run before content rules
    pub rules: Vec<RuleConfig>,

    pub prompts: PromptsConfig,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn rule(kind: RuleKind, needles: &[&str], asset: &str) -> RuleConfig {
    RuleConfig {
        kind,
        needles: strings(needles),
        asset: asset.to_string(),
    }
}

impl Default for CuratorConfig {
    fn default() -> Self {
        let assets: IndexMap<String, String> = [
            ("marco", "/images/placeholders/marco_island_tigertail_beach_aerial_4k.jpg"),
            ("golf", "/images/placeholders/naples-championship-golf-course.jpg"),
            ("beach_aerial", "/images/placeholders/naples_beach_aerial_4k.jpg"),
            ("pier", "/images/placeholders/naples_pier_sunny_winter_day_4k.jpg"),
            ("downtown_5th", "/images/placeholders/old_naples_5th_avenue_4k.jpg"),
            ("downtown_3rd", "/images/placeholders/naples_3rd_street_south_shopping_4k.png"),
            ("waterfront", "/images/placeholders/naples_tin_city_waterfront.jpg"),
            ("nature", "/images/placeholders/naples_clam_pass_boardwalk_4k.jpg"),
            ("resort_pool", "/images/where-to-stay/vanderbilt-beach-resort-pool.jpg"),
            ("sunset", "/images/placeholders/naples_pier_sunset_4k.jpg"),
            ("luxury_generic", "/images/placeholders/vanderbilt_beach_luxury_hotel_4k.jpg"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let rules = vec![
            rule(
                RuleKind::Filename,
                &["old-naples"],
                "/images/where-to-stay/old-naples-historic-cottage.jpg",
            ),
            rule(RuleKind::Filename, &["vanderbilt-beach"], "resort_pool"),
            rule(
                RuleKind::Filename,
                &["pelican-bay"],
                "/images/where-to-stay/pelican-bay-tram-boardwalk.jpg",
            ),
            rule(
                RuleKind::Filename,
                &["park-shore"],
                "/images/where-to-stay/park-shore-venetian-village.jpg",
            ),
            rule(RuleKind::Content, &["marco"], "marco"),
            rule(RuleKind::Content, &["golf"], "golf"),
            rule(RuleKind::Content, &["downtown"], "downtown_5th"),
            rule(RuleKind::Content, &["waterfront", "bay"], "waterfront"),
            rule(RuleKind::Content, &["beach"], "beach_aerial"),
            rule(RuleKind::Content, &["family"], "nature"),
        ];

        Self {
            root: PathBuf::from("content"),
            extension: "mdx".to_string(),
            field: "featuredImage".to_string(),
            categories: vec![
                CategoryConfig {
                    name: "hotels".to_string(),
                    dir: PathBuf::from("hotels"),
                    placeholder: "/images/placeholders/hotel.svg".to_string(),
                },
                CategoryConfig {
                    name: "where-to-stay".to_string(),
                    dir: PathBuf::from("where-to-stay"),
                    placeholder: "/images/placeholders/where-to-stay.svg".to_string(),
                },
            ],
            assets,
            rules,
            fallback: "sunset".to_string(),
            curated_markers: strings(&[
                "4k",
                "dramatic",
                "historic-cottage",
                "resort-pool",
                "tram-boardwalk",
                "venetian-village",
            ]),
            placeholder_markers: strings(&["placeholders", "svg"]),
            keep: strings(&[
                // Hotels
                "ritz-carlton-naples.mdx",
                "laplaya-beach-golf.mdx",
                "inn-on-fifth.mdx",
                "naples-grande.mdx",
                "bellasera-resort.mdx",
                "edgewater-beach-hotel.mdx",
                "ritz-carlton-tiburon.mdx",
                "ac-hotel-naples.mdx",
                // Neighborhoods
                "marco-island.mdx",
                "pelican-bay.mdx",
                "old-naples.mdx",
                "vanderbilt-beach.mdx",
                "park-shore.mdx",
            ]),
            prompts: PromptsConfig::default(),
        }
    }
}

impl CuratorConfig {
    /// Parse a TOML document. Missing keys take their built-in defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load config from a specific path.
    pub fn load_from<FS: FileSystem>(fs: &FS, path: &Path) -> Result<Self> {
        let contents = fs
            .read_to_string(path)
            .map_err(|e| CuratorError::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::from_toml(&contents)
    }

    /// Directory of a category after resolving it against `root`.
    pub fn category_dir(&self, category: &CategoryConfig) -> PathBuf {
        self.root.join(&category.dir)
    }
}

// ============================================================================
// Native-only implementation (not available in WASM)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl CuratorConfig {
    /// Get the config file path (~/.config/curator/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("curator").join("config.toml"))
    }

    /// Load config from the default location, or the built-in defaults if there is none.
    pub fn load<FS: FileSystem>(fs: &FS) -> Result<Self> {
        if let Some(path) = Self::config_path()
            && fs.exists(&path)
        {
            log::debug!("Loading config from {}", path.display());
            return Self::load_from(fs, &path);
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockFileSystem;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CuratorConfig::from_toml("root = \"site/content\"\nkeep = []\n").unwrap();
        assert_eq!(config.root, PathBuf::from("site/content"));
        assert!(config.keep.is_empty());
        assert_eq!(config.field, "featuredImage");
        assert_eq!(config.rules.len(), 10);
        assert_eq!(config.prompts.default_area, "Naples, FL");
    }

    #[test]
    fn test_rules_from_toml() {
        let toml = r#"
fallback = "/images/default.jpg"

[[rules]]
kind = "filename"
needles = ["harbor"]
asset = "/images/harbor.jpg"

[[rules]]
kind = "content"
needles = ["spa", "wellness"]
asset = "nature"
"#;
        let config = CuratorConfig::from_toml(toml).unwrap();
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0].kind, RuleKind::Filename);
        assert_eq!(config.rules[1].needles, vec!["spa", "wellness"]);
        assert_eq!(config.fallback, "/images/default.jpg");
        // untouched tables keep their defaults
        assert!(config.assets.contains_key("nature"));
    }

    #[test]
    fn test_bad_rule_kind_is_parse_error() {
        let toml = "[[rules]]\nkind = \"title\"\nneedles = [\"x\"]\nasset = \"golf\"\n";
        assert!(matches!(
            CuratorConfig::from_toml(toml),
            Err(CuratorError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = CuratorConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(CuratorConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_missing_file() {
        let fs = MockFileSystem::new();
        let err = CuratorConfig::load_from(&fs, Path::new("nope.toml")).unwrap_err();
        assert!(matches!(err, CuratorError::ConfigRead { .. }));
    }

    #[test]
    fn test_category_dir_is_rooted() {
        let config = CuratorConfig::default();
        assert_eq!(
            config.category_dir(&config.categories[0]),
            PathBuf::from("content/hotels")
        );
    }
}
