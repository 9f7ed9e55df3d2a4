//! Image asset identifiers and the named catalog rules draw from.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Opaque reference to an existing media asset (a site-relative path).
///
/// Assets are never created or checked on disk; they are plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageAsset(String);

impl ImageAsset {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageAsset {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Named assets available to rules, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: IndexMap<String, ImageAsset>,
}

impl AssetCatalog {
    pub fn new(assets: &IndexMap<String, String>) -> Self {
        Self {
            assets: assets
                .iter()
                .map(|(key, path)| (key.clone(), ImageAsset::new(path.as_str())))
                .collect(),
        }
    }

    /// Look up an asset by catalog key.
    pub fn get(&self, key: &str) -> Option<&ImageAsset> {
        self.assets.get(key)
    }

    /// Resolve a rule target: a catalog key, or a literal site path starting with `/`.
    pub fn resolve(&self, target: &str) -> Option<ImageAsset> {
        match self.get(target) {
            Some(asset) => Some(asset.clone()),
            None if target.starts_with('/') => Some(ImageAsset::new(target)),
            None => None,
        }
    }
}
