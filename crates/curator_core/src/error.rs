use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for curator operations
#[derive(Debug, Error)]
pub enum CuratorError {
    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory not found: '{0}'")]
    DirectoryNotFound(PathBuf),

    // Frontmatter errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No frontmatter found in '{0}'")]
    NoFrontmatter(PathBuf),

    #[error("Invalid field name '{0}': expected letters, digits, '_' or '-'")]
    InvalidField(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    // Config errors
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Rule {rule} references unknown asset '{key}'")]
    UnknownAsset { rule: usize, key: String },

    #[error("Fallback references unknown asset '{0}'")]
    UnknownFallback(String),

    #[error("Rule {0} has no needles")]
    EmptyRule(usize),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

/// Result type alias for curator operations
pub type Result<T> = std::result::Result<T, CuratorError>;
