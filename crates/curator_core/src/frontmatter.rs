//! Structured front matter parsing.
//!
//! Splits a document into its YAML front matter block and body. Used by the
//! prompt worksheet, which needs several typed properties at once. The
//! single-field rewrite path does not go through here; see [`crate::field`].

use indexmap::IndexMap;
use serde_yaml::Value;
use std::path::PathBuf;

use crate::error::{CuratorError, Result};

/// Front matter of one document as an ordered map.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    properties: IndexMap<String, Value>,
}

/// Result of parsing a document with front matter.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// The parsed front matter.
    pub frontmatter: FrontMatter,
    /// The body content after the closing delimiter.
    pub body: String,
}

/// Locate the front matter block.
///
/// Returns the YAML source and the byte offset where the body starts, or
/// `None` when the content does not open with `---` or never closes it.
fn split(content: &str) -> Option<(&str, usize)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;
    let opener = content.len() - rest.len();

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            return Some((yaml, opener + offset + line.len()));
        }
        offset += line.len();
    }
    None
}

/// Parse front matter and body from document content.
///
/// Returns `Err(NoFrontmatter)` if the content has no delimited block.
pub fn parse(content: &str) -> Result<ParsedFile> {
    let (yaml, body_start) =
        split(content).ok_or_else(|| CuratorError::NoFrontmatter(PathBuf::new()))?;

    let properties: IndexMap<String, Value> = if yaml.trim().is_empty() {
        IndexMap::new()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(ParsedFile {
        frontmatter: FrontMatter { properties },
        body: content[body_start..].to_string(),
    })
}

/// Parse front matter and body, returning empty front matter if none exists.
///
/// Unlike [`parse`], a document without a delimited block is not an error:
/// the whole content becomes the body.
pub fn parse_or_empty(content: &str) -> Result<ParsedFile> {
    match parse(content) {
        Err(CuratorError::NoFrontmatter(_)) => Ok(ParsedFile {
            frontmatter: FrontMatter::default(),
            body: content.to_string(),
        }),
        other => other,
    }
}

/// Extract only the body from content, stripping front matter.
///
/// If no front matter exists, returns the content unchanged.
pub fn extract_body(content: &str) -> &str {
    match split(content) {
        Some((_, body_start)) => &content[body_start..],
        None => content,
    }
}

impl FrontMatter {
    /// Get a string property, treating empty strings as absent.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Get an array property item by item, keeping positions.
    ///
    /// Scalars are rendered as text. Nulls, empty strings and nested values
    /// come back as `None` so later items do not shift.
    pub fn get_scalar_array(&self, key: &str) -> Vec<Option<String>> {
        match self.properties.get(key) {
            Some(Value::Sequence(seq)) => seq.iter().map(scalar_text).collect(),
            _ => Vec::new(),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
