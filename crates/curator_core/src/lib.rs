#![doc = include_str!("../README.md")]

/// Audit (report placeholder and missing images)
pub mod audit;

/// Image asset identifiers and the named catalog
pub mod catalog;

/// Configuration options
pub mod config;

/// Compiled run context
pub mod curator;

/// Content documents
pub mod document;

/// Error (common error types)
pub mod error;

/// Single-line declared field reader/writer
pub mod field;

/// Structured front matter parsing
pub mod frontmatter;

/// Filesystem abstraction
pub mod fs;

/// Keep list of hand-curated documents
pub mod keep;

/// Hotel image-prompt worksheet
pub mod prompts;

/// Per-file outcomes and run summaries
pub mod report;

/// Update (classify and rewrite) and restore-to-placeholder
pub mod rewrite;

/// Ordered classification rules
pub mod rules;

/// Candidate document discovery
pub mod scanner;

#[cfg(test)]
pub mod test_utils;
