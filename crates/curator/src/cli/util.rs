//! Shared utilities for CLI commands

use curator_core::config::CuratorConfig;
use curator_core::curator::Curator;
use curator_core::fs::FileSystem;
use curator_core::report::{FileReport, Outcome, RunEvent, RunReport};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Load config from `path`, or the default location, applying a root override.
/// Prints the error and returns None on failure.
pub fn load_config<FS: FileSystem>(
    fs: &FS,
    path: Option<&Path>,
    root: Option<PathBuf>,
) -> Option<CuratorConfig> {
    let loaded = match path {
        Some(p) => CuratorConfig::load_from(fs, p),
        None => CuratorConfig::load(fs),
    };

    match loaded {
        Ok(mut config) => {
            if let Some(root) = root {
                config.root = root;
            }
            Some(config)
        }
        Err(e) => {
            eprintln!("✗ Error loading config: {}", e);
            None
        }
    }
}

/// Compile config into a run context. Prints the error and returns None on failure.
pub fn build_curator(config: &CuratorConfig) -> Option<Curator> {
    match Curator::from_config(config) {
        Ok(curator) => Some(curator),
        Err(e) => {
            eprintln!("✗ Invalid config: {}", e);
            None
        }
    }
}

fn file_label(report: &FileReport) -> String {
    report
        .path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| report.path.display().to_string())
}

/// One status line for a file, or None if it is only shown in verbose mode.
pub fn describe(report: &FileReport, dry_run: bool, verbose: bool) -> Option<String> {
    let name = file_label(report);
    let line = match &report.outcome {
        Outcome::Updated { from, to } if dry_run => {
            format!("Would update {}: {} -> {}", name, from, to)
        }
        Outcome::Updated { to, .. } => format!("✓ Updated {} -> {}", name, to),
        Outcome::Unchanged if verbose => format!("  {} already up to date", name),
        Outcome::Curated { value } if verbose => format!("  Skipped {} (curated: {})", name, value),
        Outcome::Kept if verbose => format!("  Skipped {} (keep list)", name),
        Outcome::Unchanged | Outcome::Curated { .. } | Outcome::Kept => return None,
        Outcome::MissingField => format!("⚠ [NO IMAGE] {}", name),
        Outcome::DuplicateField { count } => format!(
            "⚠ {} declares the image field {} times; left unchanged",
            name, count
        ),
        Outcome::Placeholder { value } => format!("[PLACEHOLDER] {} -> {}", name, value),
    };
    Some(line)
}

/// Print progress for a run as it happens.
pub fn print_event(event: RunEvent<'_>, dry_run: bool, verbose: bool) {
    match event {
        RunEvent::MissingDirectory { category, dir } => {
            eprintln!("⚠ Directory not found ({}): {}", category, dir.display());
        }
        RunEvent::File(report) => {
            if let Some(line) = describe(report, dry_run, verbose) {
                println!("{}", line);
            }
        }
    }
}

/// Print the closing totals of a rewriting run.
pub fn print_summary(report: &RunReport, verb: &str) {
    let written = report.written();
    if report.dry_run {
        println!("Would have {} {} of {} file(s)", verb, written, report.scanned);
    } else {
        println!("Total files {}: {} of {}", verb, written, report.scanned);
    }
}

/// Ask a yes/no question. Anything but "y"/"yes" counts as no.
pub fn prompt_confirm(message: &str) -> bool {
    print!("{} [y/N] ", message);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
