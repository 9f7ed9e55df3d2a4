//! Command-line argument structures and enums

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curator")]
#[command(version)]
#[command(about = "Classify and rewrite featuredImage front matter in content files", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the content root directory
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Show debug logging and unchanged files
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick an image for every document and rewrite its featuredImage line
    #[command(alias = "u")]
    Update {
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Reset every document not on the keep list to its category placeholder
    Restore {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// List documents that still show a placeholder or declare no image
    Audit {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an image-prompt worksheet for hotel documents
    Prompts {
        /// Worksheet path (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the worksheet instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
