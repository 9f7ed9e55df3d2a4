/// Clap argument definitions
mod args;

/// `audit` command
mod audit;

/// `config` command
mod config;

/// `prompts` command
mod prompts;

/// `restore` command
mod restore;

/// `update` command
mod update;

/// Shared CLI utilities
mod util;

use clap::Parser;

use curator_core::fs::RealFileSystem;

pub use args::Cli;
use args::Commands;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Main entry point for the CLI
pub fn run_cli() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fs = RealFileSystem;

    let Some(config) = util::load_config(&fs, cli.config.as_deref(), cli.root) else {
        std::process::exit(1);
    };
    log::debug!("Content root: {}", config.root.display());

    if let Commands::Config = cli.command {
        if !config::handle_config(&config, cli.config.as_deref()) {
            std::process::exit(1);
        }
        return;
    }

    let Some(curator) = util::build_curator(&config) else {
        std::process::exit(1);
    };

    // Execute commands and track success
    let success = match cli.command {
        Commands::Update { dry_run } => update::handle_update(&curator, &fs, dry_run, cli.verbose),

        Commands::Restore { yes, dry_run } => {
            restore::handle_restore(&curator, &fs, yes, dry_run, cli.verbose)
        }

        Commands::Audit { json } => audit::handle_audit(&curator, &fs, json),

        Commands::Prompts { output, stdout } => {
            prompts::handle_prompts(&curator, &fs, output, stdout)
        }

        Commands::Config => true,
    };

    if !success {
        std::process::exit(1);
    }
}
