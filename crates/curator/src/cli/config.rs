//! Config command handler

use curator_core::config::CuratorConfig;
use std::path::Path;

/// Print the effective configuration
/// Returns true on success, false on error
pub fn handle_config(config: &CuratorConfig, explicit: Option<&Path>) -> bool {
    match explicit {
        Some(path) => println!("# Config file: {}", path.display()),
        None => match CuratorConfig::config_path() {
            Some(path) if path.exists() => println!("# Config file: {}", path.display()),
            Some(path) => println!(
                "# No config file at {}; showing built-in defaults",
                path.display()
            ),
            None => println!("# Built-in defaults"),
        },
    }

    match config.to_toml() {
        Ok(text) => {
            print!("{}", text);
            true
        }
        Err(e) => {
            eprintln!("✗ Error rendering config: {}", e);
            false
        }
    }
}
