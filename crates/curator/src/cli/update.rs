//! Update command handler

use curator_core::curator::Curator;
use curator_core::fs::FileSystem;
use curator_core::rewrite::Rewriter;

use crate::cli::util::{print_event, print_summary};

/// Handle the update command
/// Returns true on success, false on error
pub fn handle_update<FS: FileSystem>(
    curator: &Curator,
    fs: &FS,
    dry_run: bool,
    verbose: bool,
) -> bool {
    let rewriter = Rewriter::new(curator, fs).dry_run(dry_run);

    match rewriter.update_all(|event| print_event(event, dry_run, verbose)) {
        Ok(report) => {
            print_summary(&report, "updated");
            true
        }
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            false
        }
    }
}
