//! Restore command handler

use curator_core::curator::Curator;
use curator_core::fs::FileSystem;
use curator_core::rewrite::Rewriter;

use crate::cli::util::{print_event, print_summary, prompt_confirm};

/// Handle the restore command
/// Returns true on success, false on error
pub fn handle_restore<FS: FileSystem>(
    curator: &Curator,
    fs: &FS,
    yes: bool,
    dry_run: bool,
    verbose: bool,
) -> bool {
    if !yes && !dry_run {
        println!(
            "This resets '{}' to the category placeholder in every document",
            curator.field().name()
        );
        if curator.keep().is_empty() {
            println!("The keep list is empty. Earlier image choices are lost.");
        } else {
            println!(
                "except the {} on the keep list. Earlier image choices are lost.",
                curator.keep().len()
            );
        }
        if !prompt_confirm("Proceed?") {
            println!("Restore cancelled.");
            return true; // User cancelled, not an error
        }
    }

    let rewriter = Rewriter::new(curator, fs).dry_run(dry_run);

    match rewriter.restore_all(|event| print_event(event, dry_run, verbose)) {
        Ok(report) => {
            print_summary(&report, "restored");
            true
        }
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            false
        }
    }
}
