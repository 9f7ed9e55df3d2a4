//! Audit command handler

use curator_core::audit::Auditor;
use curator_core::curator::Curator;
use curator_core::fs::FileSystem;

use crate::cli::util::print_event;

/// Handle the audit command
/// Returns true on success, false on error
pub fn handle_audit<FS: FileSystem>(curator: &Curator, fs: &FS, json: bool) -> bool {
    let auditor = Auditor::new(curator, fs);

    let result = if json {
        auditor.run(|_| {})
    } else {
        for category in curator.categories() {
            println!("Scanning {}...", category.dir.display());
        }
        auditor.run(|event| print_event(event, false, false))
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            return false;
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Error serializing report: {}", e);
                return false;
            }
        }
    } else {
        println!("{} finding(s) in {} file(s)", report.files.len(), report.scanned);
    }

    true
}
