//! Prompts command handler

use curator_core::curator::Curator;
use curator_core::fs::FileSystem;
use curator_core::prompts::PromptWriter;
use std::path::PathBuf;

/// Handle the prompts command
/// Returns true on success, false on error
pub fn handle_prompts<FS: FileSystem>(
    curator: &Curator,
    fs: &FS,
    output: Option<PathBuf>,
    stdout: bool,
) -> bool {
    let writer = PromptWriter::new(curator, fs);

    let sheet = match writer.generate() {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            return false;
        }
    };

    for (path, err) in &sheet.failures {
        eprintln!("⚠ Error parsing {}: {}", path.display(), err);
    }

    if stdout {
        print!("{}", sheet.render());
        return true;
    }

    let output = output.unwrap_or_else(|| curator.prompts().output.clone());
    match writer.write(&sheet, &output) {
        Ok(()) => {
            println!(
                "✓ Generated prompts for {} hotel(s) in {}",
                sheet.entries.len(),
                output.display()
            );
            true
        }
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            false
        }
    }
}
