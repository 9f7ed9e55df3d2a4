//! Image-prompt worksheet for hotel documents.
//!
//! Builds one text-to-image prompt per document from its structured front
//! matter (`hotelName`/`title`, `area`, `featuredImageAlt`/`description`,
//! `amenities`) and renders them as a markdown checklist for later generation.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::curator::Curator;
use crate::error::{CuratorError, Result};
use crate::frontmatter::{self, FrontMatter};
use crate::fs::FileSystem;
use crate::scanner::DirectoryScan;

/// Prompt for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelPrompt {
    pub slug: String,
    pub file: PathBuf,
    pub proposed_image: String,
    pub prompt: String,
}

/// All prompts for a category, plus documents whose front matter is invalid.
#[derive(Debug, Clone, Default)]
pub struct PromptSheet {
    pub entries: Vec<HotelPrompt>,
    pub failures: Vec<(PathBuf, String)>,
}

impl PromptSheet {
    /// Render the worksheet as markdown.
    pub fn render(&self) -> String {
        let mut out = String::from(
            "# Hotel Image Prompts\n\nUse these prompts to generate images later.\n\n",
        );
        for entry in &self.entries {
            // Writing to a String cannot fail
            let _ = write!(
                out,
                "## {}\n- **File**: `{}`\n- **Proposed Image**: `{}`\n- **Prompt**: {}\n\n",
                entry.slug,
                entry.file.display(),
                entry.proposed_image,
                entry.prompt
            );
        }
        out
    }
}

/// Compose the prompt text for one document.
///
/// `name` is used when the front matter has neither `hotelName` nor `title`.
pub fn build_prompt(fm: &FrontMatter, name: &str, default_area: &str) -> String {
    let hotel = fm
        .get_string("hotelName")
        .or_else(|| fm.get_string("title"))
        .unwrap_or(name);
    let area = fm.get_string("area").unwrap_or(default_area);

    let mut prompt = format!("Photorealistic 4K image of {} in {}.", hotel, area);

    if let Some(alt) = fm.get_string("featuredImageAlt") {
        let _ = write!(prompt, " {}.", alt);
    } else if let Some(desc) = fm.get_string("description") {
        let first = desc.split('.').next().unwrap_or_default();
        let _ = write!(prompt, " {}.", first);
    }

    // Only the first two positions count; an unusable item is not replaced by the next
    let featured: Vec<String> = fm
        .get_scalar_array("amenities")
        .into_iter()
        .take(2)
        .flatten()
        .collect();
    if !featured.is_empty() {
        let _ = write!(prompt, " Featuring {}.", featured.join(" and "));
    }

    prompt.push_str(" Sunny day, vibrant colors, architectural photography, hyper-realistic.");
    prompt
}

pub struct PromptWriter<'a, FS: FileSystem> {
    curator: &'a Curator,
    fs: &'a FS,
}

impl<'a, FS: FileSystem> PromptWriter<'a, FS> {
    pub fn new(curator: &'a Curator, fs: &'a FS) -> Self {
        Self { curator, fs }
    }

    /// Build prompts for every document in the configured category.
    ///
    /// A missing category directory is an error here: there is nothing to write.
    pub fn generate(&self) -> Result<PromptSheet> {
        let settings = self.curator.prompts();
        let category = self.curator.category(&settings.category)?;

        let paths = match self.curator.scan(self.fs, &category.dir)? {
            DirectoryScan::NotFound(dir) => return Err(CuratorError::DirectoryNotFound(dir)),
            DirectoryScan::Found(paths) => paths,
        };

        let mut sheet = PromptSheet::default();
        for path in paths {
            let content = self
                .fs
                .read_to_string(&path)
                .map_err(|e| CuratorError::FileRead {
                    path: path.clone(),
                    source: e,
                })?;

            let parsed = match frontmatter::parse_or_empty(&content) {
                Ok(parsed) => parsed,
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    sheet.failures.push((path, e.to_string()));
                    continue;
                }
            };

            let slug = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let prompt = build_prompt(&parsed.frontmatter, &slug, &settings.default_area);
            sheet.entries.push(HotelPrompt {
                proposed_image: format!(
                    "{}/{}.jpg",
                    settings.image_dir.trim_end_matches('/'),
                    slug
                ),
                slug,
                file: path,
                prompt,
            });
        }

        Ok(sheet)
    }

    /// Write the rendered worksheet, creating its parent directory if needed.
    pub fn write(&self, sheet: &PromptSheet, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            self.fs.create_dir_all(parent)?;
        }
        self.fs
            .write_file(output, &sheet.render())
            .map_err(|e| CuratorError::FileWrite {
                path: output.to_path_buf(),
                source: e,
            })
    }
}
