use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Score contribution for a keyword found in a section title.
pub const TITLE_MATCH_WEIGHT: u32 = 5;
/// Score contribution for a keyword found in the section's page text.
pub const BODY_MATCH_WEIGHT: u32 = 1;

/// Spans rendered at least this large are treated as headings when a PDF
/// carries no outline. Absolute threshold, not relative to the document.
pub const MIN_HEADING_FONT_SIZE: f32 = 12.0;
/// Spans shorter than this (after trimming) are never heading candidates.
pub const MIN_SPAN_CHARS: usize = 4;

/// Titles longer than this are cut and marked with an ellipsis.
pub const MAX_TITLE_CHARS: usize = 150;

/// At most this many sections are emitted per document.
pub const MAX_SECTIONS_PER_DOCUMENT: usize = 5;
/// Only the first N sorted candidates are considered for emission.
pub const CANDIDATE_SCAN_LIMIT: usize = 10;
/// Refined excerpt length cap, in characters.
pub const REFINED_TEXT_CHARS: usize = 512;

pub const INPUT_FILE_NAME: &str = "challenge1b_input.json";
pub const OUTPUT_FILE_NAME: &str = "challenge1b_output.json";
pub const PDF_DIR_NAME: &str = "PDFs";

/// Subdirectories of `root` that hold a collection input spec, in
/// sorted-by-name order.
pub fn collection_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.path().join(INPUT_FILE_NAME).exists() {
            dirs.push(entry.path().to_path_buf());
        }
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_dirs_skips_ineligible_and_sorts() {
        let root = tempfile::tempdir().unwrap();
        for name in ["b_docs", "a_docs", "no_input"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }
        for name in ["b_docs", "a_docs"] {
            std::fs::write(root.path().join(name).join(INPUT_FILE_NAME), "{}").unwrap();
        }
        std::fs::write(root.path().join("stray.txt"), "").unwrap();

        let dirs = collection_dirs(root.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a_docs", "b_docs"]);
    }
}
