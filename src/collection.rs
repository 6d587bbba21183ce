use crate::config::{INPUT_FILE_NAME, OUTPUT_FILE_NAME, PDF_DIR_NAME, REFINED_TEXT_CHARS};
use crate::discover::discover_sections;
use crate::document::DocumentOpener;
use crate::keywords::query_keywords;
use crate::models::{ExtractedSection, InputJson, Metadata, OutputJson, SubsectionAnalysis};
use crate::rank::rank_sections;
use crate::report::Reporter;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

/// Process one collection directory: read its input spec, rank sections of
/// every listed document, write the output record next to the spec.
///
/// Per-document failures (missing or unreadable PDFs, empty extraction) go to
/// `reporter` and never abort the collection.
pub fn process_collection(
    dir: &Path,
    opener: &dyn DocumentOpener,
    reporter: &dyn Reporter,
) -> Result<()> {
    let input_path = dir.join(INPUT_FILE_NAME);
    let raw = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read input JSON at {}", input_path.display()))?;
    let input: InputJson = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse input JSON at {}", input_path.display()))?;

    let persona = input.persona.role.clone();
    let task = input.task();
    let keywords = query_keywords(&persona, &task);

    log::info!("Processing collection '{}'", dir.display());
    log::info!("Persona: '{}', Job: '{}'", persona, task);
    log::debug!("Keywords: {:?}", keywords);

    let mut extracted_sections = Vec::new();
    let mut subsection_analysis = Vec::new();

    for doc in &input.documents {
        if doc.filename.is_empty() {
            continue;
        }
        let pdf_path = dir.join(PDF_DIR_NAME).join(&doc.filename);
        if !pdf_path.exists() {
            reporter.error(&format!("PDF not found: {}", pdf_path.display()));
            continue;
        }
        log::info!("Analyzing PDF: {}", doc.filename);
        let document = match opener.open(&pdf_path) {
            Ok(document) => document,
            Err(err) => {
                reporter.error(&format!(
                    "Failed to open {}: {:#}",
                    pdf_path.display(),
                    err
                ));
                continue;
            }
        };

        let candidates = discover_sections(document.as_ref(), &keywords);
        if candidates.is_empty() {
            reporter.warning(&format!("No sections extracted from {}", doc.filename));
        }

        for ranked in rank_sections(candidates) {
            extracted_sections.push(ExtractedSection {
                document: doc.filename.clone(),
                section_title: ranked.section.title.clone(),
                importance_rank: ranked.importance_rank,
                page_number: ranked.section.page_number,
            });
            subsection_analysis.push(SubsectionAnalysis {
                document: doc.filename.clone(),
                refined_text: refine_text(&ranked.section.body_text),
                page_number: ranked.section.page_number,
            });
        }
    }

    let output = OutputJson {
        metadata: Metadata {
            input_documents: input.documents.iter().map(|d| d.filename.clone()).collect(),
            persona,
            job_to_be_done: task,
            processing_timestamp: Utc::now().to_rfc3339(),
        },
        extracted_sections,
        subsection_analysis,
    };

    let output_path = dir.join(OUTPUT_FILE_NAME);
    std::fs::write(&output_path, serde_json::to_string_pretty(&output)?)
        .with_context(|| format!("Failed to write output to {}", output_path.display()))?;
    log::info!(
        "Finished collection '{}'. Output saved to '{}'",
        dir.display(),
        output_path.display()
    );
    Ok(())
}

/// Excerpt for the subsection record: newlines collapsed to spaces, trimmed,
/// capped at [`REFINED_TEXT_CHARS`] characters.
fn refine_text(body: &str) -> String {
    let flattened = body.replace('\n', " ");
    let trimmed = flattened.trim();
    if trimmed.chars().count() > REFINED_TEXT_CHARS {
        trimmed.chars().take(REFINED_TEXT_CHARS).collect()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refine_collapses_newlines_and_trims() {
        assert_eq!(refine_text("\nline one\nline two\n"), "line one line two");
    }

    #[test]
    fn refine_caps_at_512_chars() {
        let body = "a".repeat(600);
        let refined = refine_text(&body);
        assert_eq!(refined.chars().count(), REFINED_TEXT_CHARS);
    }

    #[test]
    fn refine_short_text_untouched() {
        assert_eq!(refine_text("short"), "short");
    }

    #[test]
    fn refine_never_contains_newlines() {
        let body = "x\n".repeat(400);
        assert!(!refine_text(&body).contains('\n'));
    }
}
