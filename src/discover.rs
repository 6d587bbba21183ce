use crate::config::{MIN_HEADING_FONT_SIZE, MIN_SPAN_CHARS};
use crate::document::DocumentSource;
use crate::heading::clean_heading;
use crate::keywords::KeywordSet;
use crate::score::relevance_score;
use std::collections::HashSet;

/// A discovered, scored section candidate. `title` is already normalized;
/// ordering and output truncation happen later in [`crate::rank`].
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    /// 1-based page the heading occurs on.
    pub page_number: u32,
    /// Full text of that page.
    pub body_text: String,
    pub score: u32,
}

/// One way of producing section candidates from a document.
pub trait Discovery {
    fn discover(&self, doc: &dyn DocumentSource, keywords: &KeywordSet) -> Vec<Section>;
}

/// Picks the strategy once per document: authored outline when present,
/// typography heuristics otherwise.
pub fn discover_sections(doc: &dyn DocumentSource, keywords: &KeywordSet) -> Vec<Section> {
    if doc.outline().is_empty() {
        TypographyDiscovery.discover(doc, keywords)
    } else {
        OutlineDiscovery.discover(doc, keywords)
    }
}

/// Reads sections off the document's authored outline. Title and page come
/// from the outline entry; the body is the full text of the target page.
pub struct OutlineDiscovery;

impl Discovery for OutlineDiscovery {
    fn discover(&self, doc: &dyn DocumentSource, keywords: &KeywordSet) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut seen = HashSet::new();
        let page_count = doc.page_count();
        if page_count == 0 {
            return sections;
        }
        for entry in doc.outline() {
            if entry.title.trim().is_empty() || entry.page_number == 0 {
                continue;
            }
            let key = (entry.title.trim().to_lowercase(), entry.page_number);
            if seen.contains(&key) {
                continue;
            }
            // Outline page numbers are occasionally out of range; clamp.
            let page_index = (entry.page_number as usize - 1).min(page_count - 1);
            let body_text = doc.page_text(page_index).to_owned();
            let score = relevance_score(&entry.title, &body_text, keywords);
            sections.push(Section {
                title: clean_heading(&entry.title),
                page_number: entry.page_number,
                body_text,
                score,
            });
            seen.insert(key);
        }
        sections
    }
}

/// Fallback for documents without an outline: any span set in large enough
/// type is taken for a heading.
pub struct TypographyDiscovery;

impl Discovery for TypographyDiscovery {
    fn discover(&self, doc: &dyn DocumentSource, keywords: &KeywordSet) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut seen = HashSet::new();
        for page_index in 0..doc.page_count() {
            let page_number = page_index as u32 + 1;
            for span in doc.page_spans(page_index) {
                let text = span.text.trim();
                if text.chars().count() < MIN_SPAN_CHARS {
                    continue;
                }
                if span.font_size < MIN_HEADING_FONT_SIZE {
                    continue;
                }
                let key = (text.to_lowercase(), page_number);
                if seen.contains(&key) {
                    continue;
                }
                let body_text = doc.page_text(page_index).to_owned();
                let score = relevance_score(text, &body_text, keywords);
                sections.push(Section {
                    title: clean_heading(text),
                    page_number,
                    body_text,
                    score,
                });
                seen.insert(key);
            }
        }
        sections
    }
}
