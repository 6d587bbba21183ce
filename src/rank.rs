use crate::config::{CANDIDATE_SCAN_LIMIT, MAX_SECTIONS_PER_DOCUMENT};
use crate::discover::Section;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedSection {
    pub section: Section,
    /// Dense, 1-based; 1 is most relevant.
    pub importance_rank: u32,
}

/// Order candidates by score desc, page asc, title asc, then emit up to
/// [`MAX_SECTIONS_PER_DOCUMENT`] case-insensitively unique titles from the
/// first [`CANDIDATE_SCAN_LIMIT`] sorted candidates.
pub fn rank_sections(mut candidates: Vec<Section>) -> Vec<RankedSection> {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.page_number.cmp(&b.page_number))
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut seen_titles = HashSet::new();
    let mut ranked = Vec::new();
    for section in candidates.into_iter().take(CANDIDATE_SCAN_LIMIT) {
        if !seen_titles.insert(section.title.to_lowercase()) {
            continue;
        }
        let importance_rank = ranked.len() as u32 + 1;
        ranked.push(RankedSection {
            section,
            importance_rank,
        });
        if ranked.len() == MAX_SECTIONS_PER_DOCUMENT {
            break;
        }
    }
    ranked
}
