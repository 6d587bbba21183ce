use crate::config::MAX_TITLE_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:\-–—…]+$").unwrap());

/// Normalize a raw heading into a display title: trim, strip trailing
/// punctuation, cut at the first remaining `.`, cap the length.
pub fn clean_heading(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut title = TRAILING_PUNCT.replace(trimmed, "").into_owned();
    if let Some(dot) = title.find('.') {
        title.truncate(dot);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        title = title.chars().take(MAX_TITLE_CHARS).collect();
        title.push_str("...");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_heading_cut_at_first_dot() {
        assert_eq!(clean_heading("1. Introduction..."), "1");
    }

    #[test]
    fn trailing_colon_stripped() {
        assert_eq!(clean_heading("Results:"), "Results");
    }

    #[test]
    fn mixed_trailing_punctuation_run_stripped() {
        assert_eq!(clean_heading("Conclusion;:–…"), "Conclusion");
        assert_eq!(clean_heading("  Summary—— "), "Summary");
    }

    #[test]
    fn long_heading_truncated_with_ellipsis() {
        let long = "x".repeat(200);
        let cleaned = clean_heading(&long);
        assert_eq!(cleaned.chars().count(), MAX_TITLE_CHARS + 3);
        assert!(cleaned.ends_with("..."));
    }

    #[test]
    fn plain_heading_unchanged() {
        assert_eq!(clean_heading("Overview"), "Overview");
    }
}
