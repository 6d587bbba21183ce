use crate::config::{BODY_MATCH_WEIGHT, TITLE_MATCH_WEIGHT};
use crate::keywords::KeywordSet;

/// Keyword-overlap score for a section. Title hits weigh more than body hits;
/// a keyword present in both contributes both weights. Matching is substring
/// containment, not whole-word.
pub fn relevance_score(title: &str, body: &str, keywords: &KeywordSet) -> u32 {
    let title = title.to_lowercase();
    let body = body.to_lowercase();
    let mut score = 0;
    for keyword in keywords {
        if title.contains(keyword.as_str()) {
            score += TITLE_MATCH_WEIGHT;
        }
        if body.contains(keyword.as_str()) {
            score += BODY_MATCH_WEIGHT;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn title_and_body_hits_both_count() {
        let score = relevance_score("Budget Report", "see budget details", &keywords(&["budget"]));
        assert_eq!(score, 6);
    }

    #[test]
    fn no_overlap_scores_zero() {
        let score = relevance_score("Budget Report", "see budget details", &keywords(&["zzz"]));
        assert_eq!(score, 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(relevance_score("BUDGET", "", &keywords(&["budget"])), 5);
    }

    #[test]
    fn substring_containment_matches_inside_words() {
        // "plan" inside "planning" counts; deliberate heuristic.
        assert_eq!(relevance_score("", "planning ahead", &keywords(&["plan"])), 1);
    }

    #[test]
    fn keywords_accumulate() {
        let score = relevance_score(
            "Travel Itinerary",
            "a travel plan for the coast",
            &keywords(&["travel", "coast"]),
        );
        // travel: 5 + 1, coast: 0 + 1
        assert_eq!(score, 7);
    }
}
