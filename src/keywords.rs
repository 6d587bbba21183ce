use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

pub type KeywordSet = BTreeSet<String>;

/// Lowercased, deduplicated word tokens from the persona and task strings.
/// No stop-word removal or stemming: the scorer relies on exact tokens.
pub fn query_keywords(persona: &str, task: &str) -> KeywordSet {
    let query = format!("{} {}", persona, task).to_lowercase();
    WORD.find_iter(&query)
        .map(|m| m.as_str().to_owned())
        .collect()
}
