//! Keyword extraction: case-folding, splitting on non-alphanumerics, and
//! stopword filtering.

mod stopwords;

pub use stopwords::is_stopword;

use crate::constants::MIN_KEYWORD_CHARS;

/// Extract normalized keywords from raw text.
///
/// Keywords are lower-cased, deduplicated, and returned in order of first
/// occurrence. Tokens shorter than two characters and stopwords are dropped.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in text.split(|c: char| !c.is_alphanumeric()) {
        if token.chars().count() < MIN_KEYWORD_CHARS {
            continue;
        }
        let folded = token.to_lowercase();
        if is_stopword(&folded) || keywords.contains(&folded) {
            continue;
        }
        keywords.push(folded);
    }
    keywords
}

/// Jaccard similarity of two keyword sets, 0.0 when either is empty.
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.iter().filter(|k| b.contains(k)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
