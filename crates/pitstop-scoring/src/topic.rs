use crate::lexicon::TOPIC_CATALOG;

/// Best-matching topic label for a keyword set, `None` when nothing matches.
/// Ties resolve to the category listed first in the catalog.
pub fn detect_topic(keywords: &[String]) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for category in TOPIC_CATALOG {
        let score = category.match_score(keywords);
        if score == 0 {
            continue;
        }
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((category.label, score));
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use pitstop_core::text::extract_keywords;

    use super::*;

    #[test]
    fn detects_component_topics() {
        assert_eq!(detect_topic(&extract_keywords("Motor saya remnya blong")), Some("rem"));
        assert_eq!(detect_topic(&extract_keywords("Oli mesin rembes")), Some("oli"));
        assert_eq!(detect_topic(&extract_keywords("ganti oli kapan")), Some("oli"));
        assert_eq!(detect_topic(&extract_keywords("Motor saya susah dihidupkan")), Some("mesin"));
        assert_eq!(detect_topic(&extract_keywords("Motor Honda Beat 2020")), None);
    }
}
