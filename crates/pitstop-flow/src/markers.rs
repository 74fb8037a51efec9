//! Marker phrases and trigger keywords.
//!
//! A marker phrase matches when every one of its words appears among the
//! message keywords, so "terima kasih" needs both words.

/// Phrases that open a conversation.
pub const GREETING_MARKERS: &[&str] = &[
    "halo",
    "hai",
    "hello",
    "hi",
    "selamat",
    "permisi",
    "assalamualaikum",
];

/// Phrases that wrap a conversation up.
pub const CLOSING_MARKERS: &[&str] = &[
    "terima kasih",
    "makasih",
    "thanks",
    "thx",
    "bye",
    "selesai",
    "cukup",
    "sampai jumpa",
];

/// Keywords that ask for a price.
pub const COST_TRIGGERS: &[&str] = &["berapa", "biaya", "harga", "ongkos", "tarif", "mahal", "murah"];

/// Keywords that ask for a workshop appointment.
pub const SCHEDULING_TRIGGERS: &[&str] = &["jadwal", "booking", "servis", "bengkel", "antri", "kapan"];

/// Intent labels that count as triggers when a classifier is present.
pub const COST_INTENT: &str = "cost";
pub const BOOKING_INTENT: &str = "booking";

pub fn phrase_matches(phrase: &str, keywords: &[String]) -> bool {
    phrase
        .split_whitespace()
        .all(|word| keywords.iter().any(|k| k == word))
}

pub fn contains_any_phrase(phrases: &[&str], keywords: &[String]) -> bool {
    phrases.iter().any(|phrase| phrase_matches(phrase, keywords))
}

pub fn has_greeting(keywords: &[String]) -> bool {
    contains_any_phrase(GREETING_MARKERS, keywords)
}

pub fn has_closing(keywords: &[String]) -> bool {
    contains_any_phrase(CLOSING_MARKERS, keywords)
}

pub fn has_any(triggers: &[&str], keywords: &[String]) -> bool {
    keywords.iter().any(|k| triggers.contains(&k.as_str()))
}

#[cfg(test)]
mod tests {
    use pitstop_core::text::extract_keywords;

    use super::*;

    #[test]
    fn multi_word_markers_need_every_word() {
        assert!(has_closing(&extract_keywords("Terima kasih banyak!")));
        assert!(!has_closing(&extract_keywords("terima paket")));
        assert!(has_closing(&extract_keywords("oke makasih")));
    }

    #[test]
    fn greetings_are_detected() {
        assert!(has_greeting(&extract_keywords("Halo, selamat pagi")));
        assert!(!has_greeting(&extract_keywords("Motor saya susah dihidupkan")));
    }

    #[test]
    fn triggers_match_single_keywords() {
        let keywords = extract_keywords("Berapa biaya perbaikannya?");
        assert!(has_any(COST_TRIGGERS, &keywords));
        assert!(!has_any(SCHEDULING_TRIGGERS, &keywords));
    }
}
