use regex::Regex;
use std::sync::LazyLock;

/// A labelled intent and its compiled pattern.
pub struct IntentPattern {
    pub label: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

impl IntentPattern {
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |regex| regex.find_iter(text).count())
    }
}

macro_rules! intent_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

intent_pattern!(RE_DIAGNOSIS, r"(?i)\b(?:kenapa|mengapa|penyebab|masalah|gejala)\b");
intent_pattern!(RE_SOLUTION, r"(?i)\b(?:bagaimana|cara|solusi|perbaiki|atasi)\b");
intent_pattern!(RE_COST, r"(?i)\b(?:berapa|biaya|harga|mahal|murah|ongkos)\b");
intent_pattern!(RE_BOOKING, r"(?i)\b(?:jadwal|booking|servis|bengkel|antri)\b");
intent_pattern!(RE_PREVENTION, r"(?i)\b(?:mencegah|hindari|perawatan|maintenance)\b");

/// Declaration order breaks ties.
pub static INTENT_PATTERNS: &[IntentPattern] = &[
    IntentPattern { label: "diagnosis", regex: &RE_DIAGNOSIS },
    IntentPattern { label: "solution", regex: &RE_SOLUTION },
    IntentPattern { label: "cost", regex: &RE_COST },
    IntentPattern { label: "booking", regex: &RE_BOOKING },
    IntentPattern { label: "prevention", regex: &RE_PREVENTION },
];
