//! Motorcycle component vocabulary, grouped into topic categories.
//!
//! Primary terms name the component itself; secondary terms are symptoms
//! or parts that usually point at it.

/// A diagnostic topic and the keywords that signal it.
#[derive(Debug, Clone, Copy)]
pub struct TopicCategory {
    pub label: &'static str,
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
}

impl TopicCategory {
    /// Primary matches count double.
    pub fn match_score(&self, keywords: &[String]) -> usize {
        keywords
            .iter()
            .map(|k| {
                if self.primary.contains(&k.as_str()) {
                    2
                } else if self.secondary.contains(&k.as_str()) {
                    1
                } else {
                    0
                }
            })
            .sum()
    }
}

pub const TOPIC_CATALOG: &[TopicCategory] = &[
    TopicCategory {
        label: "rem",
        primary: &["rem", "brake", "pengereman", "remnya"],
        secondary: &["kampas", "cakram", "tromol", "blong", "pakem", "squeaking"],
    },
    TopicCategory {
        label: "mesin",
        primary: &["mesin", "engine", "hidup", "dihidupkan", "mati", "mogok"],
        secondary: &["piston", "silinder", "kompresi", "overheat", "knocking", "brebet"],
    },
    TopicCategory {
        label: "oli",
        primary: &["oli", "pelumas", "oil"],
        secondary: &["rembes", "encer", "hitam", "kental"],
    },
    TopicCategory {
        label: "transmisi",
        primary: &["transmisi", "gigi", "kopling", "cvt", "gearbox"],
        secondary: &["perpindahan", "slip", "getaran", "roller", "vanbelt"],
    },
    TopicCategory {
        label: "kelistrikan",
        primary: &["aki", "battery", "listrik", "starter", "lampu"],
        secondary: &["alternator", "kabel", "sekring", "fuse", "charging", "kiprok"],
    },
    TopicCategory {
        label: "bahan_bakar",
        primary: &["bensin", "fuel", "bbm", "bakar", "tangki"],
        secondary: &["karburator", "injeksi", "filter", "pompa", "boros"],
    },
    TopicCategory {
        label: "suspensi",
        primary: &["shock", "suspensi", "ban", "shockbreaker"],
        secondary: &["velg", "bearing", "keras", "empuk", "bocor", "oleng"],
    },
];

/// 2 for a primary term of any category, 1 for a secondary term, else 0.
pub fn lexicon_weight(keyword: &str) -> u8 {
    if TOPIC_CATALOG.iter().any(|c| c.primary.contains(&keyword)) {
        2
    } else if TOPIC_CATALOG.iter().any(|c| c.secondary.contains(&keyword)) {
        1
    } else {
        0
    }
}

/// The keyword carrying the most lexicon weight; ties go to the earliest.
pub fn dominant_keyword(keywords: &[String]) -> Option<&str> {
    let mut best: Option<(&str, u8)> = None;
    for keyword in keywords {
        let weight = lexicon_weight(keyword);
        match best {
            Some((_, best_weight)) if best_weight >= weight => {}
            _ => best = Some((keyword.as_str(), weight)),
        }
    }
    best.map(|(keyword, _)| keyword)
}
