//! Vehicle details mentioned in free text.

use std::sync::LazyLock;

use regex::Regex;

use pitstop_core::models::{Transmission, VehicleProfile};
use pitstop_core::text::extract_keywords;

static RE_YEAR: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").ok());

/// Brand keyword and display name.
const BRANDS: &[(&str, &str)] = &[
    ("honda", "Honda"),
    ("yamaha", "Yamaha"),
    ("suzuki", "Suzuki"),
    ("kawasaki", "Kawasaki"),
    ("ducati", "Ducati"),
    ("harley", "Harley-Davidson"),
];

/// Model keyword, display name, and the brand it implies.
const MODELS: &[(&str, &str, &str)] = &[
    ("beat", "Beat", "Honda"),
    ("vario", "Vario", "Honda"),
    ("scoopy", "Scoopy", "Honda"),
    ("supra", "Supra", "Honda"),
    ("cbr", "CBR", "Honda"),
    ("mio", "Mio", "Yamaha"),
    ("nmax", "NMAX", "Yamaha"),
    ("aerox", "Aerox", "Yamaha"),
    ("jupiter", "Jupiter", "Yamaha"),
    ("satria", "Satria", "Suzuki"),
    ("ninja", "Ninja", "Kawasaki"),
];

const MATIC_WORDS: &[&str] = &["matic", "automatic", "cvt", "skutik"];
const MANUAL_WORDS: &[&str] = &["manual", "kopling"];

/// Pull brand, model, year and transmission out of `text`.
///
/// A known model implies its brand when no brand is named. Only the first
/// plausible year is taken.
pub fn extract_vehicle(text: &str) -> VehicleProfile {
    let keywords = extract_keywords(text);
    let has = |word: &str| keywords.iter().any(|k| k == word);

    let mut profile = VehicleProfile::default();
    if let Some((_, name)) = BRANDS.iter().find(|(kw, _)| has(kw)) {
        profile.brand = Some((*name).to_string());
    }
    if let Some((_, name, brand)) = MODELS.iter().find(|(kw, _, _)| has(kw)) {
        profile.model = Some((*name).to_string());
        if profile.brand.is_none() {
            profile.brand = Some((*brand).to_string());
        }
    }
    profile.year = RE_YEAR
        .as_ref()
        .and_then(|re| re.find(text))
        .and_then(|m| m.as_str().parse().ok());
    profile.transmission = if MATIC_WORDS.iter().any(|w| has(w)) {
        Some(Transmission::Matic)
    } else if MANUAL_WORDS.iter().any(|w| has(w)) {
        Some(Transmission::Manual)
    } else {
        None
    };
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_brand_model_and_year() {
        let profile = extract_vehicle("Motor Honda Beat 2020");
        assert_eq!(profile.brand.as_deref(), Some("Honda"));
        assert_eq!(profile.model.as_deref(), Some("Beat"));
        assert_eq!(profile.year, Some(2020));
        assert_eq!(profile.transmission, None);
    }

    #[test]
    fn model_implies_brand() {
        let profile = extract_vehicle("nmax saya matic, tahun 2019");
        assert_eq!(profile.brand.as_deref(), Some("Yamaha"));
        assert_eq!(profile.model.as_deref(), Some("NMAX"));
        assert_eq!(profile.year, Some(2019));
        assert_eq!(profile.transmission, Some(Transmission::Matic));
    }

    #[test]
    fn ignores_numbers_that_are_not_years() {
        assert_eq!(extract_vehicle("biaya 150000").year, None);
        assert_eq!(extract_vehicle("kilometer 3021").year, None);
        assert!(extract_vehicle("rem blong").is_empty());
    }

    #[test]
    fn clutch_means_manual() {
        assert_eq!(
            extract_vehicle("kopling keras").transmission,
            Some(Transmission::Manual)
        );
    }
}
