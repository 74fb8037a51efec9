use pitstop_core::text::{extract_keywords, is_stopword, jaccard};
use proptest::prelude::*;

proptest! {
    #[test]
    fn keywords_are_folded_unique_and_not_stopwords(text in "[A-Za-z0-9 ,.!?]{0,80}") {
        let keywords = extract_keywords(&text);
        for (i, k) in keywords.iter().enumerate() {
            prop_assert_eq!(k, &k.to_lowercase());
            prop_assert!(!is_stopword(k));
            prop_assert!(k.chars().count() >= 2);
            prop_assert!(!keywords[i + 1..].contains(k));
        }
    }

    #[test]
    fn jaccard_is_bounded_and_symmetric(a in "[a-e ]{0,20}", b in "[a-e ]{0,20}") {
        let ka = extract_keywords(&a);
        let kb = extract_keywords(&b);
        let ab = jaccard(&ka, &kb);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab - jaccard(&kb, &ka)).abs() < 1e-12);
    }
}
