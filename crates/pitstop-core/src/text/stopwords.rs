/// Indonesian and English function words that carry no diagnostic signal.
const STOPWORDS: &[&str] = &[
    // Indonesian
    "ada", "adalah", "agar", "aja", "aku", "akan", "anda", "apa", "apakah", "atau", "bagaimana",
    "banget", "belum", "bisa", "buat", "dan", "dari", "deh", "dengan", "di", "dia", "dong", "ga",
    "gak", "gimana", "ini", "itu", "jadi", "juga", "kalau", "kalo", "kami", "kamu", "karena",
    "ke", "kita", "kok", "lagi", "mau", "mereka", "nih", "nya", "oleh", "pada", "saja", "sama",
    "sangat", "saya", "sekali", "sih", "sudah", "tapi", "tidak", "tuh", "udah", "untuk", "ya",
    "yang",
    // English
    "an", "and", "are", "be", "but", "can", "do", "does", "for", "how", "in", "is", "it", "me",
    "my", "of", "on", "or", "so", "that", "the", "this", "to", "was", "what", "with", "you",
];

/// Whether a case-folded token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_and_marker_words_are_kept() {
        for word in ["motor", "rem", "berapa", "biaya", "halo", "terima", "kasih", "kapan"] {
            assert!(!is_stopword(word), "{word} must stay a keyword");
        }
        assert!(is_stopword("saya"));
        assert!(is_stopword("the"));
    }
}
