use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

/// Tokens this short or shorter are dropped.
const MIN_TOKEN_LEN: usize = 3;

/// Articles, prepositions and cleaning verbs/nouns that appear in almost
/// every task description and carry no product signal.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Function words
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "of",
        "from", "as", "is", "are", "be", "it", "its", "n/a", "using",
        // Generic cleaning verbs
        "clean", "wipe", "scrub", "sanitize", "disinfect", "wash", "rinse", "polish", "deep",
        "all", "remove", "buildup", "grease", "stains", "down", "needed", "ensure", "check",
        // Frequencies
        "daily", "weekly", "monthly",
        // Generic nouns and qualifiers
        "surfaces", "equipment", "tools", "solution", "machine", "interior", "exterior", "parts",
        "components", "detailed", "specific", "mention",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Split free text into a set of matchable tokens.
///
/// Steps:
/// 1. Lowercase
/// 2. Drop everything that is not `a-z`, `0-9` or whitespace
/// 3. Split on whitespace
/// 4. Drop short tokens and stop words
/// 5. For tokens ending in `s` (longer than 3), also add the form without it
///
/// The plural strip in step 5 is naive: "glass" yields "glas" as well.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    if text.is_empty() {
        return tokens;
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    for word in cleaned.split_whitespace() {
        if word.len() < MIN_TOKEN_LEN || is_stop_word(word) {
            continue;
        }
        if word.len() > 3 {
            if let Some(stem) = word.strip_suffix('s') {
                tokens.insert(stem.to_string());
            }
        }
        tokens.insert(word.to_string());
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        tokenize(text).into_iter().collect()
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(toks("Flat-Top GRILL!"), vec!["flattop", "grill"]);
    }

    #[test]
    fn drops_short_words_and_stop_words() {
        assert_eq!(
            toks("Deep clean the interior of an oven daily"),
            vec!["oven"]
        );
    }

    #[test]
    fn adds_naive_singular_for_plurals() {
        assert_eq!(toks("Trays"), vec!["tray", "trays"]);
        // Applied even where the result is not a real word.
        assert_eq!(toks("glass"), vec!["glas", "glass"]);
    }

    #[test]
    fn four_letter_minimum_for_plural_strip() {
        // "has" is too short to be stemmed, "gas" too.
        assert_eq!(toks("gas"), vec!["gas"]);
        assert_eq!(toks("pans"), vec!["pan", "pans"]);
    }

    #[test]
    fn n_a_is_removed_by_punctuation_strip() {
        assert!(tokenize("N/A").is_empty());
    }

    #[test]
    fn non_ascii_letters_are_stripped() {
        assert_eq!(toks("Crème brûlée torch"), vec!["brle", "crme", "torch"]);
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(toks("oven oven OVEN"), vec!["oven"]);
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(toks("Rational 101 combi"), vec!["101", "combi", "rational"]);
    }
}
