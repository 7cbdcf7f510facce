//! Text normalization for term matching.
//!
//! Every word is compared in two forms: its lowercased text, and, when the
//! word looks like a phone number, a stripped form holding only digits and
//! `+`. The second form lets `1-323-555` find `+13235555555`.

use std::collections::BTreeSet;

/// Punctuation that commonly separates groups of digits in a phone number.
pub const PHONE_SEPARATORS: [char; 4] = ['-', '.', '(', ')'];

/// Lowercase a word for comparison.
pub fn normalize_word(text: &str) -> String {
    text.to_lowercase()
}

/// Strip formatting from a phone-number-shaped word.
///
/// Returns `None` unless the text consists solely of digits, `+` and
/// [`PHONE_SEPARATORS`] and contains at least one digit. Anything else (a
/// name, or a number with a stray letter) is compared only as plain text.
pub fn phone_normalized(text: &str) -> Option<String> {
    let phone_shaped = text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || PHONE_SEPARATORS.contains(&c));

    if !phone_shaped {
        return None;
    }

    Some(
        text.chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect(),
    )
}

/// Split text into a set of normalized words.
///
/// Splits on whitespace, lowercases, and trims surrounding punctuation other
/// than `+`, so `(415)` becomes `415` and `Hello,` becomes `hello`. Empty or
/// whitespace-only input yields the empty set.
pub fn split_into_words(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '+'))
        .filter(|word| !word.is_empty())
        .map(normalize_word)
        .collect()
}

/// A normalized word together with its phone-normalized form, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub phone: Option<String>,
}

impl Token {
    /// Build a token from an already normalized word.
    pub fn new(word: String) -> Self {
        let phone = phone_normalized(&word);
        Self { text: word, phone }
    }

    /// Tokenize text with [`split_into_words`].
    pub fn tokenize(text: &str) -> Vec<Token> {
        split_into_words(text).into_iter().map(Token::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        split_into_words(text).into_iter().collect()
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Lizaveta"), "lizaveta");
        assert_eq!(normalize_word("+1-323"), "+1-323");
    }

    #[test]
    fn test_phone_normalized() {
        assert_eq!(phone_normalized("+1-323"), Some("+1323".to_string()));
        assert_eq!(phone_normalized("1.234.56"), Some("123456".to_string()));
        assert_eq!(phone_normalized("(415)"), Some("415".to_string()));
        assert_eq!(phone_normalized("13235555555x"), None);
        assert_eq!(phone_normalized("pavel"), None);
        assert_eq!(phone_normalized("+"), None);
        assert_eq!(phone_normalized("--"), None);
    }

    #[test]
    fn test_split_into_words() {
        assert_eq!(
            words("Stinking Lizaveta object of pity +13235555555"),
            vec!["+13235555555", "lizaveta", "object", "of", "pity", "stinking"]
        );
    }

    #[test]
    fn test_split_trims_punctuation() {
        assert_eq!(words("1 (415) 555-5555"), vec!["1", "415", "555-5555"]);
        assert_eq!(words("Hello, Alice!"), vec!["alice", "hello"]);
    }

    #[test]
    fn test_split_collapses_duplicates() {
        assert_eq!(words("pavel Pavel PAVEL"), vec!["pavel"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_into_words("").is_empty());
        assert!(split_into_words("   \t\n").is_empty());
        assert!(split_into_words(" - ").is_empty());
    }

    #[test]
    fn test_split_is_deterministic() {
        let text = "Book Club +12345678900 Alice +49030183000 Bob Barker";
        assert_eq!(split_into_words(text), split_into_words(text));
    }

    #[test]
    fn test_token_tokenize() {
        let tokens = Token::tokenize("Liza +1-323");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "+1-323");
        assert_eq!(tokens[0].phone.as_deref(), Some("+1323"));
        assert_eq!(tokens[1].text, "liza");
        assert_eq!(tokens[1].phone, None);
    }
}
