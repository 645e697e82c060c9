//! Text cleanup applied to input and stored statements before comparison.

/// Trim the text and collapse every run of whitespace to a single space.
pub fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase, drop punctuation, and clean whitespace.
///
/// The result is what comparators see; `"Hello,  World!"` becomes
/// `"hello world"`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .flat_map(char::to_lowercase)
        .collect();
    clean_whitespace(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_whitespace() {
        assert_eq!(clean_whitespace("  hello   there \t\n friend "), "hello there friend");
        assert_eq!(clean_whitespace(""), "");
        assert_eq!(clean_whitespace(" \t\n "), "");
        assert_eq!(clean_whitespace("single"), "single");
    }

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Hello,  World!"), "hello world");
        assert_eq!(normalize("How are you?"), "how are you");
        assert_eq!(normalize("What's up"), "what s up");
    }

    #[test]
    fn test_normalize_keeps_unicode_letters() {
        assert_eq!(normalize("Ça va?"), "ça va");
        assert_eq!(normalize("Grüß Gott"), "grüß gott");
    }

    #[test]
    fn test_normalize_only_punctuation_is_empty() {
        assert_eq!(normalize("?!..."), "");
    }
}
