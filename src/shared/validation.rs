use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for category slugs: latin letters only, non-empty
    /// - Valid: "news", "Sports"
    /// - Invalid: "news-1", "новости", "", "two words"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();

    /// Regex for human-readable text fields (name, description, search terms):
    /// latin or cyrillic letters and spaces
    /// - Valid: "Hot news", "Новости", ""
    /// - Invalid: "news-1", "42", "news!"
    pub static ref TEXT_REGEX: Regex = Regex::new(r"^[A-Za-zА-Яа-яЁё\s]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("news"));
        assert!(SLUG_REGEX.is_match("Sports"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("news-1")); // hyphen and digit
        assert!(!SLUG_REGEX.is_match("новости")); // cyrillic
        assert!(!SLUG_REGEX.is_match("two words")); // space
    }

    #[test]
    fn test_text_regex_valid() {
        assert!(TEXT_REGEX.is_match("Hot news"));
        assert!(TEXT_REGEX.is_match("Новости дня"));
        assert!(TEXT_REGEX.is_match("")); // optional fields may be blank
    }

    #[test]
    fn test_text_regex_invalid() {
        assert!(!TEXT_REGEX.is_match("news-1"));
        assert!(!TEXT_REGEX.is_match("42"));
        assert!(!TEXT_REGEX.is_match("news!"));
    }
}
