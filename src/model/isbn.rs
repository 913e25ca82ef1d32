//! ISBN input normalization.

use std::fmt;

/// Longest ISBN the search endpoint accepts (ISBN-13).
pub const MAX_ISBN_DIGITS: usize = 13;

/// Strip everything except ASCII digits.
///
/// Used to compare ISBNs of catalog entries regardless of hyphens or spaces.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// A search-ready ISBN: ASCII digits only, 1 to 13 characters.
///
/// Smart constructor enforces the invariant; the search path never sends
/// anything else to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    /// Normalize raw user input.
    ///
    /// Drops non-digits and truncates to [`MAX_ISBN_DIGITS`]. Returns `None`
    /// when nothing is left, which callers surface as "ISBN is invalid"
    /// without contacting the backend.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_ISBN_DIGITS)
            .collect();

        if digits.is_empty() {
            None
        } else {
            Some(Self(digits))
        }
    }

    /// Digits, without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a stored (possibly hyphenated) ISBN refers to this one.
    pub fn matches(&self, stored: &str) -> bool {
        digits_only(stored) == self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_separators() {
        let isbn = Isbn::parse("978-0-441-01359-3").unwrap();
        assert_eq!(isbn.as_str(), "9780441013593");
    }

    #[test]
    fn parse_truncates_to_thirteen_digits() {
        let isbn = Isbn::parse("1234567890123456").unwrap();
        assert_eq!(isbn.as_str(), "1234567890123");
    }

    #[test]
    fn parse_rejects_input_without_digits() {
        assert_eq!(Isbn::parse(""), None);
        assert_eq!(Isbn::parse("abc-def"), None);
        assert_eq!(Isbn::parse("   "), None);
    }

    #[test]
    fn parse_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not ISBN digits
        assert_eq!(Isbn::parse("١٢٣"), None);
    }

    #[test]
    fn matches_compares_digits_of_stored_value() {
        let isbn = Isbn::parse("123").unwrap();
        assert!(isbn.matches("1-2-3"));
        assert!(isbn.matches("123"));
        assert!(!isbn.matches("1234"));
        assert!(!isbn.matches(""));
    }

    #[test]
    fn digits_only_keeps_full_length() {
        assert_eq!(digits_only("12345678901234567"), "12345678901234567");
    }
}
