//! Regex patterns and separator stripping used by the field rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose email shape: nonwhitespace@nonwhitespace.nonwhitespace
    static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();

    /// Separators users type into card numbers ("1234-5678" or "1234 5678")
    static ref CARD_SEPARATORS: Regex = Regex::new(r"[-\s]").unwrap();

    /// Separators users type into expiry dates ("12/25" or "12 25")
    static ref EXPIRY_SEPARATORS: Regex = Regex::new(r"[/\s]").unwrap();
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Strips hyphens and whitespace from a card number.
pub fn strip_card_separators(value: &str) -> String {
    CARD_SEPARATORS.replace_all(value, "").into_owned()
}

/// Strips slashes and whitespace from an expiry date.
pub fn strip_expiry_separators(value: &str) -> String {
    EXPIRY_SEPARATORS.replace_all(value, "").into_owned()
}
