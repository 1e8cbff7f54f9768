//! Field format checks applied before values reach the catalog.

use once_cell::sync::Lazy;
use regex::Regex;

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric pattern compiles"));

static LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("letters pattern compiles"));

/// Registration numbers: ASCII letters and digits only, non-empty.
pub fn is_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC.is_match(input)
}

/// Model and brand names: ASCII letters and whitespace only, non-empty.
pub fn is_letters(input: &str) -> bool {
    LETTERS.is_match(input) && !input.trim().is_empty()
}

/// Parses a decimal such as `20000`, `-3.5` or ` 12.75 `.
pub fn parse_decimal(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
