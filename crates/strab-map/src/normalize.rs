//! Splitting a raw shorthand into letters, numbers and suffix.

use std::sync::LazyLock;

use regex::Regex;
use strab_model::NormalizedCode;

/// `<letters> <digits>[a-z] (<suffix>)`, whitespace between parts optional.
static SHORTHAND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\s*([0-9]+[a-z]?)\s*(\([^)]+\))?$")
        .expect("Invalid shorthand regex")
});

/// Normalizes a shorthand such as `"w 12a (Süd)"`.
///
/// Input is trimmed first. Letters are uppercased, numbers and the
/// parenthesised suffix are kept verbatim. Input that does not fit the
/// shorthand shape yields [`NormalizedCode::unparsed`].
pub fn normalize_code(code: &str) -> NormalizedCode {
    let trimmed = code.trim();
    let Some(caps) = SHORTHAND_REGEX.captures(trimmed) else {
        return NormalizedCode::unparsed(trimmed);
    };
    NormalizedCode {
        letters: caps[1].to_uppercase(),
        numbers: caps[2].to_string(),
        suffix: caps.get(3).map_or_else(String::new, |m| m.as_str().to_string()),
        original: trimmed.to_string(),
    }
}
