//! Candidate filename patterns for a normalized shorthand.
//!
//! Patterns are ordered from the most common asset naming convention to the
//! least specific one. The engine tries each pattern against the whole pool
//! before moving to the next, so list order is match priority.

use strab_model::NormalizedCode;

/// German long names for signal letter codes.
const LONG_NAMES: &[(&str, &str)] = &[
    ("F", "Fahrsignal"),
    ("W", "Weichensignal"),
    ("ST", "Streckensignal"),
    ("SO", "Sondersignal"),
    ("H", "Hauptsignal"),
    ("V", "Vorsignal"),
    ("G", "Geschwindigkeitssignal"),
    ("A", "Abfahrsignal"),
    ("BÜ", "Bahnübergang"),
];

/// Looks up the German long name for a letter code, ignoring case.
pub fn long_name(letters: &str) -> Option<&'static str> {
    let key = letters.to_uppercase();
    LONG_NAMES
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, name)| *name)
}

/// Builds the ordered pattern list for a normalized shorthand.
///
/// Unparseable shorthands produce only their original text. Otherwise the
/// original text is always the last entry.
pub fn build_patterns(norm: &NormalizedCode) -> Vec<String> {
    if !norm.is_parsed() {
        return vec![norm.original.clone()];
    }

    let letters = norm.letters.as_str();
    let numbers = norm.numbers.as_str();

    let mut patterns = Vec::with_capacity(11);
    patterns.push(format!("Signal_{letters}_{numbers}"));
    if let Some(suffix) = norm.suffix_text() {
        patterns.push(format!("Signal_{letters}_{numbers}_{suffix}"));
    }
    patterns.push(format!("Signal{letters}{numbers}"));
    patterns.push(format!("Signal {letters} {numbers}"));
    patterns.push(format!("{letters}_{numbers}"));
    patterns.push(format!("Signal-{letters}-{numbers}"));
    if let Some(name) = long_name(letters) {
        patterns.push(format!("{name}_{letters}_{numbers}"));
    }
    patterns.push(format!("{letters}{numbers}"));
    patterns.push(format!("BOStrab_Signal_{letters}_{numbers}"));
    patterns.push(format!("BOStrab_{letters}_{numbers}"));
    patterns.push(norm.original.clone());
    patterns
}
