//! Structured form of a signal shorthand.

use serde::{Deserialize, Serialize};

/// A shorthand such as `"W 12a (Süd)"` split into its parts.
///
/// When the shorthand does not have the `<letters> <digits>[a-z] (<suffix>)`
/// shape, `letters`, `numbers` and `suffix` are empty and only `original`
/// is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedCode {
    /// Letter code, uppercased (e.g. `"W"`, `"ST"`).
    pub letters: String,
    /// Digits plus an optional trailing lowercase letter (e.g. `"12a"`).
    pub numbers: String,
    /// Parenthetical suffix including its parentheses, or empty.
    pub suffix: String,
    /// The trimmed input.
    pub original: String,
}

impl NormalizedCode {
    /// Creates the unparseable form that only carries the trimmed input.
    pub fn unparsed(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            ..Self::default()
        }
    }

    /// Returns true if both the letter and the number part were recognised.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        !self.letters.is_empty() && !self.numbers.is_empty()
    }

    /// Returns the suffix content without parentheses, trimmed.
    ///
    /// Returns `None` when there is no suffix or it is blank.
    #[must_use]
    pub fn suffix_text(&self) -> Option<String> {
        let cleaned: String = self.suffix.chars().filter(|c| !matches!(c, '(' | ')')).collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }
}
