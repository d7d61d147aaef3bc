//! Tiered, case-insensitive comparison of a filename with a pattern.
//!
//! Tiers, first success wins:
//! 1. extension-stripped forms are equal
//! 2. the lowercased filename contains the lowercased pattern
//! 3. with `-`, `_`, whitespace and U+FEFF removed from the
//!    extension-stripped forms, either contains the other

use strab_model::MatcherOptions;

/// Fuzzy comparison configured with the extensions to strip.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    extensions: Vec<String>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(&MatcherOptions::default())
    }
}

impl FuzzyMatcher {
    pub fn new(options: &MatcherOptions) -> Self {
        Self {
            extensions: options
                .image_extensions
                .iter()
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .collect(),
        }
    }

    /// Returns true if `filename` is considered a match for `pattern`.
    pub fn matches(&self, filename: &str, pattern: &str) -> bool {
        let file = filename.to_lowercase();
        let pat = pattern.to_lowercase();

        let file_base = self.strip_extension(&file);
        let pat_base = self.strip_extension(&pat);

        if file_base == pat_base {
            return true;
        }
        if file.contains(&pat) {
            return true;
        }

        let compact_file = strip_separators(file_base);
        let compact_pat = strip_separators(pat_base);
        compact_file.contains(&compact_pat) || compact_pat.contains(&compact_file)
    }

    fn strip_extension<'a>(&self, lowered: &'a str) -> &'a str {
        self.extensions
            .iter()
            .find_map(|ext| lowered.strip_suffix(ext.as_str()))
            .unwrap_or(lowered)
    }
}

fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| !is_separator(*c)).collect()
}

// U+FEFF is not Unicode White_Space, so it is listed explicitly.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '\u{feff}') || c.is_whitespace()
}
