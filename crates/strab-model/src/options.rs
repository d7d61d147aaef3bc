//! Configuration options for the matcher.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrabError};

/// Image extensions stripped before comparing a filename with a pattern.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg"];

/// Options controlling fuzzy filename comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Extensions (without dot, any case) removed from the end of filenames
    /// and patterns before the exact and separator-free comparisons.
    pub image_extensions: Vec<String>,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}

impl MatcherOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list of stripped extensions.
    #[must_use]
    pub fn with_image_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Parses options from JSON and validates them.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StrabError::Json`] for malformed JSON and
    /// [`StrabError::InvalidOption`] if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that every extension is a bare, non-empty ASCII alphanumeric word.
    ///
    /// # Errors
    ///
    /// Returns [`StrabError::InvalidOption`] naming the first bad extension.
    pub fn validate(&self) -> Result<()> {
        for ext in &self.image_extensions {
            if ext.is_empty() {
                return Err(StrabError::InvalidOption {
                    field: "image_extensions",
                    message: "extension must not be empty".to_string(),
                });
            }
            if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(StrabError::InvalidOption {
                    field: "image_extensions",
                    message: format!("'{ext}' must be alphanumeric without a leading dot"),
                });
            }
        }
        Ok(())
    }
}
