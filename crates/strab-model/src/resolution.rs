//! Outcome of resolving a shorthand against the filename pool.

use serde::{Deserialize, Serialize};

/// Result of a resolve call.
///
/// `NotFound` is an ordinary value: it is cached like a hit and reported
/// through statistics. Serializes as the filename string or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resolution {
    /// The first pool entry that matched.
    Found(String),
    /// No pattern matched any pool entry.
    NotFound,
}

impl Resolution {
    /// Returns true if a filename was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns true for the not-found marker.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns the matched filename, if any.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Found(name) => Some(name),
            Self::NotFound => None,
        }
    }
}
