//! Signal records supplied by the host and the rows reported for misses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A signal record from the host's signal catalogue.
///
/// Only `kurzzeichen` drives matching. `bezeichnung` and `kategorie` are
/// passed through to missing reports; any other fields are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    /// Signal shorthand, e.g. `"F 0"`.
    pub kurzzeichen: String,
    /// Display name.
    #[serde(default)]
    pub bezeichnung: String,
    /// Category.
    #[serde(default)]
    pub kategorie: String,
    /// Fields the matcher does not read.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SignalRecord {
    /// Creates a record with the three fields the matcher knows about.
    pub fn new(
        kurzzeichen: impl Into<String>,
        bezeichnung: impl Into<String>,
        kategorie: impl Into<String>,
    ) -> Self {
        Self {
            kurzzeichen: kurzzeichen.into(),
            bezeichnung: bezeichnung.into(),
            kategorie: kategorie.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Parses a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrabError::Json`] if the text is not an array of
    /// objects with at least a string `kurzzeichen`.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A record whose shorthand resolved to not-found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSignal {
    pub kurzzeichen: String,
    pub bezeichnung: String,
    pub kategorie: String,
}

impl From<&SignalRecord> for MissingSignal {
    fn from(record: &SignalRecord) -> Self {
        Self {
            kurzzeichen: record.kurzzeichen.clone(),
            bezeichnung: record.bezeichnung.clone(),
            kategorie: record.kategorie.clone(),
        }
    }
}
