//! Thread-safe wrapper around [`SignalMatcher`].

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use strab_model::{MatchStats, MissingSignal, Resolution, SignalRecord, StatsReport};

use crate::engine::SignalMatcher;

/// A [`SignalMatcher`] behind a single mutex.
///
/// Cache and counters sit behind the same lock, so a clear is never
/// observed half done.
#[derive(Debug)]
pub struct SharedSignalMatcher {
    inner: Mutex<SignalMatcher>,
}

impl SharedSignalMatcher {
    pub fn new(matcher: SignalMatcher) -> Self {
        Self {
            inner: Mutex::new(matcher),
        }
    }

    // Every operation leaves cache and counters consistent, so a poisoned
    // lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, SignalMatcher> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn resolve(&self, code: &str) -> Resolution {
        self.lock().resolve(code)
    }

    pub fn resolve_all(&self, records: &[SignalRecord]) -> BTreeMap<String, Resolution> {
        self.lock().resolve_all(records)
    }

    pub fn find_missing(&self, records: &[SignalRecord]) -> Vec<MissingSignal> {
        self.lock().find_missing(records)
    }

    pub fn stats(&self, records: Option<&[SignalRecord]>) -> StatsReport {
        self.lock().stats(records)
    }

    pub fn counters(&self) -> MatchStats {
        self.lock().counters()
    }

    pub fn clear_cache(&self) {
        self.lock().clear_cache();
    }

    /// Consumes the wrapper and returns the matcher.
    pub fn into_inner(self) -> SignalMatcher {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<SignalMatcher> for SharedSignalMatcher {
    fn from(matcher: SignalMatcher) -> Self {
        Self::new(matcher)
    }
}
