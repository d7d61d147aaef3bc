//! Resolver engine: pattern cascade over the filename pool with memoization.

use std::collections::HashMap;

use strab_model::{MatchStats, MatcherOptions, Resolution, Result};
use tracing::{debug, trace};

use crate::fuzzy::FuzzyMatcher;
use crate::normalize::normalize_code;
use crate::patterns::build_patterns;

/// Resolves signal shorthands to filenames from a fixed pool.
///
/// Each pattern generated for a shorthand is tried against the entire pool,
/// in pool order, before the next pattern is tried. The first hit wins, so
/// pattern priority dominates and pool order only breaks ties within one
/// pattern.
///
/// Results, including not-found, are cached by the exact input string for
/// the lifetime of the matcher or until [`Self::clear_cache`].
///
/// # Example
///
/// ```
/// use strab_map::SignalMatcher;
///
/// let mut matcher = SignalMatcher::new(vec!["Signal_F_0.svg".to_string()]);
/// let found = matcher.resolve("F 0");
/// assert_eq!(found.filename(), Some("Signal_F_0.svg"));
/// ```
#[derive(Debug, Clone)]
pub struct SignalMatcher {
    pool: Vec<String>,
    matcher: FuzzyMatcher,
    cache: HashMap<String, Resolution>,
    stats: MatchStats,
}

impl SignalMatcher {
    /// Creates a matcher over `pool` with default options.
    pub fn new(pool: Vec<String>) -> Self {
        Self::build(pool, FuzzyMatcher::default())
    }

    /// Creates a matcher over `pool` with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`strab_model::StrabError::InvalidOption`] if `options` fail
    /// validation.
    pub fn with_options(pool: Vec<String>, options: &MatcherOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(pool, FuzzyMatcher::new(options)))
    }

    fn build(pool: Vec<String>, matcher: FuzzyMatcher) -> Self {
        debug!(pool_size = pool.len(), "signal matcher created");
        Self {
            pool,
            matcher,
            cache: HashMap::new(),
            stats: MatchStats::default(),
        }
    }

    /// Resolves a shorthand to the best matching filename.
    ///
    /// Never fails: shorthands that cannot be parsed are compared verbatim,
    /// and anything without a match yields [`Resolution::NotFound`].
    pub fn resolve(&mut self, code: &str) -> Resolution {
        self.stats.total_queries += 1;

        if let Some(cached) = self.cache.get(code) {
            self.stats.cache_hits += 1;
            trace!(code, "cache hit");
            return cached.clone();
        }

        let resolution = self.search(code);
        if resolution.is_not_found() {
            self.stats.not_found += 1;
        }
        self.cache.insert(code.to_string(), resolution.clone());
        resolution
    }

    fn search(&self, code: &str) -> Resolution {
        let normalized = normalize_code(code);
        for pattern in build_patterns(&normalized) {
            trace!(code, pattern = %pattern, "trying pattern");
            let hit = self
                .pool
                .iter()
                .find(|filename| self.matcher.matches(filename, &pattern));
            if let Some(filename) = hit {
                debug!(code, pattern = %pattern, filename = %filename, "signal resolved");
                return Resolution::Found(filename.clone());
            }
        }
        debug!(code, "no filename matched");
        Resolution::NotFound
    }

    /// Drops every cached result and zeroes all counters.
    pub fn clear_cache(&mut self) {
        debug!(entries = self.cache.len(), "clearing signal cache");
        self.cache.clear();
        self.stats = MatchStats::default();
    }

    /// Current counters.
    #[must_use]
    pub fn counters(&self) -> MatchStats {
        self.stats
    }

    /// Returns the cached result for `code` without counting a query.
    #[must_use]
    pub fn cached(&self, code: &str) -> Option<&Resolution> {
        self.cache.get(code)
    }

    /// Number of cached shorthands.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// The filename pool, in search order.
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Patterns that would be tried for `code`, in priority order.
    ///
    /// Does not touch the cache or the counters.
    #[must_use]
    pub fn patterns_for(&self, code: &str) -> Vec<String> {
        build_patterns(&normalize_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn short_filename_can_win_the_first_pattern() {
        // "f0" is contained in the separator-free "signalf0", so the first
        // pool entry already matches the first pattern.
        let mut matcher = SignalMatcher::new(pool(&["F0.svg", "Signal_F_0.svg"]));
        assert_eq!(matcher.resolve("F 0").filename(), Some("F0.svg"));
    }

    #[test]
    fn pattern_priority_dominates_pool_order() {
        let mut matcher = SignalMatcher::new(pool(&["BOStrab_X_1.svg", "X_1.png"]));
        assert_eq!(matcher.resolve("X 1").filename(), Some("X_1.png"));
    }

    #[test]
    fn with_options_rejects_empty_extension() {
        let options = MatcherOptions::new().with_image_extensions([""]);
        let err = SignalMatcher::with_options(pool(&["F_0."]), &options)
            .expect_err("empty extension");
        assert!(matches!(
            err,
            strab_model::StrabError::InvalidOption {
                field: "image_extensions",
                ..
            }
        ));
    }

    #[test]
    fn with_options_uses_custom_extensions() {
        let options = MatcherOptions::new().with_image_extensions(["gif"]);
        let mut matcher =
            SignalMatcher::with_options(pool(&["Signal_Q_7.gif"]), &options).expect("valid options");
        assert_eq!(matcher.resolve("q 7").filename(), Some("Signal_Q_7.gif"));
    }

    #[test]
    fn empty_pool_never_matches() {
        let mut matcher = SignalMatcher::new(Vec::new());
        assert!(matcher.resolve("F 0").is_not_found());
        assert!(matcher.resolve("").is_not_found());
        assert_eq!(matcher.counters().not_found, 2);
    }

    #[test]
    fn cache_is_keyed_by_raw_input() {
        let mut matcher = SignalMatcher::new(pool(&["Signal_F_0.svg"]));
        matcher.resolve("F 0");
        matcher.resolve("F0");
        assert_eq!(matcher.cache_len(), 2);
        assert_eq!(matcher.counters().cache_hits, 0);
    }

    #[test]
    fn cached_peek_does_not_count() {
        let mut matcher = SignalMatcher::new(pool(&["Signal_F_0.svg"]));
        assert!(matcher.cached("F 0").is_none());
        matcher.resolve("F 0");
        assert!(matcher.cached("F 0").is_some_and(Resolution::is_found));
        assert_eq!(matcher.counters().total_queries, 1);
    }

    #[test]
    fn patterns_for_leaves_state_untouched() {
        let matcher = SignalMatcher::new(pool(&["Signal_F_0.svg"]));
        let patterns = matcher.patterns_for("H 2");
        assert_eq!(patterns.first().map(String::as_str), Some("Signal_H_2"));
        assert!(patterns.contains(&"Hauptsignal_H_2".to_string()));
        assert_eq!(matcher.counters(), MatchStats::default());
        assert_eq!(matcher.cache_len(), 0);
    }
}
