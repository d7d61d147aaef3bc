//! Query counters and the report built from them.

use serde::{Deserialize, Serialize};

/// Running counters of a matcher.
///
/// Counters only grow until the matcher's cache is cleared, which zeroes
/// them together with the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Every resolve call, cached or not.
    pub total_queries: u64,
    /// Resolve calls answered from the cache.
    pub cache_hits: u64,
    /// Uncached resolve calls that found nothing.
    pub not_found: u64,
}

impl MatchStats {
    /// Cache hits as a share of all queries, e.g. `"33.3%"`.
    ///
    /// Returns `"0%"` when no query has been made.
    #[must_use]
    pub fn cache_hit_rate(&self) -> String {
        format_rate(self.cache_hits, self.total_queries)
    }
}

/// Snapshot of the counters, optionally with coverage for a record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub not_found: u64,
    pub cache_hit_rate: String,
    /// Number of records in the list the report was computed over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    /// Distinct shorthands of that list that resolved to a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<usize>,
    /// `matched / total`, e.g. `"87.5%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_rate: Option<String>,
}

impl StatsReport {
    /// Builds a report from the counters alone.
    #[must_use]
    pub fn from_stats(stats: &MatchStats) -> Self {
        Self {
            total_queries: stats.total_queries,
            cache_hits: stats.cache_hits,
            not_found: stats.not_found,
            cache_hit_rate: stats.cache_hit_rate(),
            total: None,
            matched: None,
            match_rate: None,
        }
    }

    /// Attaches coverage for a record list of `total` records.
    ///
    /// An empty list gives a `"0%"` match rate.
    #[must_use]
    pub fn with_coverage(mut self, total: usize, matched: usize) -> Self {
        self.total = Some(total);
        self.matched = Some(matched);
        self.match_rate = Some(format_rate(matched as u64, total as u64));
        self
    }

    /// Returns true if list coverage is attached.
    #[must_use]
    pub fn has_coverage(&self) -> bool {
        self.total.is_some()
    }
}

/// Formats `part / whole` as a percentage with one decimal.
///
/// Ties round away from zero (`1/16` is `"6.3%"`). A zero `whole` yields `"0%"`.
#[must_use]
pub fn format_rate(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0%".to_string();
    }
    let percent = part as f64 / whole as f64 * 100.0;
    format!("{:.1}%", (percent * 10.0).round() / 10.0)
}
