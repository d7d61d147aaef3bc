//! Batch resolution and reporting over signal records.

use std::collections::BTreeMap;

use strab_model::{MissingSignal, Resolution, SignalRecord, StatsReport};
use tracing::info;

use crate::engine::SignalMatcher;

impl SignalMatcher {
    /// Resolves every record's shorthand.
    ///
    /// Repeated shorthands keep the last result in the map but each one
    /// still counts as a query.
    pub fn resolve_all(&mut self, records: &[SignalRecord]) -> BTreeMap<String, Resolution> {
        let mut results = BTreeMap::new();
        for record in records {
            let resolution = self.resolve(&record.kurzzeichen);
            results.insert(record.kurzzeichen.clone(), resolution);
        }
        results
    }

    /// Returns the records whose shorthand resolves to not-found, in input order.
    pub fn find_missing(&mut self, records: &[SignalRecord]) -> Vec<MissingSignal> {
        let mut missing = Vec::new();
        for record in records {
            if self.resolve(&record.kurzzeichen).is_not_found() {
                missing.push(MissingSignal::from(record));
            }
        }
        missing
    }

    /// Reports the counters, plus coverage of `records` when given.
    ///
    /// The counters are captured before `records` are resolved. Resolving
    /// them updates the cache and counters like any other call.
    pub fn stats(&mut self, records: Option<&[SignalRecord]>) -> StatsReport {
        let report = StatsReport::from_stats(&self.counters());
        let Some(records) = records else {
            return report;
        };

        let results = self.resolve_all(records);
        let matched = results.values().filter(|r| r.is_found()).count();
        info!(total = records.len(), matched, "signal coverage computed");
        report.with_coverage(records.len(), matched)
    }
}
