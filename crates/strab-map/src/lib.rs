//! Rule-based fuzzy matching of tram signal shorthands to asset filenames.
//!
//! A shorthand such as `"W 12a (Süd)"` is split into letters, numbers and
//! suffix ([`normalize`]), expanded into an ordered list of filename
//! patterns ([`patterns`]), and each pattern is compared against the
//! filename pool with a tiered, case-insensitive comparison ([`fuzzy`]).
//! [`SignalMatcher`] drives the cascade and memoizes results.
//!
//! # Example
//!
//! ```
//! use strab_map::SignalMatcher;
//!
//! let pool = vec!["Hauptsignal_H_2.svg".to_string(), "signal-w-12.png".to_string()];
//! let mut matcher = SignalMatcher::new(pool);
//!
//! assert_eq!(matcher.resolve("W 12").filename(), Some("signal-w-12.png"));
//! assert!(matcher.resolve("???").is_not_found());
//! assert_eq!(matcher.stats(None).cache_hit_rate, "0.0%");
//! ```

#![deny(unsafe_code)]

pub mod engine;
pub mod fuzzy;
pub mod normalize;
pub mod patterns;
mod report;
pub mod shared;

pub use engine::SignalMatcher;
pub use fuzzy::FuzzyMatcher;
pub use normalize::normalize_code;
pub use patterns::{build_patterns, long_name};
pub use shared::SharedSignalMatcher;

pub use strab_model::{
    MatchStats, MatcherOptions, MissingSignal, NormalizedCode, Resolution, SignalRecord,
    StatsReport,
};
