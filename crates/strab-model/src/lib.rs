//! Data model for resolving tram signal shorthands to asset filenames.
//!
//! - [`NormalizedCode`]: a shorthand split into letters, numbers and suffix
//! - [`Resolution`]: a matched filename or the not-found marker
//! - [`SignalRecord`] / [`MissingSignal`]: host records and miss reports
//! - [`MatchStats`] / [`StatsReport`]: counters and their report form
//! - [`MatcherOptions`]: comparison settings

pub mod code;
pub mod error;
pub mod options;
pub mod resolution;
pub mod signal;
pub mod stats;

pub use code::NormalizedCode;
pub use error::{Result, StrabError};
pub use options::{DEFAULT_IMAGE_EXTENSIONS, MatcherOptions};
pub use resolution::Resolution;
pub use signal::{MissingSignal, SignalRecord};
pub use stats::{MatchStats, StatsReport, format_rate};
