//! Core classification engine for FarmGuard
//!
//! Turns raw sensor readings from ponds, silk-worm tanks, livestock pens and
//! hydroponic racks into an actionable health status. Every dashboard card,
//! monitoring grid and digital-twin panel goes through this crate.
//!
//! Key constraints:
//! - Pure functions, no I/O, no shared mutable state
//! - Missing or invalid readings degrade to `Level::Unknown`, never panic
//! - Works without `std` (needs `alloc` for result messages)
//!
//! ```no_run
//! use farmguard_core::{Classifier, Domain, Extras, Level, Metric};
//!
//! let classifier = Classifier::standard();
//!
//! // Pond ammonia with pH and temperature available takes the NH3 path
//! let extras = Extras::new().with_ph(8.2).with_suhu(28.0);
//! let result = classifier.classify(Domain::Kolam, Metric::AmoniaTotal, 1.2, &extras);
//! assert_eq!(result.level, Level::Danger);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod ammonia;
pub mod band;
pub mod classify;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod level;
pub mod reading;
pub mod registry;
pub mod rules;
pub mod summary;
pub mod traits;

// Public API
pub use ammonia::{pka, uia_from_tan, AmmoniaEquilibrium};
pub use band::{classify_by_bands, BandDefinition};
pub use classify::{ClassificationResult, Classifier};
#[cfg(feature = "std")]
pub use classify::{classify, classify_typed, klass, klass_typed};
pub use domain::{Domain, Metric};
pub use errors::{BandError, KeyError, RuleError};
pub use level::Level;
pub use reading::{parse_reading, Reading};
pub use registry::{RegistryBuilder, ThresholdRegistry};
pub use rules::{HeatStressRule, RuleSet};
pub use summary::{summarize, DomainSummary, LevelCounts, MetricStatus};
pub use traits::{CompositeRule, Extras};

/// Crate version, for diagnostics
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
