//! Error Types for Threshold Configuration
//!
//! ## Design Philosophy
//!
//! Classification itself never fails. A missing registry entry, a non-finite
//! reading or an absent companion value all resolve to `Level::Unknown` so the
//! dashboard can always render something for every metric.
//!
//! Errors only exist at configuration time, when a band or rule set is being
//! built. A band with `ok.min > ok.max` is a configuration bug; it is rejected
//! when the band is constructed and never reaches the classifier.
//!
//! Like the rest of the crate, errors are small and `Copy`: no heap data, only
//! inline numbers and `&'static str`.
//!
//! ## Error Categories
//!
//! - [`BandError`]: a band definition violates its own invariants
//! - [`KeyError`]: a domain or metric key from the data store is not recognised
//! - [`RuleError`]: the composite rule set is full
//!
//! ```rust
//! use farmguard_core::{BandDefinition, BandError};
//!
//! let inverted = BandDefinition::new(27.0, 20.0, None, None, "°C");
//! assert!(matches!(inverted, Err(BandError::InvertedOk { .. })));
//! ```

use thiserror_no_std::Error;

/// Invalid band definition
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BandError {
    /// A bound is NaN
    #[error("Band bound is not a number")]
    NotANumber,

    /// Warning bounds must be finite; leave them unset for an open side
    #[error("Warning bound {value} is not finite")]
    InfiniteWarnBound {
        /// The offending bound
        value: f64,
    },

    /// The ok interval needs a finite lower end
    #[error("Ok minimum {value} is not finite")]
    InfiniteOkMin {
        /// The offending bound
        value: f64,
    },

    /// `ok.min` is greater than `ok.max`
    #[error("Ok interval [{min}, {max}] is inverted")]
    InvertedOk {
        /// Lower end of the ok interval
        min: f64,
        /// Upper end of the ok interval
        max: f64,
    },

    /// Lower warning bound lies inside the ok interval
    #[error("Lower warning bound {warn_low} lies above ok minimum {ok_min}")]
    WarnLowAboveOk {
        /// Configured lower warning bound
        warn_low: f64,
        /// Lower end of the ok interval
        ok_min: f64,
    },

    /// Upper warning bound lies inside the ok interval
    #[error("Upper warning bound {warn_high} lies below ok maximum {ok_max}")]
    WarnHighBelowOk {
        /// Configured upper warning bound
        warn_high: f64,
        /// Upper end of the ok interval
        ok_max: f64,
    },
}

/// Unrecognised key from the realtime data store
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Not one of the known cultivation domains
    #[error("Unknown domain key")]
    UnknownDomain,

    /// Not one of the known metrics
    #[error("Unknown metric key")]
    UnknownMetric,
}

/// Composite rule set errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// No room left for another rule
    #[error("Rule set is full (capacity {capacity})")]
    CapacityExceeded {
        /// Fixed capacity of the rule set
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for BandError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotANumber =>
                defmt::write!(fmt, "Band bound is NaN"),
            Self::InfiniteWarnBound { value } =>
                defmt::write!(fmt, "Warning bound {} not finite", value),
            Self::InfiniteOkMin { value } =>
                defmt::write!(fmt, "ok.min {} not finite", value),
            Self::InvertedOk { min, max } =>
                defmt::write!(fmt, "Ok [{}, {}] inverted", min, max),
            Self::WarnLowAboveOk { warn_low, ok_min } =>
                defmt::write!(fmt, "warn_low {} above ok.min {}", warn_low, ok_min),
            Self::WarnHighBelowOk { warn_high, ok_max } =>
                defmt::write!(fmt, "warn_high {} below ok.max {}", warn_high, ok_max),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownDomain => defmt::write!(fmt, "Unknown domain key"),
            Self::UnknownMetric => defmt::write!(fmt, "Unknown metric key"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RuleError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::CapacityExceeded { capacity } =>
                defmt::write!(fmt, "Rule set full ({})", capacity),
        }
    }
}
