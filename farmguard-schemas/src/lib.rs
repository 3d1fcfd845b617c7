//! Threshold Configuration for FarmGuard
//!
//! ## Overview
//!
//! `farmguard-core` ships the deployed thresholds as code. Sites differ: a
//! catfish pond tolerates warmer water than a tilapia pond, a broiler pen runs
//! cooler than a layer pen. This crate lets an installation override bands
//! from a JSON document without recompiling, and owns the process-wide
//! registry every service classifies against.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "base": "standard",
//!   "bands": {
//!     "kolam": {
//!       "suhu": { "ok": [27, 31], "warnLow": 25, "warnHigh": 33, "units": "°C" },
//!       "oksigen": { "ok": [5.5, null], "warnLow": 3.5, "units": "mg/L" },
//!       "uia": null
//!     }
//!   }
//! }
//! ```
//!
//! - `base` is `"standard"` (overlay on the deployed table, the default) or
//!   `"empty"` (only what the document lists)
//! - keys are the realtime store's domain and metric keys
//! - a `null` upper `ok` bound is an open side (`+∞`)
//! - a `null` band removes the entry
//!
//! Every band is checked against the core invariants before the registry is
//! built. One bad entry rejects the whole document; a half-applied override is
//! worse than none.
//!
//! ## Process-Wide Registry
//!
//! [`GLOBAL_REGISTRY`] is built once on first use. If the
//! `FARMGUARD_THRESHOLDS` environment variable names a file, that document is
//! applied; a file that fails to load is logged and the standard table is
//! used instead.
//!
//! ```rust
//! use farmguard_core::{Domain, Extras, Level, Metric};
//! use farmguard_schemas::RegistryConfig;
//!
//! let config: RegistryConfig = r#"{
//!     "bands": { "kolam": { "suhu": { "ok": [27, 31], "warnLow": 25, "warnHigh": 33, "units": "°C" } } }
//! }"#.parse()?;
//! let registry = config.build()?;
//!
//! let band = registry.get(Domain::Kolam, Metric::Suhu).unwrap();
//! assert_eq!(band.classify(30.5), Level::Ok);
//! # Ok::<(), farmguard_schemas::SchemaError>(())
//! ```

use farmguard_core::{BandError, Domain, Metric};

pub mod config;
pub mod registry;

pub use config::{BandConfig, BaseTable, RegistryConfig};
pub use registry::{global_classifier, THRESHOLDS_ENV, GLOBAL_REGISTRY, GLOBAL_RULES};

/// Threshold configuration errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse threshold config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown domain key: {0}")]
    UnknownDomain(String),

    #[error("Unknown metric key {metric} in domain {domain}")]
    UnknownMetric { domain: Domain, metric: String },

    #[error("Invalid band for {domain}/{metric}: {reason}")]
    InvalidBand {
        domain: Domain,
        metric: Metric,
        reason: BandError,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
