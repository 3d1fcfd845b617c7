//! Constants for FarmGuard Core
//!
//! Centralised numeric values used by the classifier. Every constant carries
//! its unit in the name and a note on where the value comes from.
//!
//! ## Organization
//!
//! - **Chemistry**: ammonia equilibrium coefficients and unit offsets
//! - **Thresholds**: hand-tuned cross-variable limits and rule-set sizing
//!
//! Per-metric bands are not constants: they live in the registry's standard
//! table so they can be overridden from configuration.

/// Ammonia equilibrium chemistry.
pub mod chemistry;

/// Composite rule thresholds and capacities.
pub mod thresholds;

pub use chemistry::{CELSIUS_TO_KELVIN, EMERSON_PKA_INTERCEPT, EMERSON_PKA_SLOPE_K};

pub use thresholds::{
    HEAT_STRESS_DANGER_ABOVE_C, HEAT_STRESS_DANGER_MIN_RH_PCT,
    HEAT_STRESS_WARNING_FROM_C, HEAT_STRESS_WARNING_MIN_RH_PCT,
    MAX_COMPOSITE_RULES,
};
