//! Composite Rule Thresholds
//!
//! Cross-variable limits that escalate a single-metric verdict. These are
//! field-tuned values, kept exactly as deployed.

// ===== LIVESTOCK PEN HEAT STRESS =====

/// Pen temperature above which high humidity means danger (°C).
///
/// Strictly greater than: 30.0 °C itself does not trigger the danger rule.
pub const HEAT_STRESS_DANGER_ABOVE_C: f64 = 30.0;

/// Minimum relative humidity for the heat-stress danger rule (%RH).
///
/// Inclusive.
pub const HEAT_STRESS_DANGER_MIN_RH_PCT: f64 = 75.0;

/// Pen temperature from which high humidity means warning (°C).
///
/// Inclusive.
pub const HEAT_STRESS_WARNING_FROM_C: f64 = 28.0;

/// Minimum relative humidity for the heat-stress warning rule (%RH).
///
/// Inclusive.
pub const HEAT_STRESS_WARNING_MIN_RH_PCT: f64 = 70.0;

// ===== RULE SET SIZING =====

/// Maximum composite rules held by one rule set.
///
/// Rule sets are stack-allocated; one slot per (domain, metric) rule is
/// plenty for the current deployment.
pub const MAX_COMPOSITE_RULES: usize = 8;
