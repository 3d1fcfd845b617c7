//! Ammonia Equilibrium Constants
//!
//! Coefficients for the freshwater NH4+/NH3 equilibrium used by the
//! un-ionized ammonia estimator.

/// Offset from degrees Celsius to kelvin.
///
/// Source: NIST Special Publication 330 (2019)
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Constant term of the Emerson pKa approximation (dimensionless).
///
/// `pKa = 0.09018 + 2729.92 / T(K)`, valid for freshwater between 0 and 30 °C.
///
/// Source: Emerson et al. (1975), J. Fish. Res. Board Can. 32: 2379-2383
pub const EMERSON_PKA_INTERCEPT: f64 = 0.09018;

/// Temperature coefficient of the Emerson pKa approximation (K).
///
/// Larger absolute temperature means a smaller pKa, so warmer water holds a
/// larger un-ionized fraction at the same pH.
///
/// Source: Emerson et al. (1975)
pub const EMERSON_PKA_SLOPE_K: f64 = 2729.92;

/// Salinity assumed for freshwater ponds (ppt).
///
/// The estimator accepts salinity but does not correct for it yet.
pub const FRESHWATER_SALINITY_PPT: f64 = 0.0;
