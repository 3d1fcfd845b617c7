//! Un-ionized Ammonia Estimation
//!
//! ## Chemistry Background
//!
//! Pond probes report Total Ammonia Nitrogen (TAN): the sum of ionized
//! ammonium (NH4+) and un-ionized ammonia (NH3). Only NH3 crosses gill
//! membranes, so it is the toxic fraction. How much of TAN is NH3 depends on
//! the acid/base equilibrium:
//!
//! ```text
//! NH4+  <=>  NH3 + H+          pKa ≈ 9.25 at 25 °C
//!
//! f(NH3) = 1 / (1 + 10^(pKa - pH))
//! ```
//!
//! The pKa falls as water warms (Emerson approximation):
//!
//! ```text
//! pKa = 0.09018 + 2729.92 / T(K)
//! ```
//!
//! ## Practical Consequences
//!
//! - One pH unit up multiplies the NH3 fraction by roughly ten
//! - 28 °C water carries about 1.7x the NH3 of 20 °C water at the same pH
//! - A TAN reading of 1.2 mg/L is harmless at pH 7 and lethal at pH 8.5
//!
//! That is why raw TAN is only a coarse proxy. The facade prefers the NH3
//! estimate whenever pH and temperature readings are available.
//!
//! ## Limits
//!
//! Freshwater only. Salinity raises the pKa slightly; the argument is accepted
//! so callers can pass it already, but no correction is applied yet.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::constants::chemistry::{CELSIUS_TO_KELVIN, EMERSON_PKA_INTERCEPT, EMERSON_PKA_SLOPE_K};

/// NH3 share of a TAN reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AmmoniaEquilibrium {
    /// Un-ionized fraction of TAN, in `[0, 1]`
    #[cfg_attr(feature = "serde", serde(rename = "f_NH3"))]
    pub f_nh3: f64,

    /// Un-ionized ammonia concentration (mg/L)
    #[cfg_attr(feature = "serde", serde(rename = "NH3_mgL"))]
    pub nh3_mg_l: f64,
}

impl AmmoniaEquilibrium {
    /// Result for non-finite inputs
    pub const UNDEFINED: Self = Self {
        f_nh3: f64::NAN,
        nh3_mg_l: f64::NAN,
    };

    /// Both fields are finite numbers
    pub fn is_defined(&self) -> bool {
        self.f_nh3.is_finite() && self.nh3_mg_l.is_finite()
    }
}

/// Acid dissociation constant of NH4+ at the given water temperature
pub fn pka(temp_c: f64) -> f64 {
    EMERSON_PKA_INTERCEPT + EMERSON_PKA_SLOPE_K / (CELSIUS_TO_KELVIN + temp_c)
}

/// Estimate un-ionized ammonia from TAN, pH and temperature
///
/// Returns [`AmmoniaEquilibrium::UNDEFINED`] when TAN, pH or temperature is
/// not finite. Never panics.
///
/// ```rust
/// use farmguard_core::uia_from_tan;
///
/// let eq = uia_from_tan(1.2, 8.2, 28.0, 0.0);
/// assert!((eq.nh3_mg_l - 0.1198).abs() < 1e-3);
///
/// assert!(uia_from_tan(f64::NAN, 7.0, 25.0, 0.0).nh3_mg_l.is_nan());
/// ```
pub fn uia_from_tan(tan_mg_l: f64, ph: f64, temp_c: f64, _salinity_ppt: f64) -> AmmoniaEquilibrium {
    if !(tan_mg_l.is_finite() && ph.is_finite() && temp_c.is_finite()) {
        return AmmoniaEquilibrium::UNDEFINED;
    }

    let f_nh3 = 1.0 / (1.0 + libm::pow(10.0, pka(temp_c) - ph));

    AmmoniaEquilibrium {
        f_nh3,
        nh3_mg_l: tan_mg_l * f_nh3,
    }
}
