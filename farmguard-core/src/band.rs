//! Band definitions and the banded classifier
//!
//! ## Band Layout
//!
//! A band is a closed healthy interval with optional hard limits on each side:
//!
//! ```text
//!   danger  | warning  |        ok        | warning  |  danger
//! ----------+----------+------------------+----------+---------->
//!        warn_low    ok.min            ok.max    warn_high
//! ```
//!
//! A side without a warning bound has no danger zone at all. Crossing `ok`
//! on that side is a warning however far the value goes. Pond dissolved
//! oxygen uses this: there is no such thing as too much oxygen, so its band
//! is `ok = [5, ∞]`, `warn_low = 3`, no `warn_high`.
//!
//! ## Boundary Behaviour
//!
//! - `ok.min` and `ok.max` are inside `ok` (closed interval)
//! - `warn_low` and `warn_high` themselves are still `warning`
//! - Only values strictly beyond a warning bound are `danger`
//!
//! The checks in [`classify_by_bands`] run in a fixed order. The warning-band
//! checks must run before the open-side fallbacks, otherwise a value exactly
//! at `warn_low` / `warn_high` lands in the wrong tier.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{errors::BandError, level::Level};

/// Healthy interval plus optional hard limits for one metric
///
/// Immutable once constructed. Use [`BandDefinition::new`], which checks the
/// invariants:
/// - no bound is NaN; `ok.min` and the warning bounds are finite
/// - `ok.min <= ok.max`
/// - `warn_low <= ok.min` and `warn_high >= ok.max` when set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BandDefinition {
    ok_min: f64,
    ok_max: f64,
    warn_low: Option<f64>,
    warn_high: Option<f64>,
    units: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    note: Option<Cow<'static, str>>,
}

impl BandDefinition {
    /// Create a band, rejecting definitions that break the layout invariants
    pub fn new(
        ok_min: f64,
        ok_max: f64,
        warn_low: Option<f64>,
        warn_high: Option<f64>,
        units: impl Into<Cow<'static, str>>,
    ) -> Result<Self, BandError> {
        let band = Self::from_parts(ok_min, ok_max, warn_low, warn_high, units.into());
        band.check()?;
        Ok(band)
    }

    /// Build without checking; the standard table is checked by tests instead
    pub(crate) fn from_parts(
        ok_min: f64,
        ok_max: f64,
        warn_low: Option<f64>,
        warn_high: Option<f64>,
        units: Cow<'static, str>,
    ) -> Self {
        Self {
            ok_min,
            ok_max,
            warn_low,
            warn_high,
            units,
            note: None,
        }
    }

    /// Attach a documentation note (never evaluated)
    pub fn with_note(mut self, note: impl Into<Cow<'static, str>>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Verify the layout invariants
    pub fn check(&self) -> Result<(), BandError> {
        let bounds = [
            Some(self.ok_min),
            Some(self.ok_max),
            self.warn_low,
            self.warn_high,
        ];
        if bounds.iter().flatten().any(|b| b.is_nan()) {
            return Err(BandError::NotANumber);
        }

        if !self.ok_min.is_finite() {
            return Err(BandError::InfiniteOkMin {
                value: self.ok_min,
            });
        }

        for value in [self.warn_low, self.warn_high].into_iter().flatten() {
            if !value.is_finite() {
                return Err(BandError::InfiniteWarnBound { value });
            }
        }

        if self.ok_min > self.ok_max {
            return Err(BandError::InvertedOk {
                min: self.ok_min,
                max: self.ok_max,
            });
        }

        if let Some(warn_low) = self.warn_low {
            if warn_low > self.ok_min {
                return Err(BandError::WarnLowAboveOk {
                    warn_low,
                    ok_min: self.ok_min,
                });
            }
        }

        if let Some(warn_high) = self.warn_high {
            if warn_high < self.ok_max {
                return Err(BandError::WarnHighBelowOk {
                    warn_high,
                    ok_max: self.ok_max,
                });
            }
        }

        Ok(())
    }

    /// Lower end of the healthy interval
    pub fn ok_min(&self) -> f64 {
        self.ok_min
    }

    /// Upper end of the healthy interval (may be `+∞`)
    pub fn ok_max(&self) -> f64 {
        self.ok_max
    }

    /// `(ok.min, ok.max)`
    pub fn range(&self) -> (f64, f64) {
        (self.ok_min, self.ok_max)
    }

    /// Lower hard limit, if the low side can reach danger
    pub fn warn_low(&self) -> Option<f64> {
        self.warn_low
    }

    /// Upper hard limit, if the high side can reach danger
    pub fn warn_high(&self) -> Option<f64> {
        self.warn_high
    }

    /// Display unit
    pub fn units(&self) -> &str {
        &self.units
    }

    /// Documentation note
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Display target, e.g. `"20–27 °C"`
    pub fn target(&self) -> String {
        let target = format!(
            "{}–{} {}",
            Bound(self.ok_min),
            Bound(self.ok_max),
            self.units
        );
        match target.strip_suffix(' ') {
            Some(trimmed) => String::from(trimmed),
            None => target,
        }
    }

    /// Classify a value against this band
    pub fn classify(&self, value: f64) -> Level {
        classify_by_bands(Some(self), value)
    }
}

/// Formats infinite interval ends as `∞` / `-∞`
struct Bound(f64);

impl core::fmt::Display for Bound {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 == f64::INFINITY {
            f.write_str("∞")
        } else if self.0 == f64::NEG_INFINITY {
            f.write_str("-∞")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Classify a value against an optional band
///
/// Missing band or non-finite value is `Unknown`, decided before any
/// comparison so NaN never reaches the band checks.
pub fn classify_by_bands(def: Option<&BandDefinition>, value: f64) -> Level {
    let def = match def {
        Some(def) if value.is_finite() => def,
        _ => return Level::Unknown,
    };

    if def.ok_min <= value && value <= def.ok_max {
        return Level::Ok;
    }

    if let Some(warn_low) = def.warn_low {
        if warn_low <= value && value < def.ok_min {
            return Level::Warning;
        }
    }

    if let Some(warn_high) = def.warn_high {
        if def.ok_max < value && value <= warn_high {
            return Level::Warning;
        }
    }

    if let Some(warn_low) = def.warn_low {
        if value < warn_low {
            return Level::Danger;
        }
    }

    if let Some(warn_high) = def.warn_high {
        if value > warn_high {
            return Level::Danger;
        }
    }

    // Open sides never escalate past warning
    if def.warn_low.is_none() && value < def.ok_min {
        return Level::Warning;
    }

    if def.warn_high.is_none() && value > def.ok_max {
        return Level::Warning;
    }

    // Unreachable for a finite value and a checked band
    Level::Unknown
}
