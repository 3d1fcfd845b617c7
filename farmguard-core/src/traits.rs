//! Core traits and companion readings
//!
//! [`Extras`] carries the readings that sit next to the classified value
//! (pH and temperature for pond ammonia, humidity for pen temperature).
//! [`CompositeRule`] is the extension point for cross-variable escalation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::reading::Reading;
use crate::{
    domain::{Domain, Metric},
    level::Level,
};

/// Companion readings passed alongside the classified value
///
/// A companion that is missing or not finite is treated as absent, so a
/// rule or the ammonia path never sees NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Extras {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "store_reading"))]
    ph: Option<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "store_reading"))]
    suhu: Option<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "store_reading"))]
    kelembaban: Option<f64>,
}

impl Extras {
    /// No companion readings
    pub const fn new() -> Self {
        Self {
            ph: None,
            suhu: None,
            kelembaban: None,
        }
    }

    /// Companion pH reading
    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = finite(ph);
        self
    }

    /// Companion temperature reading (°C)
    pub fn with_suhu(mut self, suhu: f64) -> Self {
        self.suhu = finite(suhu);
        self
    }

    /// Companion relative humidity reading (%RH)
    pub fn with_kelembaban(mut self, kelembaban: f64) -> Self {
        self.kelembaban = finite(kelembaban);
        self
    }

    /// Collect companions from a snapshot of readings for one domain
    pub fn from_readings(readings: &[(Metric, f64)]) -> Self {
        readings
            .iter()
            .fold(Self::new(), |extras, &(metric, value)| extras.with(metric, value))
    }

    /// Set the companion slot for `metric`; other metrics are ignored
    pub fn with(self, metric: Metric, value: f64) -> Self {
        match metric {
            Metric::Ph => self.with_ph(value),
            Metric::Suhu => self.with_suhu(value),
            Metric::Kelembaban => self.with_kelembaban(value),
            _ => self,
        }
    }

    /// pH, if present and finite
    pub fn ph(&self) -> Option<f64> {
        self.ph.and_then(finite)
    }

    /// Temperature, if present and finite
    pub fn suhu(&self) -> Option<f64> {
        self.suhu.and_then(finite)
    }

    /// Relative humidity, if present and finite
    pub fn kelembaban(&self) -> Option<f64> {
        self.kelembaban.and_then(finite)
    }

    /// Companion value for `metric`, if that metric has a companion slot
    pub fn companion(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Ph => self.ph(),
            Metric::Suhu => self.suhu(),
            Metric::Kelembaban => self.kelembaban(),
            _ => None,
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Companion slot from a raw store value; placeholders become absent
#[cfg(feature = "serde")]
fn store_reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Reading::deserialize(deserializer)?.get())
}

/// Cross-variable escalation rule
///
/// A rule is bound to one `(domain, metric)` pair and reads one companion
/// metric from [`Extras`]. It only runs after the single-variable verdict
/// exists, and only when both the value and the companion are finite.
///
/// Implementations return the level they propose. The rule set keeps the more
/// severe of that and the current level, so a rule cannot downgrade.
pub trait CompositeRule {
    /// Domain this rule applies to
    fn domain(&self) -> Domain;

    /// Metric this rule applies to
    fn metric(&self) -> Metric;

    /// Companion metric the rule needs
    fn companion(&self) -> Metric;

    /// Propose a level for `value` given the companion reading
    fn evaluate(&self, value: f64, companion: f64, current: Level) -> Level;

    /// Whether the rule is bound to this `(domain, metric)` pair
    fn applies_to(&self, domain: Domain, metric: Metric) -> bool {
        self.domain() == domain && self.metric() == metric
    }
}
