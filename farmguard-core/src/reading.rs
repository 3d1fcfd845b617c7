//! Reading normalization
//!
//! The realtime store hands over numbers, numeric strings, `null` and
//! placeholder strings such as `"-"`. Everything here collapses those into a
//! plain `f64`, with `NaN` standing for "no usable reading". The classifier
//! then reports `NaN` as `Level::Unknown`.

use core::fmt;

#[cfg(feature = "serde")]
use serde::de::{self, Deserialize, Deserializer, Visitor};

/// Parse a raw store value; anything that is not a finite number is `NaN`
pub fn parse_reading(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

/// Normalized sensor reading
///
/// Deserializes from a number, a numeric string, `null` or a placeholder
/// string. Non-finite values become `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reading(pub f64);

impl Reading {
    /// No usable reading
    pub const MISSING: Reading = Reading(f64::NAN);

    /// Wrap a raw value, mapping non-finite input to `NaN`
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Reading(value)
        } else {
            Self::MISSING
        }
    }

    /// Value to classify
    pub fn value(self) -> f64 {
        self.0
    }

    /// Finite value, if any
    pub fn get(self) -> Option<f64> {
        self.0.is_finite().then_some(self.0)
    }

    /// True when the reading can be classified
    pub fn is_present(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::new(value)
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::MISSING, Reading::new)
    }
}

impl From<&str> for Reading {
    fn from(raw: &str) -> Self {
        Reading(parse_reading(raw))
    }
}

impl From<Reading> for f64 {
    fn from(reading: Reading) -> Self {
        reading.0
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("-"),
        }
    }
}

#[cfg(feature = "serde")]
struct ReadingVisitor;

#[cfg(feature = "serde")]
impl<'de> Visitor<'de> for ReadingVisitor {
    type Value = Reading;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Reading, E> {
        Ok(Reading::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Reading, E> {
        Ok(Reading::new(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Reading, E> {
        Ok(Reading::new(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Reading, E> {
        Ok(Reading::from(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Reading, E> {
        Ok(Reading::MISSING)
    }

    fn visit_none<E: de::Error>(self) -> Result<Reading, E> {
        Ok(Reading::MISSING)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Reading, E> {
        Ok(Reading::MISSING)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Reading, D::Error> {
        deserializer.deserialize_any(ReadingVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ReadingVisitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Reading {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_none(),
        }
    }
}
