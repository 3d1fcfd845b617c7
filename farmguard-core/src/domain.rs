//! Cultivation domains and metrics
//!
//! The realtime store keys readings by domain name (`kolam`, `kandang`, ...)
//! and metric name (`suhu`, `ph`, ...). These enums are the typed form of
//! those keys; `FromStr` accepts exactly the store's spelling.
//!
//! | Key | Domain |
//! |---|---|
//! | `kolam` | fish pond |
//! | `ulat` | silk-worm tank |
//! | `kandang` | livestock pen |
//! | `hidroponik` | hydroponic rack |
//! | `penggunaan` | aggregate resource usage |

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::KeyError;

/// Cultivation subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Domain {
    /// Fish pond
    Kolam,
    /// Silk-worm rearing tank
    Ulat,
    /// Livestock pen
    Kandang,
    /// Hydroponic rack
    Hidroponik,
    /// Aggregate energy and water usage
    Penggunaan,
}

impl Domain {
    /// Number of domains
    pub const COUNT: usize = 5;

    /// Every domain, in registry order
    pub const ALL: [Domain; Domain::COUNT] = [
        Domain::Kolam,
        Domain::Ulat,
        Domain::Kandang,
        Domain::Hidroponik,
        Domain::Penggunaan,
    ];

    /// Store key
    pub const fn key(self) -> &'static str {
        match self {
            Domain::Kolam => "kolam",
            Domain::Ulat => "ulat",
            Domain::Kandang => "kandang",
            Domain::Hidroponik => "hidroponik",
            Domain::Penggunaan => "penggunaan",
        }
    }

    /// Row index in the registry table
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Domain {
    type Err = KeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|domain| domain.key() == key)
            .ok_or(KeyError::UnknownDomain)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Measured quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Temperature (°C)
    Suhu,
    /// pH
    Ph,
    /// Dissolved oxygen (mg/L)
    Oksigen,
    /// Total ammonia nitrogen (mg/L)
    AmoniaTotal,
    /// Un-ionized ammonia derived from TAN, pH and temperature (mg/L)
    Uia,
    /// Electrical conductivity of nutrient solution (mS/cm)
    Ec,
    /// Relative humidity (%RH)
    Kelembaban,
    /// Illuminance (lux)
    IntensitasCahaya,
    /// Energy use (kWh)
    Energi,
    /// Water use (L)
    Air,
    /// Resource efficiency (%)
    Efisiensi,
}

impl Metric {
    /// Number of metrics
    pub const COUNT: usize = 11;

    /// Every metric, in registry order
    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::Suhu,
        Metric::Ph,
        Metric::Oksigen,
        Metric::AmoniaTotal,
        Metric::Uia,
        Metric::Ec,
        Metric::Kelembaban,
        Metric::IntensitasCahaya,
        Metric::Energi,
        Metric::Air,
        Metric::Efisiensi,
    ];

    /// Store key
    pub const fn key(self) -> &'static str {
        match self {
            Metric::Suhu => "suhu",
            Metric::Ph => "ph",
            Metric::Oksigen => "oksigen",
            Metric::AmoniaTotal => "amonia_total",
            Metric::Uia => "uia",
            Metric::Ec => "ec",
            Metric::Kelembaban => "kelembaban",
            Metric::IntensitasCahaya => "intensitas_cahaya",
            Metric::Energi => "energi",
            Metric::Air => "air",
            Metric::Efisiensi => "efisiensi",
        }
    }

    /// Column index in the registry table
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Metric {
    type Err = KeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.key() == key)
            .ok_or(KeyError::UnknownMetric)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
