//! Threshold Registry
//!
//! Typed lookup table `Domain × Metric → BandDefinition`. Storage is a fixed
//! two-dimensional array indexed by the enum discriminants, so a lookup is two
//! array indexes and an unsupported pair is simply `None`.
//!
//! ## Lifecycle
//!
//! A registry is built once, either from [`ThresholdRegistry::standard`] or
//! through a [`RegistryBuilder`], and never mutated afterwards. It is `Send +
//! Sync` and can be shared by reference across every caller.
//!
//! ## Standard Table
//!
//! | Domain | Metric | ok | warn_low | warn_high |
//! |---|---|---|---|---|
//! | kolam | suhu | 26–30 °C | 24 | 32 |
//! | kolam | ph | 6.5–8.5 | 6.0 | 9.0 |
//! | kolam | oksigen | 5–∞ mg/L | 3 | - |
//! | kolam | amonia_total | 0–0.5 mg/L | - | 1.0 |
//! | kolam | uia | 0–0.02 mg/L | - | 0.05 |
//! | ulat | suhu | 23–28 °C | 20 | 31 |
//! | ulat | kelembaban | 70–85 %RH | 60 | 90 |
//! | ulat | intensitas_cahaya | 10–50 lux | - | 100 |
//! | kandang | suhu | 20–27 °C | 18 | 30 |
//! | kandang | kelembaban | 60–80 %RH | 50 | 90 |
//! | hidroponik | suhu | 18–24 °C | 15 | 28 |
//! | hidroponik | ph | 5.5–6.5 | 5.0 | 7.0 |
//! | hidroponik | ec | 1.2–2.4 mS/cm | 0.8 | 3.0 |
//! | hidroponik | intensitas_cahaya | 10000–40000 lux | 5000 | 60000 |
//! | penggunaan | energi | 0–50 kWh | - | 80 |
//! | penggunaan | air | 0–2000 L | - | 3000 |
//! | penggunaan | efisiensi | 80–100 % | 60 | - |

use alloc::borrow::Cow;

use crate::{
    band::BandDefinition,
    domain::{Domain, Metric},
    errors::BandError,
};

type BandTable = [[Option<BandDefinition>; Metric::COUNT]; Domain::COUNT];

/// Immutable `Domain × Metric → BandDefinition` table
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRegistry {
    bands: BandTable,
}

impl ThresholdRegistry {
    fn empty() -> Self {
        Self {
            bands: core::array::from_fn(|_| core::array::from_fn(|_| None)),
        }
    }

    /// Start an empty builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            registry: Self::empty(),
        }
    }

    /// Copy this registry into a builder, for overlaying overrides
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            registry: self.clone(),
        }
    }

    /// Band for `(domain, metric)`, if configured
    pub fn get(&self, domain: Domain, metric: Metric) -> Option<&BandDefinition> {
        self.bands[domain.index()][metric.index()].as_ref()
    }

    /// Band for string keys; unknown keys give `None`
    pub fn get_key(&self, domain: &str, metric: &str) -> Option<&BandDefinition> {
        let domain = domain.parse().ok()?;
        let metric = metric.parse().ok()?;
        self.get(domain, metric)
    }

    /// Whether `(domain, metric)` has a band
    pub fn contains(&self, domain: Domain, metric: Metric) -> bool {
        self.get(domain, metric).is_some()
    }

    /// Every configured band, in table order
    pub fn entries(&self) -> impl Iterator<Item = (Domain, Metric, &BandDefinition)> + '_ {
        Domain::ALL.into_iter().flat_map(move |domain| {
            self.metrics(domain)
                .map(move |(metric, band)| (domain, metric, band))
        })
    }

    /// Configured metrics of one domain
    pub fn metrics(&self, domain: Domain) -> impl Iterator<Item = (Metric, &BandDefinition)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(move |metric| self.get(domain, metric).map(|band| (metric, band)))
    }

    /// Number of configured bands
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// True when no band is configured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check every band's invariants, reporting the first offender
    pub fn validate(&self) -> Result<(), (Domain, Metric, BandError)> {
        for (domain, metric, band) in self.entries() {
            band.check().map_err(|e| (domain, metric, e))?;
        }
        Ok(())
    }

    /// The deployed thresholds
    pub fn standard() -> Self {
        use Domain::*;
        use Metric::*;

        let mut registry = Self::empty();
        let mut set = |domain: Domain, metric: Metric, band: BandDefinition| {
            registry.bands[domain.index()][metric.index()] = Some(band);
        };

        // Fish pond (tilapia / catfish)
        set(Kolam, Suhu, band(26.0, 30.0, Some(24.0), Some(32.0), "°C"));
        set(Kolam, Ph, band(6.5, 8.5, Some(6.0), Some(9.0), "pH"));
        // No such thing as too much oxygen
        set(Kolam, Oksigen, band(5.0, f64::INFINITY, Some(3.0), None, "mg/L"));
        set(
            Kolam,
            AmoniaTotal,
            band(0.0, 0.5, None, Some(1.0), "mg/L")
                .with_note("Approximate TAN proxy, used only when pH or temperature is missing"),
        );
        set(
            Kolam,
            Uia,
            band(0.0, 0.02, None, Some(0.05), "mg/L")
                .with_note("Un-ionized ammonia estimated from TAN, pH and temperature"),
        );

        // Silk-worm rearing tank
        set(Ulat, Suhu, band(23.0, 28.0, Some(20.0), Some(31.0), "°C"));
        set(Ulat, Kelembaban, band(70.0, 85.0, Some(60.0), Some(90.0), "%RH"));
        // Larvae prefer dim light; darkness is never a hazard
        set(Ulat, IntensitasCahaya, band(10.0, 50.0, None, Some(100.0), "lux"));

        // Livestock pen
        set(Kandang, Suhu, band(20.0, 27.0, Some(18.0), Some(30.0), "°C"));
        set(Kandang, Kelembaban, band(60.0, 80.0, Some(50.0), Some(90.0), "%RH"));

        // Hydroponic rack, nutrient solution and canopy
        set(Hidroponik, Suhu, band(18.0, 24.0, Some(15.0), Some(28.0), "°C"));
        set(Hidroponik, Ph, band(5.5, 6.5, Some(5.0), Some(7.0), "pH"));
        set(Hidroponik, Ec, band(1.2, 2.4, Some(0.8), Some(3.0), "mS/cm"));
        set(
            Hidroponik,
            IntensitasCahaya,
            band(10_000.0, 40_000.0, Some(5_000.0), Some(60_000.0), "lux"),
        );

        // Aggregate daily usage across the installation
        set(Penggunaan, Energi, band(0.0, 50.0, None, Some(80.0), "kWh"));
        set(Penggunaan, Air, band(0.0, 2_000.0, None, Some(3_000.0), "L"));
        set(Penggunaan, Efisiensi, band(80.0, 100.0, Some(60.0), None, "%"));

        registry
    }
}

impl Default for ThresholdRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn band(
    ok_min: f64,
    ok_max: f64,
    warn_low: Option<f64>,
    warn_high: Option<f64>,
    units: &'static str,
) -> BandDefinition {
    BandDefinition::from_parts(ok_min, ok_max, warn_low, warn_high, Cow::Borrowed(units))
}

/// Collects bands before freezing them into a [`ThresholdRegistry`]
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    registry: ThresholdRegistry,
}

impl RegistryBuilder {
    /// Set (or replace) the band for `(domain, metric)`
    pub fn band(mut self, domain: Domain, metric: Metric, band: BandDefinition) -> Self {
        self.registry.bands[domain.index()][metric.index()] = Some(band);
        self
    }

    /// Drop the band for `(domain, metric)`
    pub fn remove(mut self, domain: Domain, metric: Metric) -> Self {
        self.registry.bands[domain.index()][metric.index()] = None;
        self
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> ThresholdRegistry {
        self.registry
    }
}
