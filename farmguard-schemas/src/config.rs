//! JSON threshold documents
//!
//! Serde mirror of the core registry. Keys stay strings until the document is
//! applied so an unknown key is reported by name instead of as a generic
//! parse failure.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use farmguard_core::{BandDefinition, BandError, Domain, Metric, ThresholdRegistry};

use crate::SchemaError;

/// Table a document is applied on top of
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTable {
    /// Deployed thresholds
    #[default]
    Standard,
    /// Nothing; only the document's bands
    Empty,
}

/// One band as written in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BandConfig {
    /// Healthy interval; `null` upper bound is open
    pub ok: (f64, Option<f64>),

    /// Lower hard limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn_low: Option<f64>,

    /// Upper hard limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn_high: Option<f64>,

    /// Display unit
    #[serde(default)]
    pub units: String,

    /// Documentation note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BandConfig {
    /// Checked core band
    pub fn to_band(&self) -> Result<BandDefinition, BandError> {
        let (ok_min, ok_max) = self.ok;
        let band = BandDefinition::new(
            ok_min,
            ok_max.unwrap_or(f64::INFINITY),
            self.warn_low,
            self.warn_high,
            self.units.clone(),
        )?;

        Ok(match &self.note {
            Some(note) => band.with_note(note.clone()),
            None => band,
        })
    }
}

impl From<&BandDefinition> for BandConfig {
    fn from(band: &BandDefinition) -> Self {
        let ok_max = band.ok_max();
        Self {
            ok: (band.ok_min(), ok_max.is_finite().then_some(ok_max)),
            warn_low: band.warn_low(),
            warn_high: band.warn_high(),
            units: band.units().to_string(),
            note: band.note().map(str::to_string),
        }
    }
}

/// Threshold override document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistryConfig {
    /// Table the bands are applied to
    #[serde(default)]
    pub base: BaseTable,

    /// Domain key → metric key → band; `null` removes the entry
    #[serde(default)]
    pub bands: BTreeMap<String, BTreeMap<String, Option<BandConfig>>>,
}

impl RegistryConfig {
    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Document that rebuilds `registry` exactly, on an empty base
    pub fn from_registry(registry: &ThresholdRegistry) -> Self {
        let mut bands: BTreeMap<String, BTreeMap<String, Option<BandConfig>>> = BTreeMap::new();
        for (domain, metric, band) in registry.entries() {
            bands
                .entry(domain.key().to_string())
                .or_default()
                .insert(metric.key().to_string(), Some(BandConfig::from(band)));
        }
        Self {
            base: BaseTable::Empty,
            bands,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply the bands on top of `base`, ignoring the document's own base
    pub fn overlay(&self, base: &ThresholdRegistry) -> Result<ThresholdRegistry, SchemaError> {
        let mut builder = base.to_builder();

        for (domain_key, metrics) in &self.bands {
            let domain = Domain::from_str(domain_key)
                .map_err(|_| SchemaError::UnknownDomain(domain_key.clone()))?;

            for (metric_key, band) in metrics {
                let metric =
                    Metric::from_str(metric_key).map_err(|_| SchemaError::UnknownMetric {
                        domain,
                        metric: metric_key.clone(),
                    })?;

                builder = match band {
                    Some(band) => {
                        let band = band.to_band().map_err(|reason| SchemaError::InvalidBand {
                            domain,
                            metric,
                            reason,
                        })?;
                        log::debug!("Override {}/{}: {}", domain, metric, band.target());
                        builder.band(domain, metric, band)
                    }
                    None => {
                        log::debug!("Override {}/{}: removed", domain, metric);
                        builder.remove(domain, metric)
                    }
                };
            }
        }

        Ok(builder.build())
    }

    /// Registry described by this document, including its base
    pub fn build(&self) -> Result<ThresholdRegistry, SchemaError> {
        let base = match self.base {
            BaseTable::Standard => ThresholdRegistry::standard(),
            BaseTable::Empty => ThresholdRegistry::builder().build(),
        };
        self.overlay(&base)
    }
}

impl FromStr for RegistryConfig {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmguard_core::Level;

    #[test]
    fn open_upper_bound() {
        let band: BandConfig =
            serde_json::from_str(r#"{"ok": [5, null], "warnLow": 3, "units": "mg/L"}"#).unwrap();
        let band = band.to_band().unwrap();
        assert_eq!(band.ok_max(), f64::INFINITY);
        assert_eq!(band.classify(1e6), Level::Ok);
        assert_eq!(band.target(), "5–∞ mg/L");
    }

    #[test]
    fn empty_document_is_standard() {
        let config = RegistryConfig::from_json_str("{}").unwrap();
        assert_eq!(config.base, BaseTable::Standard);
        assert_eq!(config.build().unwrap(), ThresholdRegistry::standard());
    }

    #[test]
    fn overlay_replaces_and_removes() {
        let config = RegistryConfig::from_json_str(
            r#"{
                "bands": {
                    "kolam": {
                        "suhu": {"ok": [27, 31], "warnLow": 25, "warnHigh": 33, "units": "°C"},
                        "uia": null
                    }
                }
            }"#,
        )
        .unwrap();
        let registry = config.build().unwrap();

        let suhu = registry.get(Domain::Kolam, Metric::Suhu).unwrap();
        assert_eq!(suhu.range(), (27.0, 31.0));
        assert!(!registry.contains(Domain::Kolam, Metric::Uia));
        assert!(registry.contains(Domain::Kandang, Metric::Suhu));
    }

    #[test]
    fn empty_base() {
        let config = RegistryConfig::from_json_str(
            r#"{"base": "empty", "bands": {"kandang": {"suhu": {"ok": [18, 25], "units": "°C"}}}}"#,
        )
        .unwrap();
        let registry = config.build().unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_keys_are_named() {
        let err = RegistryConfig::from_json_str(r#"{"bands": {"gudang": {}}}"#)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownDomain(ref key) if key == "gudang"));

        let err = RegistryConfig::from_json_str(
            r#"{"bands": {"kolam": {"salinitas": {"ok": [0, 5]}}}}"#,
        )
        .unwrap()
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnknownMetric { domain: Domain::Kolam, ref metric } if metric == "salinitas"
        ));
    }

    #[test]
    fn invalid_band_is_rejected() {
        let err = RegistryConfig::from_json_str(
            r#"{"bands": {"kolam": {"ph": {"ok": [8.5, 6.5], "units": "pH"}}}}"#,
        )
        .unwrap()
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidBand {
                domain: Domain::Kolam,
                metric: Metric::Ph,
                reason: BandError::InvertedOk { .. },
            }
        ));
    }

    #[test]
    fn misspelled_field_is_a_parse_error() {
        let err = RegistryConfig::from_json_str(
            r#"{"bands": {"kolam": {"ph": {"ok": [6.5, 8.5], "warn_low": 6}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn standard_table_round_trips() {
        let standard = ThresholdRegistry::standard();
        let json = RegistryConfig::from_registry(&standard)
            .to_json_string()
            .unwrap();
        let rebuilt = RegistryConfig::from_json_str(&json).unwrap().build().unwrap();
        assert_eq!(rebuilt, standard);
    }
}
