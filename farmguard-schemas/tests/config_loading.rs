//! Integration tests for threshold documents on disk

use std::io::Write;

use farmguard_core::{Classifier, Domain, Extras, Level, Metric, RuleSet, ThresholdRegistry};
use farmguard_schemas::{RegistryConfig, SchemaError};
use tempfile::NamedTempFile;

/// Catfish site: warmer pond water, stricter ammonia
const CATFISH_SITE: &str = r#"{
    "base": "standard",
    "bands": {
        "kolam": {
            "suhu": { "ok": [26, 32], "warnLow": 24, "warnHigh": 34, "units": "°C" },
            "uia": { "ok": [0, 0.015], "warnHigh": 0.04, "units": "mg/L", "note": "Site limit" }
        }
    }
}"#;

fn write_document(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_site_document_changes_verdicts() {
    let file = write_document(CATFISH_SITE);
    let registry = RegistryConfig::from_path(file.path()).unwrap().build().unwrap();
    let rules = RuleSet::standard();
    let classifier = Classifier::new(&registry, &rules);
    let none = Extras::new();

    // 31.5 °C: warning on the standard table, fine for catfish
    assert_eq!(
        Classifier::standard().klass(Domain::Kolam, Metric::Suhu, 31.5, &none),
        Level::Warning
    );
    assert_eq!(classifier.klass(Domain::Kolam, Metric::Suhu, 31.5, &none), Level::Ok);

    // NH3 ≈ 0.0216 mg/L: warning either way, target follows the site band
    let extras = Extras::new().with_ph(7.5).with_suhu(28.0);
    let result = classifier.classify(Domain::Kolam, Metric::AmoniaTotal, 1.0, &extras);
    assert_eq!(result.level, Level::Warning);
    assert_eq!(result.target, "0–0.015 mg/L");

    let uia = registry.get(Domain::Kolam, Metric::Uia).unwrap();
    assert_eq!(uia.note(), Some("Site limit"));
}

#[test]
fn test_exported_table_reloads() {
    let standard = ThresholdRegistry::standard();
    let json = RegistryConfig::from_registry(&standard).to_json_string().unwrap();
    let file = write_document(&json);

    let reloaded = RegistryConfig::from_path(file.path()).unwrap().build().unwrap();
    assert_eq!(reloaded, standard);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RegistryConfig::from_path(dir.path().join("thresholds.json")).unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
    assert!(err.to_string().contains("thresholds.json"));
}

#[test]
fn test_bad_document_is_rejected_whole() {
    let file = write_document(
        r#"{"bands": {"kolam": {
            "suhu": {"ok": [26, 32], "units": "°C"},
            "ph": {"ok": [6.5, 8.5], "warnLow": 7.0, "units": "pH"}
        }}}"#,
    );
    let err = RegistryConfig::from_path(file.path()).unwrap().build().unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidBand { domain: Domain::Kolam, metric: Metric::Ph, .. }
    ));
    assert!(err.to_string().contains("kolam/ph"));
}
