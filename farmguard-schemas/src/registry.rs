//! Process-wide threshold registry
//!
//! Services classify against one registry for their whole lifetime. It is
//! built on first use and never rebuilt; restart the process to pick up a new
//! threshold document.

use std::env;

use farmguard_core::{Classifier, RuleSet, ThresholdRegistry};

use crate::{RegistryConfig, SchemaError};

/// Environment variable naming a threshold document
pub const THRESHOLDS_ENV: &str = "FARMGUARD_THRESHOLDS";

lazy_static::lazy_static! {
    /// Registry in force for this process
    pub static ref GLOBAL_REGISTRY: ThresholdRegistry = load_from_env();

    /// Composite rules in force for this process
    pub static ref GLOBAL_RULES: RuleSet = RuleSet::standard();
}

/// Classifier over [`GLOBAL_REGISTRY`] and [`GLOBAL_RULES`]
///
/// Dashboard services call this rather than `farmguard_core::classify`,
/// which only knows the built-in thresholds.
pub fn global_classifier() -> Classifier<'static> {
    Classifier::new(&GLOBAL_REGISTRY, &GLOBAL_RULES)
}

fn load_from_env() -> ThresholdRegistry {
    match env::var_os(THRESHOLDS_ENV) {
        Some(path) => load_or_standard(&path),
        None => ThresholdRegistry::standard(),
    }
}

/// Registry from the document at `path`, or the standard table if it fails
pub(crate) fn load_or_standard(path: impl AsRef<std::path::Path>) -> ThresholdRegistry {
    let path = path.as_ref();
    match load(path) {
        Ok(registry) => {
            log::info!(
                "Loaded {} threshold bands from {}",
                registry.len(),
                path.display()
            );
            registry
        }
        Err(e) => {
            log::warn!(
                "Ignoring threshold document {}: {}; using standard thresholds",
                path.display(),
                e
            );
            ThresholdRegistry::standard()
        }
    }
}

fn load(path: &std::path::Path) -> Result<ThresholdRegistry, SchemaError> {
    let registry = RegistryConfig::from_path(path)?.build()?;
    if registry.is_empty() {
        log::warn!("Threshold document {} leaves no bands", path.display());
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmguard_core::{Domain, Extras, Level, Metric};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn global_classifier_classifies() {
        let classifier = global_classifier();
        assert_eq!(
            classifier.klass(Domain::Hidroponik, Metric::Ph, 6.0, &Extras::new()),
            Level::Ok
        );
        assert_eq!(GLOBAL_RULES.len(), 1);
    }

    #[test]
    fn global_classifier_reads_global_registry() {
        let classifier = global_classifier();
        assert!(std::ptr::eq(classifier.registry(), &*GLOBAL_REGISTRY));
        assert!(std::ptr::eq(classifier.rules(), &*GLOBAL_RULES));
        assert!(!std::ptr::eq(
            classifier.registry(),
            farmguard_core::Classifier::standard().registry()
        ));
    }

    #[test]
    fn broken_document_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ not json").unwrap();
        file.flush().unwrap();

        assert_eq!(load_or_standard(file.path()), ThresholdRegistry::standard());
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let registry = load_or_standard(dir.path().join("absent.json"));
        assert_eq!(registry, ThresholdRegistry::standard());
    }

    #[test]
    fn valid_document_applies() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"bands": {{"kandang": {{"suhu": {{"ok": [18, 25], "warnLow": 15, "warnHigh": 28, "units": "°C"}}}}}}}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let registry = load_or_standard(file.path());
        let band = registry.get(Domain::Kandang, Metric::Suhu).unwrap();
        assert_eq!(band.range(), (18.0, 25.0));
        assert_eq!(registry.len(), ThresholdRegistry::standard().len());
    }
}
