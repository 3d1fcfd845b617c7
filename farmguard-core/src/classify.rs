//! Classification Facade
//!
//! ## Overview
//!
//! The single entry point every screen calls. Given a domain, a metric, a
//! reading and its companion readings, it produces a [`ClassificationResult`]
//! with a machine-readable level and the text the UI shows next to it.
//!
//! ## Decision Flow
//!
//! ```text
//! (domain, metric, value, extras)
//!        │
//!        ├─ kolam/amonia_total with finite TAN, pH, temperature?
//!        │       yes → NH3 estimate → classify NH3 against kolam/uia → done
//!        │
//!        ├─ classify value against registry[domain][metric]
//!        │
//!        ├─ composite rules (escalate only)
//!        │
//!        └─ canned message, target, range, units
//! ```
//!
//! The ammonia path returns before the composite rules run. Its message
//! carries the NH3 estimate and the TAN, pH and temperature it came from, so
//! the derived number can be audited from the dashboard.
//!
//! ## Failure Policy
//!
//! Nothing here returns an error or panics. Unknown keys, missing bands and
//! non-finite readings all produce `Level::Unknown` with the "data not
//! available" message, and sibling metrics keep rendering.
//!
//! ## Usage
//!
//! ```rust
//! use farmguard_core::{Classifier, Domain, Extras, Level, Metric, RuleSet, ThresholdRegistry};
//!
//! // Inject the configuration explicitly...
//! let registry = ThresholdRegistry::standard();
//! let rules = RuleSet::standard();
//! let classifier = Classifier::new(&registry, &rules);
//!
//! let result = classifier.classify(Domain::Hidroponik, Metric::Ph, 7.0, &Extras::new());
//! assert_eq!(result.level, Level::Warning);
//! assert_eq!(result.target, "5.5–6.5 pH");
//!
//! // ...or use string keys straight from the realtime store
//! let level = classifier.klass_key("nonexistent", "xyz", 5.0, &Extras::new());
//! assert_eq!(level, Level::Unknown);
//! ```

use alloc::format;
use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    ammonia::{uia_from_tan, AmmoniaEquilibrium},
    band::{classify_by_bands, BandDefinition},
    constants::chemistry::FRESHWATER_SALINITY_PPT,
    domain::{Domain, Metric},
    level::Level,
    registry::ThresholdRegistry,
    rules::RuleSet,
    traits::Extras,
};

/// Target shown when no band exists
pub const NO_TARGET: &str = "-";

/// Outcome of classifying one reading
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClassificationResult {
    /// Severity level
    pub level: Level,

    /// Human-readable sentence for the level
    pub message: String,

    /// Healthy interval as display text, or `"-"`
    pub target: String,

    /// Healthy interval `(min, max)`, if a band exists
    pub range: Option<(f64, f64)>,

    /// Display unit, empty if no band exists
    pub units: String,

    /// NH3 estimate when the ammonia path ran
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub nh3: Option<AmmoniaEquilibrium>,
}

impl ClassificationResult {
    /// Result for readings that cannot be classified
    pub fn unknown() -> Self {
        Self::assemble(Level::Unknown, None)
    }

    fn assemble(level: Level, def: Option<&BandDefinition>) -> Self {
        match def {
            Some(def) => Self {
                level,
                message: level.message().to_string(),
                target: def.target(),
                range: Some(def.range()),
                units: def.units().to_string(),
                nh3: None,
            },
            None => Self {
                level,
                message: level.message().to_string(),
                target: NO_TARGET.to_string(),
                range: None,
                units: String::new(),
                nh3: None,
            },
        }
    }
}

/// Inputs of the ammonia path, all finite
#[derive(Debug, Clone, Copy)]
struct AmmoniaInputs {
    tan_mg_l: f64,
    ph: f64,
    temp_c: f64,
}

/// Classifier bound to one registry and rule set
///
/// Holds references only; cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    registry: &'a ThresholdRegistry,
    rules: &'a RuleSet,
}

impl<'a> Classifier<'a> {
    /// Bind a classifier to explicit configuration
    pub fn new(registry: &'a ThresholdRegistry, rules: &'a RuleSet) -> Self {
        Self { registry, rules }
    }

    /// Registry this classifier reads
    pub fn registry(&self) -> &'a ThresholdRegistry {
        self.registry
    }

    /// Rule set this classifier applies
    pub fn rules(&self) -> &'a RuleSet {
        self.rules
    }

    /// Classify a reading
    pub fn classify(
        &self,
        domain: Domain,
        metric: Metric,
        value: f64,
        extras: &Extras,
    ) -> ClassificationResult {
        if let Some(inputs) = Self::ammonia_inputs(domain, metric, value, extras) {
            return self.classify_ammonia(domain, inputs);
        }

        let def = self.registry.get(domain, metric);
        if def.is_none() {
            log_debug!("No band configured for {}/{}", domain, metric);
        }
        let level = self.direct_level(domain, metric, def, value, extras);
        ClassificationResult::assemble(level, def)
    }

    /// Level only, same decision as [`Classifier::classify`]
    pub fn klass(&self, domain: Domain, metric: Metric, value: f64, extras: &Extras) -> Level {
        if let Some(inputs) = Self::ammonia_inputs(domain, metric, value, extras) {
            let (level, _) = self.ammonia_level(domain, inputs);
            return level;
        }

        let def = self.registry.get(domain, metric);
        self.direct_level(domain, metric, def, value, extras)
    }

    /// Classify using store keys; unknown keys give an unknown result
    pub fn classify_key(
        &self,
        domain: &str,
        metric: &str,
        value: f64,
        extras: &Extras,
    ) -> ClassificationResult {
        match parse_keys(domain, metric) {
            Some((domain, metric)) => self.classify(domain, metric, value, extras),
            None => ClassificationResult::unknown(),
        }
    }

    /// Level only, using store keys
    pub fn klass_key(&self, domain: &str, metric: &str, value: f64, extras: &Extras) -> Level {
        match parse_keys(domain, metric) {
            Some((domain, metric)) => self.klass(domain, metric, value, extras),
            None => Level::Unknown,
        }
    }

    fn ammonia_inputs(
        domain: Domain,
        metric: Metric,
        value: f64,
        extras: &Extras,
    ) -> Option<AmmoniaInputs> {
        if domain != Domain::Kolam || metric != Metric::AmoniaTotal || !value.is_finite() {
            return None;
        }
        Some(AmmoniaInputs {
            tan_mg_l: value,
            ph: extras.ph()?,
            temp_c: extras.suhu()?,
        })
    }

    fn ammonia_level(&self, domain: Domain, inputs: AmmoniaInputs) -> (Level, AmmoniaEquilibrium) {
        let eq = uia_from_tan(
            inputs.tan_mg_l,
            inputs.ph,
            inputs.temp_c,
            FRESHWATER_SALINITY_PPT,
        );
        let def = self.registry.get(domain, Metric::Uia);
        let level = classify_by_bands(def, eq.nh3_mg_l);
        log_debug!(
            "NH3 {} mg/L from TAN {} at pH {}, {} °C -> {}",
            eq.nh3_mg_l, inputs.tan_mg_l, inputs.ph, inputs.temp_c, level
        );
        (level, eq)
    }

    fn classify_ammonia(&self, domain: Domain, inputs: AmmoniaInputs) -> ClassificationResult {
        let (level, eq) = self.ammonia_level(domain, inputs);
        let def = self.registry.get(domain, Metric::Uia);

        let mut result = ClassificationResult::assemble(level, def);
        result.message = if def.is_some() {
            format!(
                "{} NH3 {:.4} mg/L from TAN {} mg/L at pH {} and {} °C.",
                level.message(),
                eq.nh3_mg_l,
                inputs.tan_mg_l,
                inputs.ph,
                inputs.temp_c
            )
        } else {
            format!(
                "NH3 estimate {:.4} mg/L from TAN {} mg/L at pH {} and {} °C (no band configured).",
                eq.nh3_mg_l, inputs.tan_mg_l, inputs.ph, inputs.temp_c
            )
        };
        result.nh3 = Some(eq);
        result
    }

    fn direct_level(
        &self,
        domain: Domain,
        metric: Metric,
        def: Option<&BandDefinition>,
        value: f64,
        extras: &Extras,
    ) -> Level {
        let base = classify_by_bands(def, value);
        self.rules.apply(domain, metric, value, extras, base)
    }
}

fn parse_keys(domain: &str, metric: &str) -> Option<(Domain, Metric)> {
    match (domain.parse::<Domain>(), metric.parse::<Metric>()) {
        (Ok(domain), Ok(metric)) => Some((domain, metric)),
        _ => {
            log_debug!("Unrecognised keys {}/{}", domain, metric);
            None
        }
    }
}

#[cfg(feature = "std")]
mod standard {
    use super::*;

    lazy_static::lazy_static! {
        /// Deployed thresholds, built on first use
        pub(super) static ref STANDARD_REGISTRY: ThresholdRegistry = ThresholdRegistry::standard();

        /// Deployed composite rules, built on first use
        pub(super) static ref STANDARD_RULES: RuleSet = RuleSet::standard();
    }
}

#[cfg(feature = "std")]
impl Classifier<'static> {
    /// Classifier over the built-in standard registry and rules
    ///
    /// Not affected by threshold documents; services honouring site
    /// overrides use `farmguard_schemas::global_classifier()`.
    pub fn standard() -> Self {
        Classifier::new(&standard::STANDARD_REGISTRY, &standard::STANDARD_RULES)
    }
}

/// Classify a reading by store keys against the standard configuration
///
/// Always uses the built-in thresholds. Site overrides loaded by
/// `farmguard_schemas` are only seen through its `global_classifier()`.
#[cfg(feature = "std")]
pub fn classify(domain: &str, metric: &str, value: f64, extras: &Extras) -> ClassificationResult {
    Classifier::standard().classify_key(domain, metric, value, extras)
}

/// Level of a reading by store keys against the standard configuration
///
/// Built-in thresholds only, like [`classify`].
#[cfg(feature = "std")]
pub fn klass(domain: &str, metric: &str, value: f64, extras: &Extras) -> Level {
    Classifier::standard().klass_key(domain, metric, value, extras)
}

/// Typed [`classify`]
#[cfg(feature = "std")]
pub fn classify_typed(
    domain: Domain,
    metric: Metric,
    value: f64,
    extras: &Extras,
) -> ClassificationResult {
    Classifier::standard().classify(domain, metric, value, extras)
}

/// Typed [`klass`]
#[cfg(feature = "std")]
pub fn klass_typed(domain: Domain, metric: Metric, value: f64, extras: &Extras) -> Level {
    Classifier::standard().klass(domain, metric, value, extras)
}
