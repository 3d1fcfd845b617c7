//! Cross-Variable Escalation Rules
//!
//! ## Overview
//!
//! Some conditions are only dangerous in combination. A pen at 29 °C is
//! uncomfortable; at 29 °C and 80 % relative humidity animals cannot shed heat
//! by evaporation and heat stress sets in. Single-metric bands cannot see
//! this, so composite rules run after the banded verdict and may raise it.
//!
//! ## Guarantees
//!
//! 1. **Escalation only**: the rule set combines a rule's proposal with the
//!    current level through [`Level::escalate`]. Comparison is by severity
//!    rank, so a rule can never lower a verdict.
//! 2. **Base verdict first**: [`RuleSet::apply`] takes the banded level as
//!    input; there is no way to consult a rule before it exists.
//! 3. **Complete inputs only**: a rule is skipped when the value or its
//!    companion reading is missing or not finite.
//!
//! ## Extending
//!
//! Add a type implementing [`CompositeRule`](crate::traits::CompositeRule),
//! give it a `static` instance and register it with [`RuleSet::with_rule`].
//!
//! ```rust
//! use farmguard_core::{Domain, Extras, Level, Metric, RuleSet};
//!
//! let rules = RuleSet::standard();
//! let extras = Extras::new().with_kelembaban(80.0);
//!
//! // 31 °C in a humid pen is danger whatever the band said
//! let level = rules.apply(Domain::Kandang, Metric::Suhu, 31.0, &extras, Level::Warning);
//! assert_eq!(level, Level::Danger);
//! ```

mod heat_stress;

pub use heat_stress::{HeatStressRule, PEN_HEAT_STRESS};

use heapless::Vec;

use crate::{
    constants::thresholds::MAX_COMPOSITE_RULES,
    domain::{Domain, Metric},
    errors::RuleError,
    level::Level,
    traits::{CompositeRule, Extras},
};

// The standard set must fit
const _: () = assert!(MAX_COMPOSITE_RULES >= 1);

/// Shared rule reference held by a rule set
pub type RuleRef = &'static (dyn CompositeRule + Sync);

/// Fixed-capacity collection of composite rules
///
/// Built once at startup and only read afterwards.
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<RuleRef, MAX_COMPOSITE_RULES>,
}

impl RuleSet {
    /// Rule set without any rules
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The deployed rules: livestock pen heat stress
    pub fn standard() -> Self {
        match Self::empty().with_rule(&PEN_HEAT_STRESS) {
            Ok(rules) => rules,
            Err(_) => {
                log_warn!("Rule set cannot hold the standard rules");
                Self::empty()
            }
        }
    }

    /// Add a rule
    pub fn with_rule(mut self, rule: RuleRef) -> Result<Self, RuleError> {
        self.rules
            .push(rule)
            .map_err(|_| RuleError::CapacityExceeded {
                capacity: MAX_COMPOSITE_RULES,
            })?;
        Ok(self)
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether any rule is bound to `(domain, metric)`
    pub fn covers(&self, domain: Domain, metric: Metric) -> bool {
        self.rules.iter().any(|rule| rule.applies_to(domain, metric))
    }

    /// Run every matching rule over the base verdict, escalating only
    pub fn apply(
        &self,
        domain: Domain,
        metric: Metric,
        value: f64,
        extras: &Extras,
        base: Level,
    ) -> Level {
        if !value.is_finite() {
            return base;
        }

        self.rules
            .iter()
            .filter(|rule| rule.applies_to(domain, metric))
            .fold(base, |current, rule| {
                match extras.companion(rule.companion()) {
                    Some(companion) => {
                        let proposed = rule.evaluate(value, companion, current);
                        let escalated = current.escalate(proposed);
                        if escalated != current {
                            log_debug!(
                                "{}/{} escalated {} -> {} (companion {}={})",
                                domain, metric, current, escalated,
                                rule.companion(), companion
                            );
                        }
                        escalated
                    }
                    None => current,
                }
            })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl core::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| (rule.domain(), rule.metric())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Misbehaving rule that always proposes `Ok`
    struct AlwaysOk;

    impl CompositeRule for AlwaysOk {
        fn domain(&self) -> Domain {
            Domain::Kolam
        }
        fn metric(&self) -> Metric {
            Metric::Suhu
        }
        fn companion(&self) -> Metric {
            Metric::Ph
        }
        fn evaluate(&self, _value: f64, _companion: f64, _current: Level) -> Level {
            Level::Ok
        }
    }

    static ALWAYS_OK: AlwaysOk = AlwaysOk;

    #[test]
    fn standard_covers_pen_temperature_only() {
        let rules = RuleSet::standard();
        assert_eq!(rules.len(), 1);
        assert!(rules.covers(Domain::Kandang, Metric::Suhu));
        assert!(!rules.covers(Domain::Kolam, Metric::Suhu));
        assert!(!rules.covers(Domain::Kandang, Metric::Kelembaban));
    }

    #[test]
    fn standard_leaves_room_for_site_rules() {
        let rules = RuleSet::standard();
        assert!(rules.len() < MAX_COMPOSITE_RULES);
        let extended = rules.with_rule(&ALWAYS_OK).unwrap();
        assert_eq!(extended.len(), 2);
        assert!(extended.covers(Domain::Kandang, Metric::Suhu));
    }

    #[test]
    fn rule_cannot_downgrade() {
        let rules = RuleSet::empty().with_rule(&ALWAYS_OK).unwrap();
        let extras = Extras::new().with_ph(7.0);
        let level = rules.apply(Domain::Kolam, Metric::Suhu, 35.0, &extras, Level::Danger);
        assert_eq!(level, Level::Danger);
    }

    #[test]
    fn missing_companion_skips_rule() {
        let rules = RuleSet::standard();
        let level = rules.apply(Domain::Kandang, Metric::Suhu, 31.0, &Extras::new(), Level::Ok);
        assert_eq!(level, Level::Ok);
    }

    #[test]
    fn non_finite_value_skips_rules() {
        let rules = RuleSet::standard();
        let extras = Extras::new().with_kelembaban(90.0);
        let level = rules.apply(Domain::Kandang, Metric::Suhu, f64::NAN, &extras, Level::Unknown);
        assert_eq!(level, Level::Unknown);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut rules = RuleSet::empty();
        for _ in 0..MAX_COMPOSITE_RULES {
            rules = rules.with_rule(&ALWAYS_OK).unwrap();
        }
        assert_eq!(
            rules.with_rule(&ALWAYS_OK).err(),
            Some(RuleError::CapacityExceeded { capacity: MAX_COMPOSITE_RULES })
        );
    }
}
