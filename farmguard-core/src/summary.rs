//! Domain summaries
//!
//! A dashboard card or digital-twin panel shows one tint per domain: the worst
//! level among its metrics. [`summarize`] classifies a snapshot of readings
//! for one domain, using the same snapshot for companion readings, and rolls
//! the verdicts up.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    classify::{ClassificationResult, Classifier},
    domain::{Domain, Metric},
    level::Level,
    traits::Extras,
};

/// One classified metric within a summary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MetricStatus {
    /// Metric classified
    pub metric: Metric,
    /// Raw value as supplied
    pub value: f64,
    /// Full classification result
    pub result: ClassificationResult,
}

/// Number of metrics at each level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LevelCounts {
    /// Metrics in the healthy interval
    pub ok: usize,
    /// Metrics in a warning zone
    pub warning: usize,
    /// Metrics past a hard limit
    pub danger: usize,
    /// Metrics that could not be classified
    pub unknown: usize,
}

impl LevelCounts {
    /// Count one more metric at `level`
    pub fn record(&mut self, level: Level) {
        match level {
            Level::Ok => self.ok += 1,
            Level::Warning => self.warning += 1,
            Level::Danger => self.danger += 1,
            Level::Unknown => self.unknown += 1,
        }
    }

    /// Count at `level`
    pub fn get(&self, level: Level) -> usize {
        match level {
            Level::Ok => self.ok,
            Level::Warning => self.warning,
            Level::Danger => self.danger,
            Level::Unknown => self.unknown,
        }
    }

    /// Total metrics counted
    pub fn total(&self) -> usize {
        self.ok + self.warning + self.danger + self.unknown
    }
}

/// Rolled-up status of one domain
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DomainSummary {
    /// Domain summarized
    pub domain: Domain,
    /// Worst level among the metrics, `Unknown` when there are none
    pub overall: Level,
    /// Per-metric results, in input order
    pub metrics: Vec<MetricStatus>,
    /// Per-level counts
    pub counts: LevelCounts,
}

impl DomainSummary {
    /// Result for `metric`, if it was part of the snapshot
    pub fn get(&self, metric: Metric) -> Option<&MetricStatus> {
        self.metrics.iter().find(|status| status.metric == metric)
    }

    /// Metrics at `level`
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &MetricStatus> + '_ {
        self.metrics
            .iter()
            .filter(move |status| status.result.level == level)
    }

    /// True when any metric is past a hard limit
    pub fn needs_action(&self) -> bool {
        self.overall == Level::Danger
    }
}

/// Classify a domain snapshot and roll it up
pub fn summarize(
    classifier: &Classifier<'_>,
    domain: Domain,
    readings: &[(Metric, f64)],
) -> DomainSummary {
    let extras = Extras::from_readings(readings);
    let mut counts = LevelCounts::default();
    let mut overall = Level::Unknown;

    let metrics: Vec<MetricStatus> = readings
        .iter()
        .map(|&(metric, value)| {
            let result = classifier.classify(domain, metric, value, &extras);
            counts.record(result.level);
            overall = overall.escalate(result.level);
            MetricStatus {
                metric,
                value,
                result,
            }
        })
        .collect();

    log_debug!("{} summary: {} over {} metrics", domain, overall, metrics.len());

    DomainSummary {
        domain,
        overall,
        metrics,
        counts,
    }
}

impl<'a> Classifier<'a> {
    /// Classify a domain snapshot and roll it up, see [`summarize`]
    pub fn summarize(&self, domain: Domain, readings: &[(Metric, f64)]) -> DomainSummary {
        summarize(self, domain, readings)
    }
}
