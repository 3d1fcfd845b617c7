//! Shared fixtures for integration tests
//!
//! Field scenarios with known verdicts, plus small helpers for building
//! classifiers over custom configuration.

#![allow(dead_code)]

use farmguard_core::{Domain, Extras, Level, Metric};

/// Reading with its companions and the verdict it must produce
pub struct Scenario {
    pub name: &'static str,
    pub domain: Domain,
    pub metric: Metric,
    pub value: f64,
    pub extras: Extras,
    pub expected: Level,
}

/// Field scenarios seen on real installations
pub fn field_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "pond ammonia, alkaline and warm",
            domain: Domain::Kolam,
            metric: Metric::AmoniaTotal,
            value: 1.2,
            extras: Extras::new().with_ph(8.2).with_suhu(28.0),
            expected: Level::Danger,
        },
        Scenario {
            name: "pen, hot and humid",
            domain: Domain::Kandang,
            metric: Metric::Suhu,
            value: 31.0,
            extras: Extras::new().with_kelembaban(80.0),
            expected: Level::Danger,
        },
        Scenario {
            name: "pen, warm and humid",
            domain: Domain::Kandang,
            metric: Metric::Suhu,
            value: 29.0,
            extras: Extras::new().with_kelembaban(72.0),
            expected: Level::Warning,
        },
        Scenario {
            name: "hydroponic solution slightly alkaline",
            domain: Domain::Hidroponik,
            metric: Metric::Ph,
            value: 7.0,
            extras: Extras::new(),
            expected: Level::Warning,
        },
        Scenario {
            name: "pond ammonia, neutral and cool",
            domain: Domain::Kolam,
            metric: Metric::AmoniaTotal,
            value: 0.3,
            extras: Extras::new().with_ph(7.0).with_suhu(25.0),
            expected: Level::Ok,
        },
        Scenario {
            name: "pond ammonia, mildly alkaline",
            domain: Domain::Kolam,
            metric: Metric::AmoniaTotal,
            value: 1.0,
            extras: Extras::new().with_ph(7.5).with_suhu(28.0),
            expected: Level::Warning,
        },
        Scenario {
            name: "pond ammonia, temperature sensor offline",
            domain: Domain::Kolam,
            metric: Metric::AmoniaTotal,
            value: 0.8,
            extras: Extras::new().with_ph(7.5),
            expected: Level::Warning,
        },
        Scenario {
            name: "pond oxygen, supersaturated",
            domain: Domain::Kolam,
            metric: Metric::Oksigen,
            value: 14.0,
            extras: Extras::new(),
            expected: Level::Ok,
        },
        Scenario {
            name: "silk-worm tank, dry air",
            domain: Domain::Ulat,
            metric: Metric::Kelembaban,
            value: 55.0,
            extras: Extras::new(),
            expected: Level::Danger,
        },
        Scenario {
            name: "daily water use over budget",
            domain: Domain::Penggunaan,
            metric: Metric::Air,
            value: 2_400.0,
            extras: Extras::new(),
            expected: Level::Warning,
        },
        Scenario {
            name: "pen temperature missing",
            domain: Domain::Kandang,
            metric: Metric::Suhu,
            value: f64::NAN,
            extras: Extras::new().with_kelembaban(90.0),
            expected: Level::Unknown,
        },
    ]
}

/// Strictly increasing sample points across `[lo, hi]`
pub fn sweep(lo: f64, hi: f64, steps: usize) -> Vec<f64> {
    (0..=steps)
        .map(|i| lo + (hi - lo) * i as f64 / steps as f64)
        .collect()
}
