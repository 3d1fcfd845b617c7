//! Livestock pen heat stress
//!
//! Escalates pen temperature when humidity is high at the same time:
//! - temperature above 30 °C with RH at or above 75 % is danger
//! - temperature from 28 °C with RH at or above 70 % is at least warning

use crate::{
    constants::thresholds::{
        HEAT_STRESS_DANGER_ABOVE_C, HEAT_STRESS_DANGER_MIN_RH_PCT,
        HEAT_STRESS_WARNING_FROM_C, HEAT_STRESS_WARNING_MIN_RH_PCT,
    },
    domain::{Domain, Metric},
    level::Level,
    traits::CompositeRule,
};

/// Combined temperature and humidity rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatStressRule {
    domain: Domain,
    danger_above_c: f64,
    danger_min_rh: f64,
    warning_from_c: f64,
    warning_min_rh: f64,
}

/// The deployed pen rule
pub static PEN_HEAT_STRESS: HeatStressRule = HeatStressRule::livestock_pen();

impl HeatStressRule {
    /// Thresholds used for livestock pens
    pub const fn livestock_pen() -> Self {
        Self {
            domain: Domain::Kandang,
            danger_above_c: HEAT_STRESS_DANGER_ABOVE_C,
            danger_min_rh: HEAT_STRESS_DANGER_MIN_RH_PCT,
            warning_from_c: HEAT_STRESS_WARNING_FROM_C,
            warning_min_rh: HEAT_STRESS_WARNING_MIN_RH_PCT,
        }
    }
}

impl CompositeRule for HeatStressRule {
    fn domain(&self) -> Domain {
        self.domain
    }

    fn metric(&self) -> Metric {
        Metric::Suhu
    }

    fn companion(&self) -> Metric {
        Metric::Kelembaban
    }

    fn evaluate(&self, temp_c: f64, humidity: f64, current: Level) -> Level {
        if temp_c > self.danger_above_c && humidity >= self.danger_min_rh {
            Level::Danger
        } else if temp_c >= self.warning_from_c
            && humidity >= self.warning_min_rh
            && current.rank() < Level::Warning.rank()
        {
            Level::Warning
        } else {
            current
        }
    }
}
