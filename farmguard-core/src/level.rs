//! Health status levels
//!
//! Levels are totally ordered by severity:
//!
//! ```text
//! Danger (3) > Warning (2) > Ok (1) > Unknown (0)
//! ```
//!
//! Escalation always goes through [`Level::escalate`], which keeps the more
//! severe of two levels and so can never downgrade a verdict.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification outcome for a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// No definition, or the reading is missing or not a number
    #[default]
    Unknown = 0,
    /// Inside the healthy interval
    Ok = 1,
    /// Outside the healthy interval but not past a hard limit
    Warning = 2,
    /// Past a hard limit
    Danger = 3,
}

impl Level {
    /// All levels, least severe first
    pub const ALL: [Level; 4] = [Level::Unknown, Level::Ok, Level::Warning, Level::Danger];

    /// Severity rank, 0 for `Unknown` up to 3 for `Danger`
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Keep whichever of the two levels is more severe
    pub fn escalate(self, proposed: Level) -> Level {
        if proposed.rank() > self.rank() {
            proposed
        } else {
            self
        }
    }

    /// Wire name used by the dashboard
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Unknown => "unknown",
            Level::Ok => "ok",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }

    /// Canned user-facing sentence for this level
    pub const fn message(self) -> &'static str {
        match self {
            Level::Ok => "Within the healthy range.",
            Level::Warning => "Approaching the limit, check conditions soon.",
            Level::Danger => "Past the safe limit, act immediately.",
            Level::Unknown => "Data not available.",
        }
    }

    /// True for anything other than `Unknown`
    pub const fn is_known(self) -> bool {
        !matches!(self, Level::Unknown)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order() {
        assert!(Level::Danger > Level::Warning);
        assert!(Level::Warning > Level::Ok);
        assert!(Level::Ok > Level::Unknown);
        assert_eq!(Level::Danger.rank(), 3);
        assert_eq!(Level::Unknown.rank(), 0);
    }

    #[test]
    fn escalate_never_downgrades() {
        for current in Level::ALL {
            for proposed in Level::ALL {
                let result = current.escalate(proposed);
                assert!(result >= current);
                assert!(result >= proposed);
            }
        }
    }

    #[test]
    fn messages_are_distinct() {
        let mut seen = Vec::new();
        for level in Level::ALL {
            assert!(!seen.contains(&level.message()));
            seen.push(level.message());
        }
    }

    #[test]
    fn wire_names() {
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::default(), Level::Unknown);
    }
}
