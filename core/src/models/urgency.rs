//! Urgency model
//!
//! Turnaround tiers scale the price by a fixed multiplier. The standard
//! 14-day turnaround is the ×1.0 baseline, so an unset urgency and an
//! explicit 14-day selection price identically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseSelectionError;

/// Multiplier used when urgency is unset or a raw slug does not match
pub const FALLBACK_URGENCY_MULTIPLIER: f64 = 1.0;

/// Requested turnaround for the paperwork
///
/// Serializes to the wire slug used by the original order form
/// (`1-day`, `3-days`, `7-days`, `14-days`).
///
/// # Example
/// ```
/// use certpro_core::Urgency;
///
/// let urgency: Urgency = "1-day".parse().unwrap();
/// assert_eq!(urgency.multiplier(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    /// 1 день
    #[serde(rename = "1-day")]
    OneDay,
    /// 3 дня
    #[serde(rename = "3-days")]
    ThreeDays,
    /// 7 дней
    #[serde(rename = "7-days")]
    SevenDays,
    /// 14 дней
    #[serde(rename = "14-days")]
    FourteenDays,
}

impl Urgency {
    /// All urgency tiers, fastest first
    pub const ALL: [Urgency; 4] = [
        Urgency::OneDay,
        Urgency::ThreeDays,
        Urgency::SevenDays,
        Urgency::FourteenDays,
    ];

    /// Price multiplier for this turnaround
    pub fn multiplier(&self) -> f64 {
        match self {
            Urgency::OneDay => 2.0,
            Urgency::ThreeDays => 1.5,
            Urgency::SevenDays => 1.2,
            Urgency::FourteenDays => 1.0,
        }
    }

    /// Wire slug (the original form's option value)
    pub fn slug(&self) -> &'static str {
        match self {
            Urgency::OneDay => "1-day",
            Urgency::ThreeDays => "3-days",
            Urgency::SevenDays => "7-days",
            Urgency::FourteenDays => "14-days",
        }
    }

    /// Human-readable label shown to customers
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::OneDay => "1 день",
            Urgency::ThreeDays => "3 дня",
            Urgency::SevenDays => "7 дней",
            Urgency::FourteenDays => "14 дней",
        }
    }
}

impl FromStr for Urgency {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .iter()
            .copied()
            .find(|urgency| urgency.slug() == s)
            .ok_or_else(|| ParseSelectionError::UnknownUrgency { slug: s.to_string() })
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
