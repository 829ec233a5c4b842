//! Severity bands and the thresholds that define them.
//!
//! Raw distance classifies into five numeric bands; `Unknown` is the
//! explicit sixth outcome for functions where the intent or execution
//! coordinate is the zero sentinel. `Unknown` is never derived from a
//! distance and never conflated with "harmonious" or "critical".

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Classification of a function's name/implementation divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Intent and execution agree.
    Harmonious,
    Low,
    Medium,
    High,
    /// Name and implementation point at different verb families.
    Critical,
    /// Insufficient signal: intent or execution had no recognized tokens.
    Unknown,
}

impl Severity {
    /// All bands, in ascending order of concern (`Unknown` last).
    pub fn all() -> &'static [Severity] {
        &[
            Self::Harmonious,
            Self::Low,
            Self::Medium,
            Self::High,
            Self::Critical,
            Self::Unknown,
        ]
    }

    /// Band name as a lowercase string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Harmonious => "harmonious",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a band from its lowercase name.
    pub fn from_name(name: &str) -> Option<Severity> {
        Self::all().iter().copied().find(|s| s.name() == name)
    }

    /// Whether this band carries a meaningful numeric distance.
    pub fn is_scored(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Rank for "at least this severe" comparisons. `Unknown` ranks lowest:
    /// missing signal is never treated as a finding.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Harmonious => 1,
            Self::Low => 2,
            Self::Medium => 3,
            Self::High => 4,
            Self::Critical => 5,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ascending band boundaries over raw distance.
///
/// `distance < harmonious` ⇒ Harmonious, `< low` ⇒ Low, `< medium` ⇒ Medium,
/// `< high` ⇒ High, otherwise Critical. Policy constants, not derived — a
/// config may override any of them through the single injection point
/// (`HarmonyThresholds::validated`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonyThresholds {
    pub harmonious: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl HarmonyThresholds {
    /// Default boundaries: 0.25 / 0.5 / 0.8 / 1.2.
    pub const DEFAULT: HarmonyThresholds = HarmonyThresholds {
        harmonious: 0.25,
        low: 0.5,
        medium: 0.8,
        high: 1.2,
    };

    /// Build thresholds, rejecting non-ascending or negative boundaries.
    pub fn validated(
        harmonious: f64,
        low: f64,
        medium: f64,
        high: f64,
    ) -> Result<Self, ConfigError> {
        let candidate = Self {
            harmonious,
            low,
            medium,
            high,
        };
        let bounds = [harmonious, low, medium, high];
        let ascending = bounds.windows(2).all(|w| w[0] < w[1]);
        if harmonious < 0.0 || !ascending || bounds.iter().any(|b| !b.is_finite()) {
            return Err(ConfigError::ThresholdOrder {
                thresholds: format!("{harmonious} / {low} / {medium} / {high}"),
            });
        }
        Ok(candidate)
    }

    /// Classify a raw distance into its numeric band.
    ///
    /// Callers are responsible for the zero-sentinel policy; this function
    /// only sees distances that are meaningful.
    pub fn classify(&self, distance: f64) -> Severity {
        if distance < self.harmonious {
            Severity::Harmonious
        } else if distance < self.low {
            Severity::Low
        } else if distance < self.medium {
            Severity::Medium
        } else if distance < self.high {
            Severity::High
        } else {
            Severity::Critical
        }
    }
}

impl Default for HarmonyThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands() {
        let t = HarmonyThresholds::default();
        assert_eq!(t.classify(0.0), Severity::Harmonious);
        assert_eq!(t.classify(0.3), Severity::Low);
        assert_eq!(t.classify(0.5), Severity::Medium);
        assert_eq!(t.classify(0.8), Severity::High);
        assert_eq!(t.classify(1.2), Severity::Critical);
        assert_eq!(t.classify(std::f64::consts::SQRT_2), Severity::Critical);
    }

    #[test]
    fn non_ascending_thresholds_rejected() {
        assert!(HarmonyThresholds::validated(0.5, 0.5, 0.8, 1.2).is_err());
        assert!(HarmonyThresholds::validated(-0.1, 0.5, 0.8, 1.2).is_err());
        assert!(HarmonyThresholds::validated(0.25, 0.5, 0.8, 1.2).is_ok());
    }

    #[test]
    fn unknown_ranks_below_findings() {
        assert!(Severity::Unknown.rank() < Severity::Harmonious.rank());
        assert!(!Severity::Unknown.is_scored());
    }

    #[test]
    fn band_names_round_trip() {
        for s in Severity::all() {
            assert_eq!(Severity::from_name(s.name()), Some(*s));
        }
    }
}
