use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical five-level risk taxonomy shared by every assessment.
///
/// Ordered from least to most concerning so results from different
/// assessments can be compared and trended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StandardRiskLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Severe,
}

impl StandardRiskLevel {
    pub const ALL: [StandardRiskLevel; 5] = [
        Self::Minimal,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for StandardRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of scoring one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    /// Assessment-specific numeric score (points, percent, or relative risk).
    pub score: f64,
    /// Category label as the assessment names it, e.g. "Moderate Anxiety".
    pub raw_risk_label: String,
    pub standard_risk_level: StandardRiskLevel,
    pub interpretation: String,
}
