use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The fixed set of assessments the engine can score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AssessmentKind {
    /// Pooled Cohort Equations, 10-year cardiovascular risk.
    #[serde(rename = "ascvd")]
    Ascvd,
    /// Finnish Diabetes Risk Score.
    #[serde(rename = "findrisk")]
    Findrisk,
    /// Fracture risk approximation.
    #[serde(rename = "frax")]
    Frax,
    /// Generalized Anxiety Disorder 7-item scale.
    #[serde(rename = "gad7")]
    Gad7,
    /// Cancer relative-risk index.
    #[serde(rename = "hcri")]
    Hcri,
    /// Oswestry Disability Index.
    #[serde(rename = "odi")]
    Odi,
    /// Keele STarT Back screening tool.
    #[serde(rename = "start_back")]
    StartBack,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 7] = [
        Self::Ascvd,
        Self::Findrisk,
        Self::Frax,
        Self::Gad7,
        Self::Hcri,
        Self::Odi,
        Self::StartBack,
    ];

    /// Stable identifier used by questionnaire registries and the API.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Ascvd => "ascvd",
            Self::Findrisk => "findrisk",
            Self::Frax => "frax",
            Self::Gad7 => "gad7",
            Self::Hcri => "hcri",
            Self::Odi => "odi",
            Self::StartBack => "start_back",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AssessmentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| CoreError::UnknownAssessment(s.to_string()))
    }
}
