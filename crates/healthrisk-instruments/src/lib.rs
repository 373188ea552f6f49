//! healthrisk-instruments
//!
//! Clinical risk calculators. Pure computation with no I/O and no shared mutable
//! state. Each calculator turns a completed questionnaire into a score, an
//! assessment-specific risk label, and a standardized risk level.

pub mod error;
pub mod instruments;
pub mod mapping;
pub mod scoring;
pub mod standardize;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::{RiskResult, StandardRiskLevel};

use error::ScoringError;
use scoring::{AnswerIssue, CategoryTable, Question};

/// Trait implemented by each risk calculator.
pub trait Calculator: Send + Sync {
    fn kind(&self) -> AssessmentKind;

    /// Stable identifier (e.g., "ascvd", "gad7").
    fn id(&self) -> &str {
        self.kind().id()
    }

    /// Human-readable name (e.g., "GAD-7").
    fn name(&self) -> &str;

    /// The questions this calculator reads, with their accepted options.
    fn questions(&self) -> &[Question];

    /// Every category table this calculator can resolve a label from.
    fn category_tables(&self) -> &[&'static CategoryTable];

    /// Score a completed questionnaire.
    ///
    /// Missing or unrecognized answers fall back to neutral defaults; only
    /// calculators with explicit physiological validation return `Err`.
    fn calculate_risk(&self, answers: &AnswerSet) -> Result<RiskResult, ScoringError>;

    /// Standard level for one of this calculator's labels, falling back to
    /// the keyword heuristic for labels it does not own.
    fn standardize(&self, raw_label: &str) -> StandardRiskLevel {
        self.category_tables()
            .iter()
            .find_map(|table| table.find_label(raw_label))
            .map(|category| category.standard_level())
            .unwrap_or_else(|| standardize::keyword_level(raw_label))
    }

    /// Advisory check of an answer set against the question list.
    fn validate_answers(&self, answers: &AnswerSet) -> Vec<AnswerIssue> {
        scoring::check_options(self.name(), self.questions(), answers)
    }
}

/// The calculator for an assessment.
pub fn calculator(kind: AssessmentKind) -> &'static dyn Calculator {
    match kind {
        AssessmentKind::Ascvd => &instruments::ascvd::Ascvd,
        AssessmentKind::Findrisk => &instruments::findrisk::Findrisk,
        AssessmentKind::Frax => &instruments::frax::Frax,
        AssessmentKind::Gad7 => &instruments::gad7::Gad7,
        AssessmentKind::Hcri => &instruments::hcri::Hcri,
        AssessmentKind::Odi => &instruments::odi::Odi,
        AssessmentKind::StartBack => &instruments::start_back::StartBack,
    }
}

/// Return all registered calculators.
pub fn all_calculators() -> Vec<&'static dyn Calculator> {
    AssessmentKind::ALL.into_iter().map(calculator).collect()
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<&'static dyn Calculator> {
    id.parse().ok().map(calculator)
}

/// Score an answer set with the calculator for `kind`.
pub fn score(kind: AssessmentKind, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
    let result = calculator(kind).calculate_risk(answers)?;
    tracing::debug!(
        assessment = %kind,
        score = result.score,
        level = %result.standard_risk_level,
        "risk calculated"
    );
    Ok(result)
}

/// Score an answer set for an assessment identified by string.
pub fn score_by_id(id: &str, answers: &AnswerSet) -> Result<RiskResult, ScoringError> {
    let kind: AssessmentKind = id.parse()?;
    score(kind, answers)
}
