use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::risk::{RiskResult, StandardRiskLevel};

use crate::standardize::keyword_level;

/// One inclusive score range of a category table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskCategory {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// Overrides the keyword heuristic for labels it cannot classify as intended.
    pub level: Option<StandardRiskLevel>,
}

impl RiskCategory {
    pub const fn new(label: &'static str, min: f64, max: f64) -> Self {
        Self {
            label,
            min,
            max,
            level: None,
        }
    }

    pub const fn with_level(self, level: StandardRiskLevel) -> Self {
        Self {
            level: Some(level),
            ..self
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }

    pub fn standard_level(&self) -> StandardRiskLevel {
        self.level.unwrap_or_else(|| keyword_level(self.label))
    }
}

/// Ordered list of inclusive ranges used to classify a score.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: &'static [RiskCategory],
}

impl CategoryTable {
    pub const fn new(categories: &'static [RiskCategory]) -> Self {
        assert!(!categories.is_empty(), "category table must not be empty");
        Self { categories }
    }

    pub fn categories(&self) -> &'static [RiskCategory] {
        self.categories
    }

    /// Position of the first range containing `score`, or of the last
    /// range when none does.
    pub fn resolve_index(&self, score: f64) -> usize {
        self.categories
            .iter()
            .position(|c| c.contains(score))
            .unwrap_or(self.categories.len() - 1)
    }

    pub fn resolve(&self, score: f64) -> &'static RiskCategory {
        &self.categories[self.resolve_index(score)]
    }

    pub fn find_label(&self, label: &str) -> Option<&'static RiskCategory> {
        self.categories
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(label.trim()))
    }
}

/// Package a score and its category into the caller-facing result.
pub fn assemble(score: f64, category: &RiskCategory, interpretation: String) -> RiskResult {
    RiskResult {
        score,
        raw_risk_label: category.label.to_string(),
        standard_risk_level: category.standard_level(),
        interpretation,
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// A question in an assessment definition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    /// Accepted option values.
    pub options: Vec<String>,
    /// Whether a plain number is accepted in place of a bucket token.
    pub accepts_numeric: bool,
}

impl Question {
    pub fn choice<'a>(id: &str, prompt: &str, options: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options: options.into_iter().map(str::to_string).collect(),
            accepts_numeric: false,
        }
    }

    pub fn numeric(self) -> Self {
        Self {
            accepts_numeric: true,
            ..self
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        self.options.iter().any(|o| o.eq_ignore_ascii_case(value))
            || (self.accepts_numeric && value.parse::<f64>().is_ok_and(f64::is_finite))
    }
}

/// The kind of problem found in an answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    UnknownQuestion,
    UnknownOption,
    Incomplete,
}

/// Advisory finding about an answer set. Scoring still proceeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerIssue {
    pub question_id: String,
    pub value: String,
    pub kind: IssueKind,
    pub message: String,
}

/// Check every answer against the question list of an assessment.
pub fn check_options(assessment: &str, questions: &[Question], answers: &AnswerSet) -> Vec<AnswerIssue> {
    let mut issues = Vec::new();
    for (question_id, value) in answers.iter() {
        match questions.iter().find(|q| q.id == question_id) {
            None => issues.push(AnswerIssue {
                question_id: question_id.to_string(),
                value: value.to_string(),
                kind: IssueKind::UnknownQuestion,
                message: format!("{assessment}: unknown question '{question_id}'"),
            }),
            Some(question) if !value.trim().is_empty() && !question.accepts(value) => {
                issues.push(AnswerIssue {
                    question_id: question_id.to_string(),
                    value: value.to_string(),
                    kind: IssueKind::UnknownOption,
                    message: format!(
                        "{assessment}: '{value}' is not an option for '{question_id}' (expected one of {})",
                        question.options.join(", "),
                    ),
                });
            }
            Some(_) => {}
        }
    }
    issues
}
