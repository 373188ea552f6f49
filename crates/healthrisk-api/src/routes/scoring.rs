use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use healthrisk_core::answers::AnswerSet;
use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::RiskResult;
use healthrisk_instruments::scoring::AnswerIssue;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ScoreResponse {
    assessment: AssessmentKind,
    #[serde(flatten)]
    result: RiskResult,
    /// Advisory findings; they never block scoring.
    issues: Vec<AnswerIssue>,
}

#[derive(Serialize)]
pub struct ValidationResponse {
    assessment: AssessmentKind,
    valid: bool,
    issues: Vec<AnswerIssue>,
}

pub async fn score_answers(
    Path(id): Path<String>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let kind: AssessmentKind = id.parse()?;
    let issues = healthrisk_instruments::calculator(kind).validate_answers(&answers);
    if !issues.is_empty() {
        tracing::debug!(assessment = %kind, issues = issues.len(), "scoring with answer issues");
    }

    let result = healthrisk_instruments::score(kind, &answers)?;

    Ok(Json(ScoreResponse {
        assessment: kind,
        result,
        issues,
    }))
}

pub async fn validate_answers(
    Path(id): Path<String>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let kind: AssessmentKind = id.parse()?;
    let issues = healthrisk_instruments::calculator(kind).validate_answers(&answers);

    Ok(Json(ValidationResponse {
        assessment: kind,
        valid: issues.is_empty(),
        issues,
    }))
}
