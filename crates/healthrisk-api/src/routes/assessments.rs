use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use healthrisk_core::models::assessment::AssessmentKind;
use healthrisk_core::models::risk::StandardRiskLevel;
use healthrisk_instruments::scoring::Question;
use healthrisk_instruments::{all_calculators, get_calculator};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct AssessmentSummary {
    id: AssessmentKind,
    name: String,
}

/// One category range together with the standard level it maps to.
#[derive(Serialize)]
pub struct CategoryView {
    label: &'static str,
    min: f64,
    max: f64,
    standard_risk_level: StandardRiskLevel,
}

#[derive(Serialize)]
pub struct AssessmentDetail {
    id: AssessmentKind,
    name: String,
    questions: Vec<Question>,
    /// Category tables in resolution order; most assessments have one.
    category_tables: Vec<Vec<CategoryView>>,
}

pub async fn list_assessments() -> Json<Vec<AssessmentSummary>> {
    let assessments: Vec<AssessmentSummary> = all_calculators()
        .iter()
        .map(|c| AssessmentSummary {
            id: c.kind(),
            name: c.name().to_string(),
        })
        .collect();
    Json(assessments)
}

pub async fn get_assessment(Path(id): Path<String>) -> Result<Json<AssessmentDetail>, ApiError> {
    let calculator = get_calculator(&id)
        .ok_or_else(|| ApiError::NotFound(format!("assessment not found: {id}")))?;

    let category_tables = calculator
        .category_tables()
        .iter()
        .map(|table| {
            table
                .categories()
                .iter()
                .map(|c| CategoryView {
                    label: c.label,
                    min: c.min,
                    max: c.max,
                    standard_risk_level: c.standard_level(),
                })
                .collect()
        })
        .collect();

    Ok(Json(AssessmentDetail {
        id: calculator.kind(),
        name: calculator.name().to_string(),
        questions: calculator.questions().to_vec(),
        category_tables,
    }))
}
