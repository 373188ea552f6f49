use axum::Json;
use serde::Serialize;

use healthrisk_instruments::all_calculators;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    version: &'static str,
    assessments: usize,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        assessments: all_calculators().len(),
    })
}
