use thiserror::Error;

use healthrisk_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{field} {value} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
