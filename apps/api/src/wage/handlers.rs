use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::area::normalize_zip;
use crate::state::AppState;
use crate::wage::evaluator::{evaluate, WageEvaluation};

#[derive(Debug, Deserialize)]
pub struct WageCheckRequest {
    pub soc_code: String,
    pub zip: String,
    pub annual_salary: f64,
    /// Display title echoed back in the result; the lookup itself is keyed by
    /// SOC code and area.
    #[serde(default)]
    pub role_title: Option<String>,
}

/// POST /api/v1/wage-level
///
/// Validates each input before any lookup, resolves ZIP → area, then
/// classifies against the `(area, soccode)` thresholds. A missing benchmark
/// comes back as a typed outcome, not an error.
pub async fn handle_wage_check(
    State(state): State<AppState>,
    Json(req): Json<WageCheckRequest>,
) -> Result<Json<WageEvaluation>, AppError> {
    let soc_code = req.soc_code.trim();
    if soc_code.is_empty() {
        return Err(AppError::Validation(
            "Please select a role (SOC code required).".to_string(),
        ));
    }

    if !req.zip.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Please enter a valid ZIP code.".to_string(),
        ));
    }
    let zip = normalize_zip(&req.zip);
    let area_info = state.data.area_for_zip(&zip).ok_or_else(|| {
        AppError::Validation("Please enter a valid ZIP that exists in mapping.".to_string())
    })?;

    if !req.annual_salary.is_finite() || req.annual_salary <= 0.0 {
        return Err(AppError::Validation(
            "Please enter a valid annual salary.".to_string(),
        ));
    }

    let thresholds = state.data.thresholds(&area_info.area, soc_code);
    let evaluation = evaluate(
        area_info,
        soc_code,
        req.annual_salary,
        thresholds,
        req.role_title.as_deref(),
    );

    Ok(Json(evaluation))
}
