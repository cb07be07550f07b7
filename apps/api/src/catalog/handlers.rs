use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::{filter_roles, DEFAULT_LIMIT};
use crate::errors::AppError;
use crate::models::area::normalize_zip;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoleFilterParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub soc_code: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<RoleSummary>,
}

/// GET /api/v1/roles?q=&limit=
pub async fn handle_list_roles(
    State(state): State<AppState>,
    Query(params): Query<RoleFilterParams>,
) -> Json<RoleListResponse> {
    let query = params.q.unwrap_or_default();
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let roles = filter_roles(&state.data.catalog, &query, limit)
        .into_iter()
        .map(|r| RoleSummary {
            soc_code: r.soc_code.clone(),
            title: r.title.clone(),
        })
        .collect();

    Json(RoleListResponse { roles })
}

#[derive(Debug, Serialize)]
pub struct AreaResponse {
    pub zip: String,
    pub area: String,
    pub area_name: String,
    pub city: String,
    pub state_ab: String,
    pub county: Option<String>,
    /// Display line, e.g. `"New York, NY • New York-Newark-Jersey City (Area 35620)"`.
    pub label: String,
}

/// GET /api/v1/areas/:zip
pub async fn handle_area_lookup(
    State(state): State<AppState>,
    Path(zip): Path<String>,
) -> Result<Json<AreaResponse>, AppError> {
    if !zip.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Please enter a valid ZIP code.".to_string(),
        ));
    }

    let normalized = normalize_zip(&zip);
    let info = state
        .data
        .area_for_zip(&normalized)
        .ok_or_else(|| AppError::NotFound("ZIP not found in mapping.".to_string()))?;

    Ok(Json(AreaResponse {
        zip: normalized,
        area: info.area.clone(),
        area_name: info.area_name.clone(),
        city: info.city.clone(),
        state_ab: info.state_ab.clone(),
        county: info.county.clone(),
        label: info.location_line(),
    }))
}
