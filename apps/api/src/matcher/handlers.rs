use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct MatchedRole {
    pub soc_code: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matched: Option<MatchedRole>,
    /// Best composite score mapped into [0, 1]; nonzero even on rejection.
    pub confidence: f64,
    /// Display percentage, rounded.
    pub confidence_pct: u32,
    pub message: String,
}

/// POST /api/v1/roles/match
///
/// Free text in, closest catalog role out. An unmatched query is a normal
/// outcome (`matched: null` with guidance), never an error.
pub async fn handle_match_role(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let result = state
        .matcher
        .closest_role(&req.query, &state.data.catalog)
        .await;

    let confidence_pct = (result.confidence * 100.0).round() as u32;
    let response = match result.role {
        Some(role) => MatchResponse {
            message: format!(
                "Closest match: {} ({}) • confidence {confidence_pct}%",
                role.title, role.soc_code
            ),
            matched: Some(MatchedRole {
                soc_code: role.soc_code,
                title: role.title,
            }),
            confidence: result.confidence,
            confidence_pct,
        },
        None => MatchResponse {
            matched: None,
            confidence: result.confidence,
            confidence_pct,
            message: "Couldn't confidently match. Try a clearer title (e.g., \
                      \"Data Engineer\", \"Quant Analyst\", \"ML Engineer\")."
                .to_string(),
        },
    };

    Ok(Json(response))
}
