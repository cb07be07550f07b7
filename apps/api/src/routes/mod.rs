pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::matcher::handlers as matcher_handlers;
use crate::state::AppState;
use crate::wage::handlers as wage_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(catalog_handlers::handle_list_roles))
        .route(
            "/api/v1/areas/:zip",
            get(catalog_handlers::handle_area_lookup),
        )
        .route(
            "/api/v1/roles/match",
            post(matcher_handlers::handle_match_role),
        )
        .route("/api/v1/wage-level", post(wage_handlers::handle_wage_check))
        .with_state(state)
}
