mod catalog;
mod config;
mod data;
mod errors;
mod matcher;
mod models;
mod routes;
mod state;
mod wage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::data::ReferenceData;
use crate::matcher::rules::MatcherRules;
use crate::matcher::scorer::{HybridLexicalMatcher, RoleMatcher};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting wagecheck API v{}", env!("CARGO_PKG_VERSION"));

    // All three reference feeds must load before the listener binds; a
    // partially loaded catalog would silently misreport "no match".
    let data = Arc::new(ReferenceData::load(&config.data_dir).await?);

    let matcher: Arc<dyn RoleMatcher> = Arc::new(HybridLexicalMatcher::new(MatcherRules::default()));

    let state = AppState { data, matcher };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
