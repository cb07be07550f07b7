use std::sync::Arc;

use crate::data::ReferenceData;
use crate::matcher::scorer::RoleMatcher;

/// Shared application state injected into all route handlers via Axum
/// extractors. Built once after the reference data loads; everything here is
/// immutable for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<ReferenceData>,
    /// Pluggable role matcher. Default: `HybridLexicalMatcher` over the
    /// production rule tables.
    pub matcher: Arc<dyn RoleMatcher>,
}
