use std::sync::Arc;

use crate::analysis::intel::CareerIntel;
use crate::config::Config;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable intelligence provider. Production: `GeminiIntel`.
    pub intel: Arc<dyn CareerIntel>,
    pub sessions: SessionStore,
    pub config: Config,
}
