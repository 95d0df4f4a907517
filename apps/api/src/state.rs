use std::sync::Arc;

use crate::assessment::session::SessionStore;
use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generative model behind the pipeline. Constructed once at startup
    /// and passed by reference — tests substitute a scripted implementation.
    pub model: Arc<dyn GenerativeModel>,
    /// In-process assessment sessions. Never persisted.
    pub sessions: SessionStore,
    pub config: Config,
}
