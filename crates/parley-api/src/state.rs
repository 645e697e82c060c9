//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use parley_core::config::ParleyConfig;
use parley_engine::ConversationalEngine;

/// Shared application state.
///
/// Cloned into every handler through axum's `State` extractor. The engine is
/// trained before this is built and is only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Trained conversational engine.
    pub engine: Arc<dyn ConversationalEngine>,
    /// Application configuration.
    pub config: Arc<ParleyConfig>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: Arc<dyn ConversationalEngine>, config: ParleyConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
