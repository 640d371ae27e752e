use std::sync::Arc;

use crate::services::RecommendationEngine;

/// Shared application state
///
/// The engine is fully built before the listener binds and never mutated
/// afterward, so it is shared read-only across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
