use std::sync::Arc;

use axum::{Router, routing::get};
use gapchef_recipe::Catalog;

use crate::config::Config;
use crate::recognizer::IngredientRecognizer;

mod analyze;
mod health;
mod recipes;

pub use analyze::{AnalyzeRequest, AnalyzeResponse};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub recognizer: Arc<dyn IngredientRecognizer>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route(
            "/api/analyze",
            get(analyze::status).post(analyze::analyze),
        )
        .route("/api/recipes", get(recipes::browse))
        .route("/api/recipes/facets", get(recipes::facets))
        .route("/api/recipes/{id}", get(recipes::detail))
        .with_state(app_state)
}
