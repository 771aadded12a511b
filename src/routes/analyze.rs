use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use gapchef_recipe::{AnnotatedRecipe, RecipeFilters, SortOption, build_results, filter, sort};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::recognizer::RecognitionInput;
use crate::routes::AppState;

/// Request payload for POST /api/analyze
///
/// Input is taken from the first present source: `ingredients`, `text`,
/// then `image`. `useMock` skips recognition entirely, and a request with no
/// input is matched against an empty ingredient list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub ingredients: Option<Vec<String>>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub use_mock: bool,
    #[validate(range(min = 1, max = 500, message = "Must be between 1 and 500"))]
    pub max_recipes: Option<usize>,
    pub filters: RecipeFilters,
    pub sort: SortOption,
}

impl AnalyzeRequest {
    /// `None` when the request carries no input at all.
    fn recognition_input(&self) -> Option<RecognitionInput> {
        if let Some(ingredients) = self.ingredients.as_ref().filter(|i| !i.is_empty()) {
            return Some(RecognitionInput::List(ingredients.clone()));
        }

        if let Some(text) = self.text.as_ref().filter(|t| !t.trim().is_empty()) {
            return Some(RecognitionInput::Text(text.clone()));
        }

        self.image
            .as_ref()
            .filter(|i| !i.trim().is_empty())
            .map(|image| RecognitionInput::Image(image.clone()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub found_ingredients: Vec<String>,
    pub recipes: Vec<AnnotatedRecipe>,
    #[serde(rename = "_fallback", skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
    #[serde(rename = "_error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/analyze
///
/// Recognizes ingredients and returns a page of annotated recipes. A failing
/// recognizer never fails the request: the configured fallback list is used
/// with the default page size and the response is flagged.
#[tracing::instrument(skip_all)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if let Err(errors) = request.validate() {
        tracing::warn!(errors = ?errors, "Analyze request validation failed");
        return Err(errors.into());
    }

    let mut options = state.config.matching.options();

    let (found_ingredients, error) = if request.use_mock {
        (state.config.recognizer.mock_ingredients.clone(), None)
    } else {
        match request.recognition_input() {
            // Nothing to recognize: every recipe scores 0% and the page is padded
            None => (Vec::new(), None),
            Some(input) => match state.recognizer.recognize(&input).await {
                Ok(found) => (found, None),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Ingredient recognition failed, using fallback list"
                    );
                    (
                        state.config.recognizer.fallback_ingredients.clone(),
                        Some(e.to_string()),
                    )
                }
            },
        }
    };

    let fallback = error.is_some();
    if let (false, Some(max_recipes)) = (fallback, request.max_recipes) {
        options.max_results = max_recipes;
    }

    let page = build_results(&state.catalog, &found_ingredients, &options);
    let recipes = sort(&filter(&page, &request.filters), request.sort);

    tracing::info!(
        found = found_ingredients.len(),
        recipes = recipes.len(),
        fallback,
        "Ingredients analyzed"
    );

    Ok(Json(AnalyzeResponse {
        found_ingredients,
        recipes,
        fallback,
        error,
    }))
}

/// GET /api/analyze
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "gapchef analysis API",
        "recipeCount": state.catalog.len(),
    }))
}
