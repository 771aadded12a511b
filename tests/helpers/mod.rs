//! Shared fixtures for HTTP and configuration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use gapchef::{
    AppState, Config,
    recognizer::{IngredientRecognizer, ManualRecognizer, RecognitionInput, RecognizerError},
};
use gapchef_recipe::{Catalog, Difficulty, Ingredient, Recipe};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn recipe(id: &str, ingredients: Vec<Ingredient>) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("recipe {id}"),
        description: String::new(),
        image: String::new(),
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        difficulty: Difficulty::Easy,
        cuisine: "American".to_string(),
        category: "Main Course".to_string(),
        ingredients,
        instructions: vec!["cook".to_string()],
        tips: vec![],
        tags: vec![],
        youtube_url: None,
        rating: None,
        review_count: None,
        calories: None,
        meal_type: vec![],
    }
}

/// Four recipes covering the matching, browsing and detail paths.
pub fn test_catalog() -> Catalog {
    let garlic_chicken = recipe(
        "garlic-chicken",
        vec![
            Ingredient::new("chicken breast", "2 lb"),
            Ingredient::new("garlic", "3 cloves"),
            Ingredient::new("olive oil", "2 tbsp"),
        ],
    );

    let mut fried_rice = recipe(
        "fried-rice",
        vec![
            Ingredient::new("rice", "2 cups"),
            Ingredient::new("soy sauce", "2 tbsp"),
            Ingredient::new("onion", "1"),
            Ingredient::new("eggs", "2"),
        ],
    );
    fried_rice.cuisine = "Chinese".to_string();
    fried_rice.cook_time = 10;
    fried_rice.rating = Some(4.5);

    let mut peanut_noodles = recipe(
        "peanut-noodles",
        vec![
            Ingredient::new("noodles", "8 oz"),
            Ingredient::new("peanut butter", "4 tbsp"),
            Ingredient::optional("sesame seeds", "1 tbsp"),
        ],
    );
    peanut_noodles.name = "Peanut Noodles".to_string();
    peanut_noodles.cuisine = "Thai".to_string();
    peanut_noodles.difficulty = Difficulty::Medium;
    peanut_noodles.rating = Some(4.0);

    let mut saffron_stew = recipe(
        "saffron-stew",
        vec![
            Ingredient::new("saffron", "1 pinch"),
            Ingredient::new("quince", "2"),
        ],
    );
    saffron_stew.cuisine = "Persian".to_string();
    saffron_stew.difficulty = Difficulty::Hard;
    saffron_stew.cook_time = 90;

    Catalog::new(vec![garlic_chicken, fried_rice, peanut_noodles, saffron_stew])
        .expect("unique recipe ids")
}

pub fn test_config() -> Config {
    Config::load(Some("config/default.toml".to_string())).expect("default config loads")
}

/// Recognizer standing in for an unreachable vision backend.
pub struct FailingRecognizer;

#[async_trait]
impl IngredientRecognizer for FailingRecognizer {
    async fn recognize(&self, _input: &RecognitionInput) -> Result<Vec<String>, RecognizerError> {
        Err(RecognizerError::Backend("vision service timed out".to_string()))
    }
}

pub fn app_with(catalog: Catalog, recognizer: Arc<dyn IngredientRecognizer>) -> Router {
    gapchef::routes::router(AppState {
        config: test_config(),
        catalog: Arc::new(catalog),
        recognizer,
    })
}

pub fn app() -> Router {
    app_with(test_catalog(), Arc::new(ManualRecognizer))
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => request.body(Body::empty())?,
    };

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, json))
}

pub async fn get(app: Router, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    send(app, Method::POST, uri, Some(body)).await
}
