use axum::{
    Json,
    extract::{Path, State, rejection::QueryRejection},
};
use axum_extra::extract::{Query as MultiQuery, QueryRejection as MultiQueryRejection};
use gapchef_ingredient::{Allergen, Diet, describe};
use gapchef_recipe::{Difficulty, Recipe, RecipeFilters, SortOption, filter, sort};
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::error::AppError;
use crate::routes::AppState;

/// Browse query string. Facet names follow the JSON filter vocabulary, with
/// `q` as the search box.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseQuery {
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub max_cook_time: Option<u32>,
    pub min_rating: Option<f32>,
    pub meal_type: Option<String>,
    pub q: Option<String>,
    pub sort: SortOption,
}

impl BrowseQuery {
    fn filters(&self) -> RecipeFilters {
        RecipeFilters {
            cuisine: self.cuisine.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty,
            max_cook_time: self.max_cook_time,
            min_rating: self.min_rating,
            meal_type: self.meal_type.clone(),
            search_query: self.q.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub total: usize,
    pub recipes: Vec<Recipe>,
}

/// GET /api/recipes
#[tracing::instrument(skip(state))]
pub async fn browse(
    State(state): State<AppState>,
    query: Result<axum::extract::Query<BrowseQuery>, QueryRejection>,
) -> Result<Json<BrowseResponse>, AppError> {
    let axum::extract::Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let recipes = sort(&filter(state.catalog.recipes(), &query.filters()), query.sort);

    Ok(Json(BrowseResponse {
        total: recipes.len(),
        recipes,
    }))
}

fn names<T: ToString>(variants: &[T]) -> Vec<String> {
    variants.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub cuisines: Vec<String>,
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
    pub sorts: Vec<String>,
    pub allergens: Vec<String>,
    pub diets: Vec<String>,
}

/// GET /api/recipes/facets
pub async fn facets(State(state): State<AppState>) -> Json<FacetsResponse> {
    Json(FacetsResponse {
        cuisines: state.catalog.cuisines(),
        categories: state.catalog.categories(),
        difficulties: names(Difficulty::VARIANTS),
        sorts: names(SortOption::VARIANTS),
        allergens: names(Allergen::VARIANTS),
        diets: names(Diet::VARIANTS),
    })
}

/// Detail query string; `allergy` and `diet` may repeat.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetailQuery {
    pub servings: Option<u32>,
    pub allergy: Vec<Allergen>,
    pub diet: Vec<Diet>,
}

/// GET /api/recipes/{id}
#[tracing::instrument(skip(state, query))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<MultiQuery<DetailQuery>, MultiQueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let MultiQuery(query) = query.map_err(|e| AppError::BadRequest(e.to_string()))?;

    let recipe = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::RecipeNotFound(id.clone()))?;

    let detail = describe(recipe, query.servings, &query.allergy, &query.diet);

    Ok(Json(serde_json::to_value(detail)?))
}
