use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{Difficulty, Recipe};

/// User-selected facets. Absent fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Upper bound on prep + cook time, in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl RecipeFilters {
    /// Number of facets currently set.
    pub fn active_count(&self) -> usize {
        [
            self.cuisine.is_some(),
            self.category.is_some(),
            self.difficulty.is_some(),
            self.max_cook_time.is_some(),
            self.min_rating.is_some(),
            self.meal_type.is_some(),
            self.search().is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    fn search(&self) -> Option<String> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `recipe` passes every active facet.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.cuisine.as_ref().is_some_and(|c| &recipe.cuisine != c) {
            return false;
        }

        if self.category.as_ref().is_some_and(|c| &recipe.category != c) {
            return false;
        }

        if self.difficulty.is_some_and(|d| recipe.difficulty != d) {
            return false;
        }

        if self
            .max_cook_time
            .is_some_and(|max| recipe.total_time() > max)
        {
            return false;
        }

        // Unrated recipes never pass a rating floor.
        if self
            .min_rating
            .is_some_and(|min| !recipe.rating.is_some_and(|r| r >= min))
        {
            return false;
        }

        if self
            .meal_type
            .as_ref()
            .is_some_and(|m| !recipe.meal_type.contains(m))
        {
            return false;
        }

        match self.search() {
            Some(query) => matches_search(recipe, &query),
            None => true,
        }
    }
}

fn matches_search(recipe: &Recipe, query: &str) -> bool {
    recipe.name.to_lowercase().contains(query)
        || recipe.tags.iter().any(|t| t.to_lowercase().contains(query))
        || recipe
            .ingredients
            .iter()
            .any(|i| i.item.to_lowercase().contains(query))
}

/// Keep the recipes passing every active facet, preserving order.
pub fn filter<T: AsRef<Recipe> + Clone>(recipes: &[T], criteria: &RecipeFilters) -> Vec<T> {
    recipes
        .iter()
        .filter(|r| criteria.matches(r.as_ref()))
        .cloned()
        .collect()
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortOption {
    /// Keep the incoming order, already ranked by the matcher.
    #[default]
    Match,
    Rating,
    TimeAsc,
    TimeDesc,
    DifficultyAsc,
    DifficultyDesc,
    Name,
}

impl SortOption {
    fn compare(&self, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortOption::Match => Ordering::Equal,
            SortOption::Rating => b
                .rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0)),
            SortOption::TimeAsc => a.total_time().cmp(&b.total_time()),
            SortOption::TimeDesc => b.total_time().cmp(&a.total_time()),
            SortOption::DifficultyAsc => a.difficulty.cmp(&b.difficulty),
            SortOption::DifficultyDesc => b.difficulty.cmp(&a.difficulty),
            SortOption::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}

/// Stable sort into a new vector; the input is left untouched.
pub fn sort<T: AsRef<Recipe> + Clone>(recipes: &[T], key: SortOption) -> Vec<T> {
    let mut sorted = recipes.to_vec();
    if key != SortOption::Match {
        sorted.sort_by(|a, b| key.compare(a.as_ref(), b.as_ref()));
    }

    sorted
}
