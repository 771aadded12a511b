use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::matcher::{AvailableIngredients, MatchOptions, RecipeMatch, rank_recipes};
use crate::{Catalog, Difficulty, Recipe};

/// A recipe decorated for one request: availability per ingredient line,
/// rounded match percentage and the required items still missing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecipe {
    pub recipe: Recipe,
    /// One flag per entry of `recipe.ingredients`, same order.
    pub available: Vec<bool>,
    pub match_percentage: u8,
    pub missing_ingredients: Vec<String>,
}

impl AnnotatedRecipe {
    pub fn annotate(recipe: &Recipe, available: &AvailableIngredients) -> Self {
        let flags = recipe
            .ingredients
            .iter()
            .map(|i| available.satisfies(&i.item))
            .collect::<Vec<_>>();

        let mut required = 0usize;
        let mut satisfied = 0usize;
        let mut missing_ingredients = Vec::new();

        for (ingredient, is_available) in recipe.ingredients.iter().zip(&flags) {
            if ingredient.optional {
                continue;
            }

            required += 1;
            if *is_available {
                satisfied += 1;
            } else {
                missing_ingredients.push(ingredient.item.to_owned());
            }
        }

        let match_percentage = if required > 0 {
            (100.0 * satisfied as f64 / required as f64).round() as u8
        } else {
            0
        };

        Self {
            recipe: recipe.clone(),
            available: flags,
            match_percentage,
            missing_ingredients,
        }
    }

    pub fn is_available(&self, index: usize) -> bool {
        self.available.get(index).copied().unwrap_or(false)
    }
}

impl AsRef<Recipe> for AnnotatedRecipe {
    fn as_ref(&self) -> &Recipe {
        &self.recipe
    }
}

/// Build a full page of annotated results.
///
/// Ranked matches come first; when there are fewer than
/// `options.max_results`, the page is padded with unranked catalog recipes in
/// catalog order. Every recipe is then scored afresh and the page is ordered
/// by match percentage, highest first.
pub fn build_results<S: AsRef<str>>(
    catalog: &Catalog,
    available: &[S],
    options: &MatchOptions,
) -> Vec<AnnotatedRecipe> {
    let available = AvailableIngredients::new(available);
    let ranked = rank_recipes(catalog, &available, options);
    let max_results = options.max_results;

    let mut page: Vec<&Recipe> = ranked
        .iter()
        .take(max_results)
        .map(|m: &RecipeMatch<'_>| m.recipe)
        .collect();

    if page.len() < max_results {
        let ranked_ids = page.iter().map(|r| r.id.as_str()).collect::<HashSet<_>>();
        let padding = catalog
            .iter()
            .filter(|r| !ranked_ids.contains(r.id.as_str()))
            .take(max_results - page.len())
            .collect::<Vec<_>>();

        tracing::debug!(
            ranked = page.len(),
            padded = padding.len(),
            "result page padded"
        );

        page.extend(padding);
    }

    let mut results = page
        .into_iter()
        .map(|recipe| AnnotatedRecipe::annotate(recipe, &available))
        .collect::<Vec<_>>();

    results.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    results
}

#[derive(Serialize)]
struct AnnotatedIngredientView<'a> {
    item: &'a str,
    amount: &'a str,
    optional: bool,
    available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnotatedRecipeView<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    image: &'a str,
    prep_time: u32,
    cook_time: u32,
    servings: u32,
    difficulty: Difficulty,
    cuisine: &'a str,
    category: &'a str,
    ingredients: Vec<AnnotatedIngredientView<'a>>,
    instructions: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    tips: &'a [String],
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    youtube_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    calories: Option<u32>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    meal_type: &'a [String],
    match_percentage: u8,
    missing_ingredients: &'a [String],
}

impl Serialize for AnnotatedRecipe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let recipe = &self.recipe;
        let ingredients = recipe
            .ingredients
            .iter()
            .enumerate()
            .map(|(idx, i)| AnnotatedIngredientView {
                item: &i.item,
                amount: &i.amount,
                optional: i.optional,
                available: self.is_available(idx),
            })
            .collect();

        AnnotatedRecipeView {
            id: &recipe.id,
            name: &recipe.name,
            description: &recipe.description,
            image: &recipe.image,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            cuisine: &recipe.cuisine,
            category: &recipe.category,
            ingredients,
            instructions: &recipe.instructions,
            tips: &recipe.tips,
            tags: &recipe.tags,
            youtube_url: recipe.youtube_url.as_deref(),
            rating: recipe.rating,
            review_count: recipe.review_count,
            calories: recipe.calories,
            meal_type: &recipe.meal_type,
            match_percentage: self.match_percentage,
            missing_ingredients: &self.missing_ingredients,
        }
        .serialize(serializer)
    }
}
