use gapchef_recipe::{Ingredient, Recipe};
use serde::Serialize;

use crate::{
    Allergen, Diet, DietaryAssessment, RecipeNutrition, assess, estimate, scale_amount, substitutes,
};

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    pub item: String,
    pub amount: String,
    pub optional: bool,
    pub substitutes: &'static [&'static str],
}

/// A recipe prepared for a given number of servings and a dietary profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail<'a> {
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    pub original_servings: u32,
    pub scaled_servings: u32,
    pub scaled_ingredients: Vec<ScaledIngredient>,
    pub nutrition: RecipeNutrition,
    pub dietary: DietaryAssessment,
}

pub fn clamp_servings(servings: u32) -> u32 {
    servings.clamp(MIN_SERVINGS, MAX_SERVINGS)
}

/// Build the detail view. `servings` defaults to the recipe's own count and
/// is clamped to the supported range either way.
pub fn describe<'a>(
    recipe: &'a Recipe,
    servings: Option<u32>,
    allergies: &[Allergen],
    diets: &[Diet],
) -> RecipeDetail<'a> {
    let scaled_servings = clamp_servings(servings.unwrap_or(recipe.servings));

    let scaled_ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            item: ingredient.item.clone(),
            amount: if scaled_servings == recipe.servings {
                ingredient.amount.clone()
            } else {
                scale_amount(&ingredient.amount, recipe.servings, scaled_servings)
            },
            optional: ingredient.optional,
            substitutes: substitutes(&ingredient.item),
        })
        .collect::<Vec<_>>();

    let priced = scaled_ingredients
        .iter()
        .map(|i| Ingredient {
            item: i.item.clone(),
            amount: i.amount.clone(),
            optional: i.optional,
        })
        .collect::<Vec<_>>();

    RecipeDetail {
        recipe,
        original_servings: recipe.servings,
        scaled_servings,
        nutrition: estimate(&priced, scaled_servings),
        dietary: assess(recipe, allergies, diets),
        scaled_ingredients,
    }
}
