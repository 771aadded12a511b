use gapchef_recipe::Ingredient;
use serde::Serialize;

use crate::{parse_amount, reference::find_ingredient};

/// Rough cost and per-serving nutrition for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutrition {
    pub total_cost: f64,
    pub cost_per_serving: f64,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub is_under_five_dollars: bool,
}

#[derive(Default)]
struct Totals {
    cost: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

// Only the conversions the reference units actually need.
fn unit_multiplier(recipe_unit: &str, reference_unit: &str) -> f64 {
    match (recipe_unit, reference_unit) {
        ("cup", "oz") => 8.0,
        ("tbsp", "cup") => 1.0 / 16.0,
        ("tsp", "tbsp") => 1.0 / 3.0,
        ("lb", "oz") => 16.0,
        _ => 1.0,
    }
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn per_serving(total: f64, servings: f64) -> u32 {
    (total / servings).round().max(0.0) as u32
}

/// Estimate cost and nutrition from the reference table.
///
/// Optional ingredients and ingredients missing from the table are skipped.
pub fn estimate(ingredients: &[Ingredient], servings: u32) -> RecipeNutrition {
    let totals = ingredients
        .iter()
        .filter(|ingredient| !ingredient.optional)
        .filter_map(|ingredient| {
            find_ingredient(&ingredient.item).map(|info| (info, parse_amount(&ingredient.amount)))
        })
        .fold(Totals::default(), |mut totals, (info, amount)| {
            let quantity = amount.quantity * unit_multiplier(&amount.unit, info.unit);
            totals.cost += info.price * quantity;
            totals.calories += info.calories * quantity;
            totals.protein += info.protein * quantity;
            totals.carbs += info.carbs * quantity;
            totals.fat += info.fat * quantity;
            totals
        });

    let servings = f64::from(servings.max(1));

    RecipeNutrition {
        total_cost: cents(totals.cost),
        cost_per_serving: cents(totals.cost / servings),
        calories: per_serving(totals.calories, servings),
        protein: per_serving(totals.protein, servings),
        carbs: per_serving(totals.carbs, servings),
        fat: per_serving(totals.fat, servings),
        is_under_five_dollars: totals.cost <= 5.0,
    }
}
