//! Everyday knowledge about ingredients: reference prices and nutrition,
//! amount parsing and scaling, and allergen/diet checks.

mod amount;
mod detail;
mod dietary;
mod nutrition;
mod reference;

pub use amount::{Amount, DEFAULT_UNIT, format_quantity, parse_amount, scale_amount};
pub use detail::{
    MAX_SERVINGS, MIN_SERVINGS, RecipeDetail, ScaledIngredient, clamp_servings, describe,
};
pub use dietary::{Allergen, Diet, DietaryAssessment, assess};
pub use nutrition::{RecipeNutrition, estimate};
pub use reference::{IngredientInfo, find_ingredient, reference, substitutes};
