#![allow(dead_code)]

use gapchef_recipe::{Catalog, Difficulty, Ingredient, Recipe};

pub fn recipe(id: &str, required: &[&str]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: format!("recipe {id}"),
        description: String::new(),
        image: String::new(),
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        difficulty: Difficulty::Easy,
        cuisine: "American".to_owned(),
        category: "Main Course".to_owned(),
        ingredients: required.iter().map(|i| Ingredient::new(*i, "1")).collect(),
        instructions: vec!["cook".to_owned()],
        tips: vec![],
        tags: vec![],
        youtube_url: None,
        rating: None,
        review_count: None,
        calories: None,
        meal_type: vec![],
    }
}

pub fn catalog(recipes: Vec<Recipe>) -> Catalog {
    Catalog::new(recipes).expect("unique recipe ids")
}

/// `count` recipes whose ingredients share nothing with everyday pantry words.
pub fn unmatched_catalog(count: usize) -> Catalog {
    catalog(
        (0..count)
            .map(|i| recipe(&format!("r{i}"), &["saffron", "quince"]))
            .collect(),
    )
}
