//! Recipe catalog and the ingredient matching engine.
//!
//! Data flows one way: [`match_recipes`] ranks the catalog, [`build_results`]
//! pads and annotates a page of results, and [`filter`]/[`sort`] narrow and
//! reorder whatever the caller decides to show.

mod annotate;
mod catalog;
mod error;
pub mod filter;
pub mod matcher;
mod types;

pub use annotate::{AnnotatedRecipe, build_results};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use filter::{RecipeFilters, SortOption, filter, sort};
pub use matcher::{AvailableIngredients, MatchOptions, RecipeMatch, is_satisfied, match_recipes};
pub use types::{Difficulty, Ingredient, Recipe};
