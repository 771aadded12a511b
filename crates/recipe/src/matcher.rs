//! Fuzzy ingredient matching and recipe ranking.
//!
//! Every caller that needs to know whether an ingredient is "on hand" goes
//! through [`AvailableIngredients::satisfies`], so match scores, availability
//! flags and missing-ingredient lists always agree with each other.

use std::cmp::Ordering;

use crate::{Catalog, Recipe};

/// Minimum fraction of required ingredients a recipe must cover to be ranked.
pub const DEFAULT_MIN_MATCH: f64 = 0.2;

/// Default size of a result page.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Tokens must be longer than this to take part in word overlap.
const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    pub min_match: f64,
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_match: DEFAULT_MIN_MATCH,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn long_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split_whitespace()
        .filter(|t| t.chars().count() > MIN_TOKEN_LEN)
}

/// The caller's ingredients, normalized once per request.
#[derive(Debug, Clone, Default)]
pub struct AvailableIngredients {
    normalized: Vec<String>,
}

impl AvailableIngredients {
    pub fn new<S: AsRef<str>>(available: &[S]) -> Self {
        let normalized = available
            .iter()
            .map(|a| normalize(a.as_ref()))
            .filter(|a| !a.is_empty())
            .collect();

        Self { normalized }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Whether `required` is covered by at least one available ingredient.
    ///
    /// Containment is checked in both directions, on the whole strings and on
    /// their tokens longer than three characters. Blank candidates are dropped
    /// at construction so they never match.
    pub fn satisfies(&self, required: &str) -> bool {
        let required = normalize(required);

        self.normalized.iter().any(|candidate| {
            required.contains(candidate.as_str())
                || candidate.contains(required.as_str())
                || long_tokens(&required).any(|t| candidate.contains(t))
                || long_tokens(candidate).any(|t| required.contains(t))
        })
    }
}

/// One-shot form of [`AvailableIngredients::satisfies`].
pub fn is_satisfied<S: AsRef<str>>(required: &str, available: &[S]) -> bool {
    AvailableIngredients::new(available).satisfies(required)
}

/// Coverage of one recipe's required ingredients.
#[derive(Debug, Clone, Copy)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub matched: usize,
    pub required: usize,
}

impl<'a> RecipeMatch<'a> {
    pub fn score(recipe: &'a Recipe, available: &AvailableIngredients) -> Self {
        let (matched, required) = recipe
            .required_items()
            .fold((0, 0), |(matched, required), item| {
                (matched + usize::from(available.satisfies(item)), required + 1)
            });

        Self {
            recipe,
            matched,
            required,
        }
    }

    /// Matched share of required ingredients, 0 when nothing is required.
    pub fn fraction(&self) -> f64 {
        if self.required == 0 {
            return 0.0;
        }

        self.matched as f64 / self.required as f64
    }

    pub fn missing(&self) -> usize {
        self.required - self.matched
    }

    /// Best match first: higher fraction, then fewer missing ingredients.
    fn rank(&self, other: &Self) -> Ordering {
        // Cross-multiplied so equal ratios such as 1/2 and 5/10 compare equal.
        let lhs = self.matched * other.required.max(1);
        let rhs = other.matched * self.required.max(1);

        rhs.cmp(&lhs)
            .then_with(|| self.missing().cmp(&other.missing()))
    }
}

/// Rank the catalog against the caller's ingredients.
///
/// Recipes below `options.min_match` are dropped; the rest are ordered by
/// match fraction descending, then missing count ascending. Remaining ties
/// keep catalog order.
pub fn match_recipes<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    available: &[S],
    options: &MatchOptions,
) -> Vec<RecipeMatch<'a>> {
    let available = AvailableIngredients::new(available);
    rank_recipes(catalog, &available, options)
}

pub(crate) fn rank_recipes<'a>(
    catalog: &'a Catalog,
    available: &AvailableIngredients,
    options: &MatchOptions,
) -> Vec<RecipeMatch<'a>> {
    let mut matches = catalog
        .iter()
        .map(|recipe| RecipeMatch::score(recipe, available))
        .filter(|m| m.fraction() >= options.min_match)
        .collect::<Vec<_>>();

    matches.sort_by(|a, b| a.rank(b));

    tracing::debug!(
        ranked = matches.len(),
        catalog = catalog.len(),
        "recipes matched"
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_both_directions() {
        assert!(is_satisfied("chicken breast", &["chicken"]));
        assert!(is_satisfied("chicken", &["chicken breast"]));
    }

    #[test]
    fn test_short_token_still_matches_by_substring() {
        assert!(is_satisfied("soy sauce", &["soy"]));
        assert!(is_satisfied("Soy Sauce", &["  SOY "]));
    }

    #[test]
    fn test_long_token_overlap() {
        assert!(is_satisfied("boneless skinless chicken thighs", &["chicken wings"]));
        assert!(is_satisfied("fresh basil", &["basil leaves"]));
    }

    #[test]
    fn test_short_tokens_do_not_overlap() {
        // "oil" is three characters, so it cannot bridge the two strings.
        assert!(!is_satisfied("olive oil", &["sesame oil"]));
        assert!(!is_satisfied("red onion", &["red pepper"]));
    }

    #[test]
    fn test_blank_candidate_never_matches() {
        assert!(!is_satisfied("garlic", &[""]));
        assert!(!is_satisfied("garlic", &["   "]));
        assert!(!is_satisfied::<&str>("garlic", &[]));
    }

    #[test]
    fn test_rank_equal_ratio_prefers_fewer_missing() {
        let small = test_recipe();
        let a = RecipeMatch {
            recipe: &small,
            matched: 1,
            required: 2,
        };
        let b = RecipeMatch {
            recipe: &small,
            matched: 5,
            required: 10,
        };

        assert_eq!(a.rank(&b), Ordering::Less);
        assert_eq!(b.rank(&a), Ordering::Greater);
    }

    fn test_recipe() -> crate::Recipe {
        crate::Recipe {
            id: "t".to_owned(),
            name: "Test".to_owned(),
            description: String::new(),
            image: String::new(),
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            difficulty: crate::Difficulty::Easy,
            cuisine: String::new(),
            category: String::new(),
            ingredients: vec![],
            instructions: vec![],
            tips: vec![],
            tags: vec![],
            youtube_url: None,
            rating: None,
            review_count: None,
            calories: None,
            meal_type: vec![],
        }
    }
}
