use gapchef_recipe::Recipe;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Allergen {
    Peanuts,
    #[strum(serialize = "Tree Nuts")]
    #[serde(rename = "Tree Nuts")]
    TreeNuts,
    Milk,
    Eggs,
    Wheat,
    Soy,
    Fish,
    Shellfish,
    Sesame,
}

impl Allergen {
    /// Ingredient words that signal the allergen.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Allergen::Peanuts => &["peanut", "groundnut"],
            Allergen::TreeNuts => &[
                "almond",
                "walnut",
                "cashew",
                "pecan",
                "pistachio",
                "hazelnut",
                "macadamia",
                "pine nut",
                "brazil nut",
            ],
            Allergen::Milk => &[
                "milk",
                "cream",
                "butter",
                "cheese",
                "yogurt",
                "whey",
                "casein",
                "ghee",
                "half-and-half",
                "ricotta",
                "mozzarella",
                "parmesan",
                "cheddar",
                "feta",
            ],
            Allergen::Eggs => &["egg", "mayonnaise", "mayo", "meringue", "custard"],
            Allergen::Wheat => &[
                "flour",
                "bread",
                "pasta",
                "noodle",
                "wheat",
                "cracker",
                "tortilla",
                "bun",
                "roll",
                "croissant",
                "pita",
                "couscous",
                "bulgur",
                "seitan",
            ],
            Allergen::Soy => &["soy", "tofu", "tempeh", "edamame", "miso", "tamari"],
            Allergen::Fish => &[
                "fish",
                "salmon",
                "tuna",
                "cod",
                "halibut",
                "tilapia",
                "trout",
                "bass",
                "anchov",
                "sardine",
                "mackerel",
            ],
            Allergen::Shellfish => &[
                "shrimp",
                "prawn",
                "crab",
                "lobster",
                "clam",
                "mussel",
                "oyster",
                "scallop",
                "crawfish",
                "crayfish",
                "shellfish",
            ],
            Allergen::Sesame => &["sesame", "tahini"],
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Diet {
    Vegetarian,
    Vegan,
    #[strum(serialize = "Gluten-Free")]
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[strum(serialize = "Dairy-Free")]
    #[serde(rename = "Dairy-Free")]
    DairyFree,
    Keto,
    #[strum(serialize = "Low-Carb")]
    #[serde(rename = "Low-Carb")]
    LowCarb,
}

const MEAT_AND_SEAFOOD: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "fish", "salmon", "tuna", "shrimp", "bacon", "ham",
    "sausage", "meat", "turkey", "duck", "veal", "steak", "prawn", "crab", "lobster",
];

const ANIMAL_PRODUCTS: &[&str] = &[
    "egg",
    "milk",
    "cream",
    "butter",
    "cheese",
    "yogurt",
    "honey",
    "mayo",
    "ghee",
];

const STARCHES: &[&str] = &[
    "sugar", "flour", "bread", "pasta", "rice", "potato", "corn", "beans",
];

impl Diet {
    /// Ingredient words a compliant recipe must not mention.
    pub fn excludes(&self) -> Vec<&'static str> {
        match self {
            Diet::Vegetarian => [MEAT_AND_SEAFOOD, &["anchov"][..]].concat(),
            Diet::Vegan => [MEAT_AND_SEAFOOD, ANIMAL_PRODUCTS].concat(),
            Diet::GlutenFree => vec![
                "flour",
                "bread",
                "pasta",
                "noodle",
                "wheat",
                "barley",
                "rye",
                "cracker",
                "couscous",
                "bulgur",
                "seitan",
                "soy sauce",
            ],
            Diet::DairyFree => vec![
                "milk",
                "cream",
                "butter",
                "cheese",
                "yogurt",
                "whey",
                "casein",
                "ghee",
                "half-and-half",
                "ricotta",
                "mozzarella",
                "parmesan",
                "cheddar",
                "feta",
            ],
            Diet::Keto => [
                STARCHES,
                &["oats", "honey", "maple syrup", "banana", "apple", "orange"][..],
            ]
            .concat(),
            Diet::LowCarb => STARCHES.to_vec(),
        }
    }
}

/// Allergens found and diets checked for one recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryAssessment {
    pub allergen_warnings: Vec<Allergen>,
    pub violated_diets: Vec<Diet>,
    pub satisfied_diets: Vec<Diet>,
}

impl DietaryAssessment {
    pub fn is_empty(&self) -> bool {
        self.allergen_warnings.is_empty()
            && self.violated_diets.is_empty()
            && self.satisfied_diets.is_empty()
    }
}

fn searchable_text(recipe: &Recipe) -> String {
    recipe
        .ingredients
        .iter()
        .map(|i| i.item.as_str())
        .chain(recipe.tags.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Check a recipe's ingredients and tags against a profile.
///
/// Matching is plain substring search, so "peanut butter" warns for both
/// Peanuts and Milk. Results keep the order of `allergies` and `diets`.
pub fn assess(recipe: &Recipe, allergies: &[Allergen], diets: &[Diet]) -> DietaryAssessment {
    let text = searchable_text(recipe);
    let mentions = |word: &&str| text.contains(*word);

    let allergen_warnings = allergies
        .iter()
        .filter(|allergen| allergen.keywords().iter().any(mentions))
        .copied()
        .collect();

    let (violated_diets, satisfied_diets): (Vec<Diet>, Vec<Diet>) = diets
        .iter()
        .partition(|diet| diet.excludes().iter().any(mentions));

    DietaryAssessment {
        allergen_warnings,
        violated_diets,
        satisfied_diets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapchef_recipe::{Difficulty, Ingredient};
    use std::str::FromStr;

    fn recipe(items: &[&str], tags: &[&str]) -> Recipe {
        Recipe {
            id: "r".to_owned(),
            name: "test".to_owned(),
            description: String::new(),
            image: String::new(),
            prep_time: 5,
            cook_time: 5,
            servings: 2,
            difficulty: Difficulty::Easy,
            cuisine: "American".to_owned(),
            category: "Snack".to_owned(),
            ingredients: items.iter().map(|i| Ingredient::new(*i, "1")).collect(),
            instructions: vec![],
            tips: vec![],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            youtube_url: None,
            rating: None,
            review_count: None,
            calories: None,
            meal_type: vec![],
        }
    }

    #[test]
    fn test_peanut_butter_warns() {
        let toast = recipe(&["Peanut Butter", "bread"], &[]);

        let assessment = assess(&toast, &[Allergen::Peanuts, Allergen::Fish], &[]);

        assert_eq!(assessment.allergen_warnings, vec![Allergen::Peanuts]);
    }

    #[test]
    fn test_diets_split_into_violated_and_satisfied() {
        let salad = recipe(&["lettuce", "feta", "olive oil"], &["fresh"]);

        let assessment = assess(
            &salad,
            &[],
            &[Diet::Vegetarian, Diet::DairyFree, Diet::GlutenFree],
        );

        assert_eq!(assessment.violated_diets, vec![Diet::DairyFree]);
        assert_eq!(
            assessment.satisfied_diets,
            vec![Diet::Vegetarian, Diet::GlutenFree]
        );
    }

    #[test]
    fn test_tags_are_searched() {
        let dish = recipe(&["rice"], &["Contains Shrimp"]);

        let assessment = assess(&dish, &[Allergen::Shellfish], &[Diet::Vegetarian]);

        assert_eq!(assessment.allergen_warnings, vec![Allergen::Shellfish]);
        assert_eq!(assessment.violated_diets, vec![Diet::Vegetarian]);
    }

    #[test]
    fn test_no_profile_means_empty_assessment() {
        let dish = recipe(&["chicken"], &[]);

        assert!(assess(&dish, &[], &[]).is_empty());
    }

    #[test]
    fn test_vocabulary_names() {
        assert_eq!(Allergen::TreeNuts.to_string(), "Tree Nuts");
        assert_eq!(Diet::from_str("Gluten-Free").unwrap(), Diet::GlutenFree);
        assert_eq!(
            serde_json::to_string(&Diet::LowCarb).unwrap(),
            "\"Low-Carb\""
        );
        assert_eq!(Allergen::VARIANTS.len(), 9);
        assert_eq!(Diet::VARIANTS.len(), 6);
    }
}
