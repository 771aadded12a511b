/// Reference data for one ingredient, priced per `unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientInfo {
    pub name: &'static str,
    /// USD per `unit`.
    pub price: f64,
    pub unit: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub substitutes: &'static [&'static str],
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    name: &'static str,
    price: f64,
    unit: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    substitutes: &'static [&'static str],
) -> IngredientInfo {
    IngredientInfo {
        name,
        price,
        unit,
        calories,
        protein,
        carbs,
        fat,
        substitutes,
    }
}

// Order matters: partial lookups return the first key that overlaps.
#[rustfmt::skip]
static REFERENCE: &[IngredientInfo] = &[
    // Proteins
    entry("chicken breast", 3.50, "lb", 165.0, 31.0, 0.0, 3.6, &["turkey breast", "tofu", "tempeh"]),
    entry("chicken thighs", 2.50, "lb", 209.0, 26.0, 0.0, 10.9, &["chicken breast", "turkey thighs"]),
    entry("chicken", 3.00, "lb", 187.0, 28.0, 0.0, 7.0, &["turkey", "tofu"]),
    entry("ground beef", 5.00, "lb", 250.0, 26.0, 0.0, 15.0, &["ground turkey", "ground chicken", "plant-based ground"]),
    entry("beef", 6.00, "lb", 250.0, 26.0, 0.0, 15.0, &["pork", "lamb", "mushrooms"]),
    entry("steak", 10.00, "lb", 271.0, 26.0, 0.0, 18.0, &["portobello mushroom", "cauliflower steak"]),
    entry("pork", 4.00, "lb", 242.0, 27.0, 0.0, 14.0, &["chicken", "turkey"]),
    entry("bacon", 6.00, "lb", 541.0, 37.0, 1.0, 42.0, &["turkey bacon", "tempeh bacon", "coconut bacon"]),
    entry("salmon", 10.00, "lb", 208.0, 20.0, 0.0, 13.0, &["trout", "arctic char", "tofu"]),
    entry("shrimp", 9.00, "lb", 99.0, 24.0, 0.0, 0.3, &["scallops", "tofu", "hearts of palm"]),
    entry("fish", 8.00, "lb", 136.0, 24.0, 0.0, 4.0, &["tofu", "tempeh"]),
    entry("tofu", 2.50, "lb", 76.0, 8.0, 2.0, 4.5, &["tempeh", "seitan", "paneer"]),
    entry("eggs", 0.25, "each", 72.0, 6.0, 0.4, 5.0, &["flax egg", "chia egg", "applesauce", "mashed banana"]),
    entry("egg", 0.25, "each", 72.0, 6.0, 0.4, 5.0, &["flax egg", "chia egg", "applesauce"]),
    // Dairy
    entry("milk", 0.50, "cup", 149.0, 8.0, 12.0, 8.0, &["oat milk", "almond milk", "soy milk", "coconut milk"]),
    entry("butter", 0.50, "tbsp", 102.0, 0.0, 0.0, 12.0, &["olive oil", "coconut oil", "margarine", "applesauce"]),
    entry("cream", 0.40, "tbsp", 52.0, 0.4, 0.4, 5.5, &["coconut cream", "cashew cream"]),
    entry("heavy cream", 0.40, "tbsp", 52.0, 0.4, 0.4, 5.5, &["coconut cream", "cashew cream"]),
    entry("cheese", 0.50, "oz", 113.0, 7.0, 0.4, 9.0, &["nutritional yeast", "vegan cheese", "cashew cheese"]),
    entry("cheddar cheese", 0.50, "oz", 113.0, 7.0, 0.4, 9.0, &["gouda", "colby", "vegan cheddar"]),
    entry("parmesan", 0.75, "oz", 111.0, 10.0, 1.0, 7.0, &["nutritional yeast", "pecorino", "vegan parmesan"]),
    entry("parmesan cheese", 0.75, "oz", 111.0, 10.0, 1.0, 7.0, &["nutritional yeast", "pecorino"]),
    entry("mozzarella", 0.40, "oz", 85.0, 6.0, 1.0, 6.0, &["provolone", "vegan mozzarella"]),
    entry("cream cheese", 0.30, "oz", 99.0, 2.0, 1.0, 10.0, &["cashew cream cheese", "vegan cream cheese"]),
    entry("sour cream", 0.20, "tbsp", 23.0, 0.3, 0.5, 2.3, &["greek yogurt", "cashew cream", "coconut cream"]),
    entry("yogurt", 0.30, "oz", 18.0, 1.0, 1.5, 1.0, &["coconut yogurt", "soy yogurt"]),
    entry("greek yogurt", 0.35, "oz", 17.0, 3.0, 1.0, 0.2, &["regular yogurt", "coconut yogurt"]),
    // Grains & Pasta
    entry("rice", 0.15, "cup", 206.0, 4.0, 45.0, 0.4, &["quinoa", "cauliflower rice", "couscous"]),
    entry("pasta", 0.25, "oz", 75.0, 3.0, 15.0, 0.4, &["zucchini noodles", "rice noodles", "gluten-free pasta"]),
    entry("spaghetti", 0.25, "oz", 75.0, 3.0, 15.0, 0.4, &["linguine", "zucchini noodles", "rice noodles"]),
    entry("bread", 0.20, "slice", 79.0, 3.0, 15.0, 1.0, &["lettuce wrap", "gluten-free bread", "tortilla"]),
    entry("flour", 0.05, "tbsp", 28.0, 1.0, 6.0, 0.0, &["almond flour", "coconut flour", "oat flour"]),
    entry("all-purpose flour", 0.05, "tbsp", 28.0, 1.0, 6.0, 0.0, &["whole wheat flour", "almond flour"]),
    entry("breadcrumbs", 0.10, "tbsp", 30.0, 1.0, 5.0, 0.5, &["crushed crackers", "panko", "almond flour"]),
    entry("tortilla", 0.25, "each", 90.0, 2.0, 15.0, 2.5, &["lettuce wrap", "corn tortilla"]),
    entry("noodles", 0.30, "oz", 70.0, 2.0, 14.0, 0.3, &["rice noodles", "zucchini noodles"]),
    // Vegetables
    entry("onion", 0.50, "each", 44.0, 1.0, 10.0, 0.0, &["shallot", "leek", "scallions"]),
    entry("garlic", 0.10, "clove", 4.0, 0.2, 1.0, 0.0, &["garlic powder", "shallot"]),
    entry("tomato", 0.50, "each", 22.0, 1.0, 5.0, 0.2, &["canned tomatoes", "sun-dried tomatoes"]),
    entry("tomatoes", 0.50, "each", 22.0, 1.0, 5.0, 0.2, &["canned tomatoes", "red bell pepper"]),
    entry("potato", 0.30, "each", 161.0, 4.0, 37.0, 0.2, &["sweet potato", "cauliflower"]),
    entry("potatoes", 0.30, "each", 161.0, 4.0, 37.0, 0.2, &["sweet potato", "turnip"]),
    entry("carrot", 0.15, "each", 25.0, 0.6, 6.0, 0.1, &["parsnip", "sweet potato"]),
    entry("carrots", 0.15, "each", 25.0, 0.6, 6.0, 0.1, &["parsnip", "butternut squash"]),
    entry("celery", 0.10, "stalk", 6.0, 0.3, 1.0, 0.1, &["fennel", "bok choy"]),
    entry("bell pepper", 0.75, "each", 31.0, 1.0, 6.0, 0.3, &["poblano", "anaheim pepper"]),
    entry("broccoli", 0.50, "cup", 31.0, 2.5, 6.0, 0.3, &["cauliflower", "broccolini"]),
    entry("spinach", 0.30, "cup", 7.0, 1.0, 1.0, 0.1, &["kale", "swiss chard", "arugula"]),
    entry("lettuce", 0.20, "cup", 5.0, 0.5, 1.0, 0.1, &["spinach", "arugula", "cabbage"]),
    entry("mushrooms", 0.40, "cup", 15.0, 2.0, 2.0, 0.2, &["zucchini", "eggplant"]),
    entry("zucchini", 0.40, "each", 33.0, 2.0, 6.0, 0.6, &["yellow squash", "cucumber"]),
    entry("cucumber", 0.50, "each", 16.0, 0.7, 4.0, 0.1, &["zucchini", "celery"]),
    entry("avocado", 1.50, "each", 234.0, 3.0, 12.0, 21.0, &["hummus", "mashed banana"]),
    entry("corn", 0.30, "ear", 77.0, 3.0, 17.0, 1.0, &["peas", "edamame"]),
    entry("peas", 0.25, "cup", 62.0, 4.0, 11.0, 0.3, &["edamame", "green beans"]),
    entry("green beans", 0.30, "cup", 31.0, 2.0, 7.0, 0.1, &["asparagus", "snap peas"]),
    entry("cabbage", 0.20, "cup", 17.0, 1.0, 4.0, 0.1, &["lettuce", "brussels sprouts"]),
    entry("cauliflower", 0.40, "cup", 25.0, 2.0, 5.0, 0.1, &["broccoli", "rice"]),
    // Fruits
    entry("lemon", 0.35, "each", 17.0, 0.6, 5.0, 0.2, &["lime", "vinegar"]),
    entry("lime", 0.30, "each", 11.0, 0.2, 4.0, 0.1, &["lemon", "orange"]),
    entry("apple", 0.50, "each", 95.0, 0.5, 25.0, 0.3, &["pear", "peach"]),
    entry("banana", 0.25, "each", 105.0, 1.0, 27.0, 0.4, &["plantain", "mango"]),
    entry("orange", 0.50, "each", 62.0, 1.0, 15.0, 0.2, &["tangerine", "grapefruit"]),
    entry("berries", 1.00, "cup", 84.0, 1.0, 21.0, 0.5, &["frozen berries", "grapes"]),
    // Oils & Fats
    entry("olive oil", 0.15, "tbsp", 119.0, 0.0, 0.0, 14.0, &["avocado oil", "vegetable oil", "coconut oil"]),
    entry("vegetable oil", 0.08, "tbsp", 120.0, 0.0, 0.0, 14.0, &["canola oil", "olive oil"]),
    entry("coconut oil", 0.20, "tbsp", 121.0, 0.0, 0.0, 13.0, &["butter", "vegetable oil"]),
    entry("sesame oil", 0.25, "tbsp", 120.0, 0.0, 0.0, 14.0, &["peanut oil", "vegetable oil"]),
    // Seasonings & Spices
    entry("salt", 0.01, "tsp", 0.0, 0.0, 0.0, 0.0, &["sea salt", "kosher salt", "soy sauce"]),
    entry("pepper", 0.02, "tsp", 2.0, 0.1, 0.5, 0.0, &["white pepper", "cayenne"]),
    entry("black pepper", 0.02, "tsp", 2.0, 0.1, 0.5, 0.0, &["white pepper"]),
    entry("paprika", 0.05, "tsp", 6.0, 0.3, 1.0, 0.3, &["cayenne", "chili powder"]),
    entry("cumin", 0.05, "tsp", 8.0, 0.4, 1.0, 0.5, &["coriander", "caraway"]),
    entry("oregano", 0.05, "tsp", 3.0, 0.1, 0.7, 0.1, &["basil", "thyme", "marjoram"]),
    entry("basil", 0.10, "tbsp", 1.0, 0.1, 0.1, 0.0, &["oregano", "parsley"]),
    entry("thyme", 0.05, "tsp", 1.0, 0.0, 0.2, 0.0, &["oregano", "rosemary"]),
    entry("rosemary", 0.05, "tsp", 1.0, 0.0, 0.2, 0.0, &["thyme", "sage"]),
    entry("cinnamon", 0.05, "tsp", 6.0, 0.1, 2.0, 0.0, &["nutmeg", "allspice"]),
    entry("ginger", 0.15, "tbsp", 5.0, 0.1, 1.0, 0.0, &["ground ginger", "galangal"]),
    entry("chili powder", 0.05, "tsp", 8.0, 0.3, 1.4, 0.4, &["cayenne + cumin", "paprika"]),
    entry("curry powder", 0.10, "tsp", 7.0, 0.3, 1.2, 0.3, &["garam masala", "individual spices"]),
    // Sauces & Condiments
    entry("soy sauce", 0.10, "tbsp", 9.0, 1.0, 1.0, 0.0, &["tamari", "coconut aminos", "worcestershire"]),
    entry("tomato sauce", 0.15, "oz", 8.0, 0.3, 2.0, 0.0, &["crushed tomatoes", "tomato paste + water"]),
    entry("ketchup", 0.05, "tbsp", 19.0, 0.2, 5.0, 0.0, &["tomato paste + vinegar + sugar"]),
    entry("mustard", 0.05, "tsp", 3.0, 0.2, 0.3, 0.2, &["horseradish", "wasabi"]),
    entry("mayonnaise", 0.10, "tbsp", 94.0, 0.1, 0.0, 10.0, &["greek yogurt", "avocado", "hummus"]),
    entry("honey", 0.15, "tbsp", 64.0, 0.0, 17.0, 0.0, &["maple syrup", "agave", "brown sugar"]),
    entry("maple syrup", 0.25, "tbsp", 52.0, 0.0, 13.0, 0.0, &["honey", "agave", "brown sugar syrup"]),
    entry("vinegar", 0.05, "tbsp", 3.0, 0.0, 0.0, 0.0, &["lemon juice", "lime juice"]),
    entry("worcestershire", 0.10, "tsp", 4.0, 0.0, 1.0, 0.0, &["soy sauce + vinegar", "fish sauce"]),
    // Canned & Pantry
    entry("canned tomatoes", 0.15, "oz", 5.0, 0.2, 1.0, 0.0, &["fresh tomatoes", "tomato sauce"]),
    entry("tomato paste", 0.20, "tbsp", 13.0, 0.7, 3.0, 0.1, &["tomato sauce (reduced)", "ketchup"]),
    entry("chicken broth", 0.10, "oz", 1.0, 0.2, 0.0, 0.0, &["vegetable broth", "water + bouillon"]),
    entry("vegetable broth", 0.10, "oz", 2.0, 0.1, 0.5, 0.0, &["chicken broth", "water + miso"]),
    entry("coconut milk", 0.20, "oz", 30.0, 0.3, 0.5, 3.0, &["heavy cream", "cashew cream"]),
    entry("beans", 0.10, "oz", 21.0, 1.4, 4.0, 0.1, &["lentils", "chickpeas"]),
    entry("chickpeas", 0.10, "oz", 23.0, 1.5, 4.0, 0.4, &["white beans", "lentils"]),
    entry("lentils", 0.08, "oz", 20.0, 1.6, 3.5, 0.1, &["beans", "split peas"]),
    // Baking
    entry("sugar", 0.02, "tbsp", 48.0, 0.0, 12.0, 0.0, &["honey", "maple syrup", "stevia"]),
    entry("brown sugar", 0.03, "tbsp", 52.0, 0.0, 13.0, 0.0, &["white sugar + molasses", "coconut sugar"]),
    entry("baking powder", 0.02, "tsp", 2.0, 0.0, 1.0, 0.0, &["baking soda + cream of tartar"]),
    entry("baking soda", 0.01, "tsp", 0.0, 0.0, 0.0, 0.0, &["baking powder (3x amount)"]),
    entry("vanilla", 0.30, "tsp", 12.0, 0.0, 0.5, 0.0, &["vanilla bean", "almond extract"]),
    entry("vanilla extract", 0.30, "tsp", 12.0, 0.0, 0.5, 0.0, &["vanilla bean paste", "maple syrup"]),
    entry("chocolate chips", 0.20, "oz", 70.0, 0.8, 9.0, 4.0, &["chopped chocolate bar", "carob chips"]),
    entry("cocoa powder", 0.15, "tbsp", 12.0, 1.0, 3.0, 0.7, &["carob powder", "chocolate"]),
    // Nuts & Seeds
    entry("almonds", 0.50, "oz", 164.0, 6.0, 6.0, 14.0, &["cashews", "sunflower seeds"]),
    entry("walnuts", 0.60, "oz", 185.0, 4.0, 4.0, 18.0, &["pecans", "almonds"]),
    entry("peanuts", 0.30, "oz", 161.0, 7.0, 5.0, 14.0, &["sunflower seeds", "soy nuts"]),
    entry("peanut butter", 0.15, "tbsp", 94.0, 4.0, 3.0, 8.0, &["almond butter", "sunflower seed butter", "tahini"]),
    entry("sesame seeds", 0.10, "tbsp", 52.0, 2.0, 2.0, 4.5, &["hemp seeds", "poppy seeds"]),
];

/// The whole reference table, in lookup order.
pub fn reference() -> &'static [IngredientInfo] {
    REFERENCE
}

fn exact(name: &str) -> Option<&'static IngredientInfo> {
    REFERENCE.iter().find(|info| info.name == name)
}

/// Look up an ingredient by free-form name.
///
/// Tries an exact key first, then the first key overlapping the name in
/// either direction, then any word longer than three characters that is a
/// key on its own.
pub fn find_ingredient(name: &str) -> Option<&'static IngredientInfo> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    if let Some(info) = exact(&name) {
        return Some(info);
    }

    if let Some(info) = REFERENCE
        .iter()
        .find(|info| name.contains(info.name) || info.name.contains(name.as_str()))
    {
        return Some(info);
    }

    name.split(' ')
        .filter(|word| word.chars().count() > 3)
        .find_map(exact)
}

pub fn substitutes(name: &str) -> &'static [&'static str] {
    find_ingredient(name).map_or(&[], |info| info.substitutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup_wins_over_partial() {
        let info = find_ingredient("  Chicken ").unwrap();
        assert_eq!(info.name, "chicken");
        assert_eq!(info.unit, "lb");
    }

    #[test]
    fn test_partial_lookup_uses_table_order() {
        assert_eq!(
            find_ingredient("boneless chicken breast").unwrap().name,
            "chicken breast"
        );
        assert_eq!(find_ingredient("grated parmesan").unwrap().name, "parmesan");
    }

    #[test]
    fn test_unknown_ingredient() {
        assert!(find_ingredient("dragonfruit").is_none());
        assert!(find_ingredient("  ").is_none());
        assert!(substitutes("dragonfruit").is_empty());
    }

    #[test]
    fn test_substitutes() {
        assert_eq!(
            substitutes("peanut butter"),
            &["almond butter", "sunflower seed butter", "tahini"]
        );
    }

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        let mut names = REFERENCE.iter().map(|i| i.name).collect::<Vec<_>>();
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REFERENCE.len());
    }
}
