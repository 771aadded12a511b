use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static MIXED_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)\s+)?(\d+)\s*/\s*(\d+)").unwrap());

static UNICODE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)\s*)?([¼½¾⅓⅔⅛])").unwrap());

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d*\.?\d+)").unwrap());

static UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(cups?|tbsps?|tablespoons?|tsps?|teaspoons?|oz|ounces?|lbs?|pounds?|cloves?|slices?|pieces?|cans?|each|large|medium|small)\b",
    )
    .unwrap()
});

pub const DEFAULT_UNIT: &str = "each";

/// Quantity and normalized unit read from a free-text amount such as `"1 ½ cups"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amount {
    pub quantity: f64,
    pub unit: String,
}

impl Amount {
    pub fn is_countable(&self) -> bool {
        self.unit == DEFAULT_UNIT
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_quantity(self.quantity))?;
        if !self.is_countable() {
            write!(f, " {}", self.unit)?;
        }

        Ok(())
    }
}

fn unicode_fraction(c: &str) -> f64 {
    match c {
        "¼" => 0.25,
        "½" => 0.5,
        "¾" => 0.75,
        "⅓" => 1.0 / 3.0,
        "⅔" => 2.0 / 3.0,
        "⅛" => 0.125,
        _ => 0.0,
    }
}

fn whole(capture: Option<regex::Match<'_>>) -> f64 {
    capture
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn parse_quantity(text: &str) -> Option<f64> {
    if let Some(caps) = MIXED_FRACTION.captures(text) {
        let numerator = whole(caps.get(2));
        let denominator = whole(caps.get(3));
        if denominator > 0.0 {
            return Some(whole(caps.get(1)) + numerator / denominator);
        }
    }

    if let Some(caps) = UNICODE_FRACTION.captures(text) {
        let fraction = caps.get(2).map_or(0.0, |m| unicode_fraction(m.as_str()));
        return Some(whole(caps.get(1)) + fraction);
    }

    DECIMAL
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn normalize_unit(unit: &str) -> &str {
    if unit.starts_with("tbsp") || unit.starts_with("tablespoon") {
        "tbsp"
    } else if unit.starts_with("tsp") || unit.starts_with("teaspoon") {
        "tsp"
    } else if unit.starts_with("cup") {
        "cup"
    } else if unit.starts_with("oz") || unit.starts_with("ounce") {
        "oz"
    } else if unit.starts_with("lb") || unit.starts_with("pound") {
        "lb"
    } else if unit.starts_with("clove") {
        "clove"
    } else {
        unit
    }
}

/// Read quantity and unit from an amount string.
///
/// Missing or unreadable quantities count as 1 and missing units as `each`,
/// so every ingredient line yields something usable.
pub fn parse_amount(text: &str) -> Amount {
    let text = text.trim().to_lowercase();

    let quantity = parse_quantity(&text).unwrap_or(1.0);
    let unit = UNIT
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_UNIT, |m| normalize_unit(m.as_str()));

    Amount {
        quantity,
        unit: unit.to_owned(),
    }
}

/// Render a quantity the way a cook reads it: whole numbers, common
/// fractions, otherwise one decimal.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        return format!("{}", quantity as i64);
    }

    let near = |target: f64, tolerance: f64| (quantity - target).abs() < tolerance;
    let glyph = if near(0.25, 0.01) {
        Some("¼")
    } else if near(0.5, 0.01) {
        Some("½")
    } else if near(0.75, 0.01) {
        Some("¾")
    } else if near(0.33, 0.05) {
        Some("⅓")
    } else if near(0.67, 0.05) {
        Some("⅔")
    } else {
        None
    };

    if let Some(glyph) = glyph {
        return glyph.to_owned();
    }

    let rounded = format!("{quantity:.1}");
    match rounded.strip_suffix(".0") {
        Some(integer) => integer.to_owned(),
        None => rounded,
    }
}

/// Rescale an amount written for `from_servings` to `to_servings`.
pub fn scale_amount(text: &str, from_servings: u32, to_servings: u32) -> String {
    let mut amount = parse_amount(text);
    amount.quantity = amount.quantity * f64::from(to_servings) / f64::from(from_servings.max(1));

    amount.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> (f64, String) {
        let amount = parse_amount(text);
        (amount.quantity, amount.unit)
    }

    #[test]
    fn test_parse_whole_and_decimal() {
        assert_eq!(parsed("2 cups"), (2.0, "cup".to_owned()));
        assert_eq!(parsed("1.5 lbs"), (1.5, "lb".to_owned()));
        assert_eq!(parsed(".5 oz"), (0.5, "oz".to_owned()));
        assert_eq!(parsed("3 Tablespoons"), (3.0, "tbsp".to_owned()));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parsed("½ cup"), (0.5, "cup".to_owned()));
        assert_eq!(parsed("1½ teaspoons"), (1.5, "tsp".to_owned()));
        assert_eq!(parsed("1 1/2 cups"), (1.5, "cup".to_owned()));
        assert_eq!(parsed("3/4 tsp"), (0.75, "tsp".to_owned()));
        assert!((parse_amount("⅓ cup").quantity - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parsed("to taste"), (1.0, "each".to_owned()));
        assert_eq!(parsed(""), (1.0, "each".to_owned()));
        assert_eq!(parsed("4"), (4.0, "each".to_owned()));
        assert_eq!(parsed("1/0 cup"), (1.0, "cup".to_owned()));
    }

    #[test]
    fn test_unit_must_be_a_whole_word() {
        assert_eq!(parsed("2 cupcakes"), (2.0, "each".to_owned()));
        assert_eq!(parsed("3 cloves"), (3.0, "clove".to_owned()));
        assert_eq!(parsed("2 large"), (2.0, "large".to_owned()));
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(0.25), "¼");
        assert_eq!(format_quantity(0.5), "½");
        assert_eq!(format_quantity(0.75), "¾");
        assert_eq!(format_quantity(1.0 / 3.0), "⅓");
        assert_eq!(format_quantity(2.0 / 3.0), "⅔");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(2.04), "2");
        assert_eq!(format_quantity(0.1), "0.1");
    }

    #[test]
    fn test_scale_amount() {
        assert_eq!(scale_amount("2 cups", 4, 2), "1 cup");
        assert_eq!(scale_amount("1 cup", 4, 2), "½ cup");
        assert_eq!(scale_amount("3 eggs", 2, 4), "6");
        assert_eq!(scale_amount("1 lb", 4, 6), "1.5 lb");
        assert_eq!(scale_amount("⅓ cup", 2, 4), "⅔ cup");
        assert_eq!(scale_amount("2 tbsp", 0, 2), "4 tbsp");
    }
}
