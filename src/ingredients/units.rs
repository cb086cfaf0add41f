/// Spellings of a measurement unit mapped to the canonical short token.
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbsp", "tbsp"),
    ("tbs", "tbsp"),
    ("tbl", "tbsp"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsps", "tsp"),
    ("tsp", "tsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("oz", "oz"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("c", "cup"),
    ("pounds", "lb"),
    ("pound", "lb"),
    ("lbs", "lb"),
    ("lb", "lb"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kg", "kg"),
    ("millilitres", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("milliliter", "ml"),
    ("ml", "ml"),
    ("litres", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("liter", "l"),
    ("l", "l"),
    ("pinches", "pinch"),
    ("pinch", "pinch"),
    ("dashes", "dash"),
    ("dash", "dash"),
    ("cloves", "clove"),
    ("clove", "clove"),
    ("cans", "can"),
    ("can", "can"),
    ("packages", "pkg"),
    ("package", "pkg"),
    ("pkg", "pkg"),
    ("pints", "pint"),
    ("pint", "pint"),
    ("quarts", "qt"),
    ("quart", "qt"),
    ("qt", "qt"),
    ("slices", "slice"),
    ("slice", "slice"),
    ("sticks", "stick"),
    ("stick", "stick"),
];

/// Short words that look like unit abbreviations but never are.
const NOT_UNITS: &[&str] = &["a", "an", "as", "at", "in", "of", "on", "or", "to"];

/// Map a unit spelling to its canonical token. Unknown tokens pass through.
pub fn normalize_unit(token: &str) -> &str {
    let bare = token.trim_end_matches('.');
    UNIT_SYNONYMS
        .iter()
        .find(|(spelling, _)| *spelling == bare)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(token)
}

pub fn is_known_unit(token: &str) -> bool {
    let bare = token.trim_end_matches('.');
    UNIT_SYNONYMS.iter().any(|(spelling, _)| *spelling == bare)
}

/// Alphabetic tokens of at most two letters are taken to be unit abbreviations
pub fn looks_like_abbreviation(token: &str) -> bool {
    let bare = token.trim_end_matches('.');
    !bare.is_empty()
        && bare.chars().count() <= 2
        && bare.chars().all(char::is_alphabetic)
        && !NOT_UNITS.contains(&bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_long_forms() {
        assert_eq!(normalize_unit("tablespoons"), "tbsp");
        assert_eq!(normalize_unit("teaspoon"), "tsp");
        assert_eq!(normalize_unit("ounces"), "oz");
        assert_eq!(normalize_unit("cups"), "cup");
        assert_eq!(normalize_unit("pounds"), "lb");
    }

    #[test]
    fn test_normalize_trailing_period() {
        assert_eq!(normalize_unit("tbsp."), "tbsp");
        assert_eq!(normalize_unit("oz."), "oz");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(normalize_unit("handful"), "handful");
        assert!(!is_known_unit("eggs"));
    }

    #[test]
    fn test_abbreviation_heuristic() {
        assert!(looks_like_abbreviation("lg"));
        assert!(looks_like_abbreviation("T."));
        assert!(!looks_like_abbreviation("of"));
        assert!(!looks_like_abbreviation("a"));
        assert!(!looks_like_abbreviation("egg"));
        assert!(!looks_like_abbreviation("12"));
    }
}
