use crate::model::IngredientEntry;

/// Scale every quantity by `to / from` servings.
///
/// Returns a new vector and leaves `ingredients` untouched. Entries without a
/// count pass through. No rounding happens here, so repeated increase and
/// decrease steps do not drift; round for display only.
pub fn rescale(ingredients: &[IngredientEntry], from: u32, to: u32) -> Vec<IngredientEntry> {
    debug_assert!(from >= 1 && to >= 1, "servings must be at least 1");
    let factor = f64::from(to) / f64::from(from);
    ingredients
        .iter()
        .map(|entry| IngredientEntry {
            count: entry.count.map(|count| count * factor),
            ..entry.clone()
        })
        .collect()
}
