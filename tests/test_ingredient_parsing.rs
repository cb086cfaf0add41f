use forkify::{parse, parse_all, rescale, IngredientEntry, ShoppingList};

#[test]
fn test_leading_integer_with_known_unit() {
    let cases = [
        ("2 cups flour", 2.0, "cup", "flour"),
        ("1 tablespoon olive oil", 1.0, "tbsp", "olive oil"),
        ("4 Teaspoons baking soda", 4.0, "tsp", "baking soda"),
        ("8 ounces cream cheese", 8.0, "oz", "cream cheese"),
        ("2 pounds ground beef", 2.0, "lb", "ground beef"),
        ("500 grams pasta", 500.0, "g", "pasta"),
    ];

    for (line, count, unit, ingredient) in cases {
        let entry = parse(line);
        assert_eq!(entry.count, Some(count), "count for {:?}", line);
        assert_eq!(entry.unit, unit, "unit for {:?}", line);
        assert_eq!(entry.ingredient, ingredient, "ingredient for {:?}", line);
    }
}

#[test]
fn test_no_leading_number_has_no_count() {
    for line in ["salt to taste", "Freshly ground black pepper", "fresh basil, for garnish"] {
        let entry = parse(line);
        assert_eq!(entry.count, None, "count for {:?}", line);
        assert!(!entry.ingredient.is_empty());
    }
}

#[test]
fn test_unitless_quantity() {
    let entry = parse("3 eggs");
    assert_eq!(entry.count, Some(3.0));
    assert_eq!(entry.unit, "");
    assert_eq!(entry.ingredient, "eggs");
}

#[test]
fn test_real_world_lines() {
    let parsed = parse_all([
        "4 1/2 cups (20.25 ounces) unbleached high-gluten, bread, or all-purpose flour, chilled",
        "1 3/4 teaspoons salt",
        "⅔ cup sugar",
        "1 teaspoon instant yeast",
        "1/4 cup olive oil (optional)",
        "1 3/4 cups water, ice cold (40F)",
    ]);

    assert_eq!(parsed.len(), 6);
    assert_eq!(parsed[0].count, Some(4.5));
    assert_eq!(parsed[0].unit, "cup");
    assert_eq!(
        parsed[0].ingredient,
        "unbleached high-gluten, bread, or all-purpose flour, chilled"
    );
    assert_eq!(parsed[1].count, Some(1.75));
    assert_eq!(parsed[1].unit, "tsp");
    assert!((parsed[2].count.unwrap() - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(parsed[4].ingredient, "olive oil");
    assert_eq!(parsed[5].ingredient, "water, ice cold");
}

#[test]
fn test_ranges_take_lower_bound() {
    let cases = [
        ("1 1/2-2 cups sugar", 1.5, "cup", "sugar"),
        ("1/2-1 cup milk", 0.5, "cup", "milk"),
        ("2–3 cloves garlic", 2.0, "clove", "garlic"),
        ("3 to 4 cups flour", 3.0, "cup", "flour"),
        ("2-3 tablespoons butter", 2.0, "tbsp", "butter"),
    ];

    for (line, count, unit, ingredient) in cases {
        let entry = parse(line);
        assert_eq!(entry.count, Some(count), "count for {:?}", line);
        assert_eq!(entry.unit, unit, "unit for {:?}", line);
        assert_eq!(entry.ingredient, ingredient, "ingredient for {:?}", line);
    }
}

#[test]
fn test_range_scales_as_its_lower_bound() {
    let parsed = parse_all(["1 1/2-2 cups sugar"]);
    let doubled = rescale(&parsed, 4, 8);
    assert_eq!(doubled[0].count, Some(3.0));
    assert_eq!(doubled[0].ingredient, "sugar");
}

#[test]
fn test_one_letter_unit_needs_a_quantity() {
    let entry = parse("g spot");
    assert_eq!(entry.count, None);
    assert_eq!(entry.unit, "");
    assert_eq!(entry.ingredient, "g spot");

    let entry = parse("250 g butter");
    assert_eq!(entry.unit, "g");
}

#[test]
fn test_rescale_parsed_recipe() {
    let parsed = parse_all(["200 g mozzarella", "salt to taste", "1/2 cup milk"]);

    let doubled = rescale(&parsed, 4, 8);
    assert_eq!(doubled[0].count, Some(400.0));
    assert_eq!(doubled[1].count, None);
    assert_eq!(doubled[2].count, Some(1.0));

    for n in 1..=10 {
        assert_eq!(rescale(&parsed, n, n), parsed);
    }
}

#[test]
fn test_shopping_list_round_trip() {
    let mut list = ShoppingList::new();
    list.add_item(Some(1.0), "cup", "rice");
    let before = list.items().to_vec();

    let IngredientEntry {
        count,
        unit,
        ingredient,
    } = parse("2 cans black beans");
    let id = list.add_item(count, unit, ingredient).id.clone();
    list.delete_item(&id);
    assert_eq!(list.items(), before.as_slice());

    list.update_count("missing", Some(4.0));
    assert_eq!(list.len(), 1);
}
