//! Sellable-units computation
//!
//! How many whole units of a product the current stock supports: the
//! limiting ingredient decides, `floor(min_i(stock_i / per_unit_i))`.
//! Fail-closed: a recipe entry whose material is absent from the stock map
//! (unknown or soft-deleted) makes the product unsellable, and an empty
//! recipe supports zero units.

use std::collections::BTreeMap;

use shared::models::RecipeItem;

/// Units sellable given live stock levels, keyed by material id
///
/// A `quantity_per_unit` of zero never limits; the division yields infinity
/// and only the other ingredients count.
pub fn available_units(recipe: &[RecipeItem], stocks: &BTreeMap<u64, f64>) -> u32 {
    if recipe.is_empty() {
        return 0;
    }
    let mut min_units = f64::INFINITY;
    for item in recipe {
        let Some(&stock) = stocks.get(&item.material_id) else {
            return 0;
        };
        let units = (stock / item.quantity_per_unit).floor();
        min_units = min_units.min(units);
    }
    if min_units.is_finite() && min_units > 0.0 {
        min_units as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(material_id: u64, quantity_per_unit: f64) -> RecipeItem {
        RecipeItem {
            material_id,
            quantity_per_unit,
        }
    }

    fn stocks(entries: &[(u64, f64)]) -> BTreeMap<u64, f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_limiting_ingredient_wins() {
        // Needs 2 of material 1 (stock 10 -> 5 units) and 1 of material 2
        // (stock 3 -> 3 units); the scarcer one limits.
        let recipe = [item(1, 2.0), item(2, 1.0)];
        let stock = stocks(&[(1, 10.0), (2, 3.0)]);
        assert_eq!(available_units(&recipe, &stock), 3);
    }

    #[test]
    fn test_fractional_leftover_floors() {
        let recipe = [item(1, 2.0)];
        let stock = stocks(&[(1, 7.0)]);
        assert_eq!(available_units(&recipe, &stock), 3);
    }

    #[test]
    fn test_exact_division_is_not_floored_away() {
        // 1.0 / 0.2 must come out as exactly 5, not 4.999... -> 4.
        let recipe = [item(1, 0.2)];
        let stock = stocks(&[(1, 1.0)]);
        assert_eq!(available_units(&recipe, &stock), 5);

        let stock = stocks(&[(1, 10.0)]);
        assert_eq!(available_units(&recipe, &stock), 50);
    }

    #[test]
    fn test_empty_recipe_sells_nothing() {
        assert_eq!(available_units(&[], &stocks(&[(1, 100.0)])), 0);
    }

    #[test]
    fn test_missing_material_sells_nothing() {
        let recipe = [item(1, 1.0), item(2, 1.0)];
        let stock = stocks(&[(1, 100.0)]);
        assert_eq!(available_units(&recipe, &stock), 0);
    }

    #[test]
    fn test_zero_per_unit_does_not_limit() {
        let recipe = [item(1, 0.0), item(2, 2.0)];
        let stock = stocks(&[(1, 0.0), (2, 10.0)]);
        assert_eq!(available_units(&recipe, &stock), 5);

        // Nothing else limiting means nothing sellable.
        let recipe = [item(1, 0.0)];
        let stock = stocks(&[(1, 50.0)]);
        assert_eq!(available_units(&recipe, &stock), 0);
    }

    #[test]
    fn test_zero_stock_sells_nothing() {
        let recipe = [item(1, 0.5)];
        let stock = stocks(&[(1, 0.0)]);
        assert_eq!(available_units(&recipe, &stock), 0);
    }
}
