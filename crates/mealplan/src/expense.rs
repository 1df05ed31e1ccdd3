use plateplan_recipe::Catalog;

use crate::WeeklyPlan;

/// Sum of the cost of every planned meal. No rounding is applied.
pub fn expense_total(plan: &WeeklyPlan, catalog: &Catalog) -> f64 {
    plan.assigned()
        .filter_map(|id| match catalog.get(id) {
            Some(recipe) => Some(recipe.cost),
            None => {
                tracing::warn!(recipe_id = %id, "planned recipe missing from catalog");
                None
            }
        })
        .fold(0.0, |total, cost| total + cost)
}
