use plateplan_mealplan::WeeklyPlan;
use plateplan_recipe::Catalog;
use plateplan_shared::shopping::Stock;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    pub checked: bool,
}

/// Ingredients needed by the weekly plan and missing from the pantry.
///
/// The list is always rebuilt from scratch; checked flags do not survive a
/// rebuild.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Walks the plan in calendar order and collects each missing ingredient
    /// once, in order of discovery.
    pub fn generate<S: Stock + ?Sized>(plan: &WeeklyPlan, stock: &S, catalog: &Catalog) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for recipe in plan.assigned().filter_map(|id| catalog.get(id)) {
            for ingredient in &recipe.ingredients {
                if stock.has(ingredient) || !seen.insert(ingredient.as_str()) {
                    continue;
                }

                items.push(ShoppingItem {
                    name: ingredient.to_owned(),
                    checked: false,
                });
            }
        }

        tracing::debug!(items = items.len(), "shopping list generated");

        Self { items }
    }

    /// Flips the checked flag of an item and returns the new value.
    pub fn toggle(&mut self, name: &str) -> plateplan_shared::Result<bool> {
        let Some(item) = self.items.iter_mut().find(|i| i.name == name) else {
            plateplan_shared::not_found!("shopping item '{}'", name);
        };

        item.checked = !item.checked;

        Ok(item.checked)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShoppingItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pantry;
    use plateplan_shared::{
        mealplan::{Day, MealType},
        recipe::RecipeId,
    };

    fn plan(slots: &[(Day, MealType, u32)]) -> WeeklyPlan {
        let mut plan = WeeklyPlan::new();
        for &(day, meal_type, id) in slots {
            plan.assign(day, meal_type, RecipeId(id));
        }
        plan
    }

    #[test]
    fn test_empty_plan_gives_empty_list() {
        let list =
            ShoppingList::generate(&WeeklyPlan::new(), &Pantry::starter(), &Catalog::sample());

        assert!(list.is_empty());
    }

    #[test]
    fn test_pantry_items_are_subtracted() {
        let plan = plan(&[
            (Day::Monday, MealType::Breakfast, 1),
            (Day::Monday, MealType::Lunch, 2),
        ]);

        let list = ShoppingList::generate(&plan, &Pantry::starter(), &Catalog::sample());

        assert_eq!(
            list.names().collect::<Vec<_>>(),
            vec!["avocado", "chicken breast", "lettuce", "tomato", "cucumber"]
        );
        assert!(list.iter().all(|i| !i.checked));
    }

    #[test]
    fn test_pantry_match_is_case_sensitive() {
        let plan = plan(&[(Day::Monday, MealType::Lunch, 2)]);
        let mut pantry = Pantry::starter();
        pantry.add("Tomato").unwrap();

        let list = ShoppingList::generate(&plan, &pantry, &Catalog::sample());

        assert!(list.contains("tomato"));
        assert!(!list.contains("Tomato"));

        pantry.add("tomato").unwrap();
        let list = ShoppingList::generate(&plan, &pantry, &Catalog::sample());

        assert!(!list.contains("tomato"));
    }

    #[test]
    fn test_shared_ingredient_listed_once() {
        let plan = plan(&[
            (Day::Monday, MealType::Lunch, 2),
            (Day::Tuesday, MealType::Lunch, 5),
            (Day::Wednesday, MealType::Lunch, 2),
        ]);

        let list = ShoppingList::generate(&plan, &Pantry::starter(), &Catalog::sample());

        assert_eq!(list.names().filter(|n| *n == "lettuce").count(), 1);
        assert_eq!(
            list.names().collect::<Vec<_>>(),
            vec!["chicken breast", "lettuce", "tomato", "cucumber", "tuna", "mayonnaise"]
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let plan = plan(&[
            (Day::Friday, MealType::Dinner, 3),
            (Day::Saturday, MealType::Dinner, 6),
        ]);
        let pantry = Pantry::starter();
        let catalog = Catalog::sample();

        assert_eq!(
            ShoppingList::generate(&plan, &pantry, &catalog),
            ShoppingList::generate(&plan, &pantry, &catalog)
        );
    }

    #[test]
    fn test_toggle_item() {
        let plan = plan(&[(Day::Monday, MealType::Breakfast, 1)]);
        let mut list = ShoppingList::generate(&plan, &Pantry::starter(), &Catalog::sample());

        assert!(list.toggle("avocado").unwrap());
        assert!(list.iter().find(|i| i.name == "avocado").unwrap().checked);
        assert!(!list.toggle("avocado").unwrap());

        assert!(list.toggle("caviar").unwrap_err().is_not_found());
    }

    #[test]
    fn test_plain_vec_stock() {
        let plan = plan(&[(Day::Sunday, MealType::Breakfast, 4)]);
        let stock = vec!["honey".to_owned()];

        let list = ShoppingList::generate(&plan, &stock, &Catalog::sample());

        assert_eq!(
            list.names().collect::<Vec<_>>(),
            vec!["greek yogurt", "mixed berries"]
        );
    }
}
