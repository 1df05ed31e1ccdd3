use plateplan_shared::{
    mealplan::{Day, MealType},
    recipe::RecipeId,
};
use strum::VariantArray;

const DAYS: usize = 7;
const MEALS: usize = 3;

/// One cell of the weekly calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub day: Day,
    pub meal_type: MealType,
    pub recipe_id: Option<RecipeId>,
}

/// Seven days of three meal slots each, holding recipe references by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyPlan {
    slots: [[Option<RecipeId>; MEALS]; DAYS],
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Day, meal_type: MealType) -> Option<RecipeId> {
        self.slots[day.index()][meal_type.index()]
    }

    /// Puts a recipe in a slot and returns whatever was there before.
    pub fn assign(
        &mut self,
        day: Day,
        meal_type: MealType,
        recipe_id: RecipeId,
    ) -> Option<RecipeId> {
        self.slots[day.index()][meal_type.index()].replace(recipe_id)
    }

    /// Empties a slot and returns the recipe it held, if any.
    pub fn clear(&mut self, day: Day, meal_type: MealType) -> Option<RecipeId> {
        self.slots[day.index()][meal_type.index()].take()
    }

    /// Every slot, Monday breakfast first and Sunday dinner last.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Day::VARIANTS.iter().flat_map(move |&day| {
            MealType::VARIANTS.iter().map(move |&meal_type| Slot {
                day,
                meal_type,
                recipe_id: self.get(day, meal_type),
            })
        })
    }

    pub fn day(&self, day: Day) -> impl Iterator<Item = Slot> + '_ {
        self.slots().filter(move |s| s.day == day)
    }

    /// Recipe ids of the non-empty slots, in calendar order.
    pub fn assigned(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.slots().filter_map(|s| s.recipe_id)
    }

    pub fn is_empty(&self) -> bool {
        self.assigned().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plan_is_empty() {
        let plan = WeeklyPlan::new();

        assert!(plan.is_empty());
        assert_eq!(plan.slots().count(), 21);
        assert!(plan.slots().all(|s| s.recipe_id.is_none()));
    }

    #[test]
    fn test_assign_overwrites() {
        let mut plan = WeeklyPlan::new();

        assert_eq!(plan.assign(Day::Monday, MealType::Lunch, RecipeId(2)), None);
        assert_eq!(
            plan.assign(Day::Monday, MealType::Lunch, RecipeId(5)),
            Some(RecipeId(2))
        );
        assert_eq!(plan.get(Day::Monday, MealType::Lunch), Some(RecipeId(5)));
        assert_eq!(plan.assigned().count(), 1);
    }

    #[test]
    fn test_clear_empty_slot_is_noop() {
        let mut plan = WeeklyPlan::new();

        assert_eq!(plan.clear(Day::Friday, MealType::Dinner), None);
        assert_eq!(plan, WeeklyPlan::new());
    }

    #[test]
    fn test_slots_are_in_calendar_order() {
        let mut plan = WeeklyPlan::new();
        plan.assign(Day::Sunday, MealType::Dinner, RecipeId(3));
        plan.assign(Day::Monday, MealType::Dinner, RecipeId(6));
        plan.assign(Day::Monday, MealType::Breakfast, RecipeId(1));

        let ids = plan.assigned().map(|id| id.0).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 6, 3]);

        let monday = plan.day(Day::Monday).collect::<Vec<_>>();
        assert_eq!(monday.len(), 3);
        assert_eq!(monday[1].meal_type, MealType::Lunch);
        assert_eq!(monday[1].recipe_id, None);
    }
}
