use plateplan_budget::{Budget, BudgetSummary, ExpenseHistory};
use plateplan_mealplan::{WeeklyPlan, expense_total};
use plateplan_recipe::{Catalog, Recipe, Suggestion};
use plateplan_shared::{
    mealplan::{Day, MealType},
    recipe::RecipeId,
};
use plateplan_shopping::{Pantry, ShoppingList};
use std::ops::Deref;

use crate::config::PlannerConfig;

/// Every change the planner accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Assign {
        day: Day,
        meal_type: MealType,
        recipe_id: RecipeId,
    },
    Clear {
        day: Day,
        meal_type: MealType,
    },
    AddPantryItem(String),
    RemovePantryItem(String),
    ToggleFavorite(RecipeId),
    ToggleShoppingItem(String),
    SetBudget(f64),
}

/// An immutable snapshot of the authoritative stores together with the
/// state derived from them.
///
/// The shopping list and expense total are always consistent with the plan
/// and pantry of the same snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerState {
    catalog: Catalog,
    plan: WeeklyPlan,
    pantry: Pantry,
    budget: Budget,
    history: ExpenseHistory,
    shopping_list: ShoppingList,
    expenses: f64,
}

impl PlannerState {
    pub fn new(catalog: Catalog, pantry: Pantry, budget: Budget, history: ExpenseHistory) -> Self {
        let mut state = Self {
            catalog,
            plan: WeeklyPlan::new(),
            pantry,
            budget,
            history,
            shopping_list: ShoppingList::default(),
            expenses: 0.0,
        };
        state.derive();

        state
    }

    pub fn from_config(config: &PlannerConfig) -> plateplan_shared::Result<Self> {
        Ok(Self::new(
            Catalog::new(config.recipes.clone())?,
            Pantry::new(config.pantry.iter().cloned()),
            Budget::new(config.budget)?,
            ExpenseHistory::new(config.expense_history.clone()),
        ))
    }

    /// Returns the snapshot that results from `action`, leaving `self`
    /// untouched. Rejected actions produce an error and no snapshot.
    pub fn apply(&self, action: Action) -> plateplan_shared::Result<Self> {
        let mut next = self.clone();

        match action {
            Action::Assign {
                day,
                meal_type,
                recipe_id,
            } => {
                let recipe = next.catalog.find(recipe_id)?;
                tracing::info!(%day, %meal_type, recipe = %recipe.name, "meal assigned");

                next.plan.assign(day, meal_type, recipe_id);
                next.derive();
            }
            Action::Clear { day, meal_type } => {
                if let Some(recipe_id) = next.plan.clear(day, meal_type) {
                    tracing::info!(%day, %meal_type, %recipe_id, "meal removed");
                }

                next.derive();
            }
            Action::AddPantryItem(item) => {
                if next.pantry.add(item.as_str())? {
                    tracing::info!(%item, "pantry item added");
                    next.derive();
                }
            }
            Action::RemovePantryItem(item) => {
                if next.pantry.remove(&item) {
                    tracing::info!(%item, "pantry item removed");
                }

                next.derive();
            }
            Action::ToggleFavorite(recipe_id) => {
                next.catalog.toggle_favorite(recipe_id)?;
            }
            Action::ToggleShoppingItem(name) => {
                let checked = next.shopping_list.toggle(&name)?;
                tracing::debug!(%name, checked, "shopping item toggled");
            }
            Action::SetBudget(amount) => {
                next.budget = Budget::new(amount)?;
                tracing::info!(budget = amount, "budget changed");
            }
        }

        Ok(next)
    }

    fn derive(&mut self) {
        self.shopping_list = ShoppingList::generate(&self.plan, &self.pantry, &self.catalog);
        self.expenses = expense_total(&self.plan, &self.catalog);

        tracing::debug!(
            shopping_items = self.shopping_list.len(),
            expenses = self.expenses,
            "derived state recomputed"
        );
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn history(&self) -> &ExpenseHistory {
        &self.history
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    pub fn expenses(&self) -> f64 {
        self.expenses
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        self.budget.summary(self.expenses)
    }

    pub fn planned_recipe(&self, day: Day, meal_type: MealType) -> Option<&Recipe> {
        self.plan
            .get(day, meal_type)
            .and_then(|id| self.catalog.get(id))
    }

    pub fn suggestions(&self) -> Vec<Suggestion<'_>> {
        self.catalog.suggestions(&self.pantry)
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new(
            Catalog::sample(),
            Pantry::starter(),
            Budget::default(),
            ExpenseHistory::default(),
        )
    }
}

/// Owner of the current [`PlannerState`].
///
/// Each mutator swaps in a fully derived snapshot or, on error, keeps the
/// previous one, so readers never see a half-applied change.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    state: PlannerState,
}

impl Deref for Planner {
    type Target = PlannerState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Planner {
    pub fn new(state: PlannerState) -> Self {
        Self { state }
    }

    pub fn from_config(config: &PlannerConfig) -> plateplan_shared::Result<Self> {
        PlannerState::from_config(config).map(Self::new)
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> plateplan_shared::Result<&PlannerState> {
        match self.state.apply(action) {
            Ok(next) => {
                self.state = next;
                Ok(&self.state)
            }
            Err(err) => {
                tracing::warn!(error = %err, "action rejected");
                Err(err)
            }
        }
    }

    pub fn assign(
        &mut self,
        day: Day,
        meal_type: MealType,
        recipe_id: RecipeId,
    ) -> plateplan_shared::Result<()> {
        self.dispatch(Action::Assign {
            day,
            meal_type,
            recipe_id,
        })
        .map(|_| ())
    }

    pub fn clear(&mut self, day: Day, meal_type: MealType) -> plateplan_shared::Result<()> {
        self.dispatch(Action::Clear { day, meal_type }).map(|_| ())
    }

    pub fn add_pantry_item(&mut self, item: impl Into<String>) -> plateplan_shared::Result<()> {
        self.dispatch(Action::AddPantryItem(item.into())).map(|_| ())
    }

    pub fn remove_pantry_item(&mut self, item: impl Into<String>) -> plateplan_shared::Result<()> {
        self.dispatch(Action::RemovePantryItem(item.into())).map(|_| ())
    }

    pub fn toggle_favorite(&mut self, recipe_id: RecipeId) -> plateplan_shared::Result<()> {
        self.dispatch(Action::ToggleFavorite(recipe_id)).map(|_| ())
    }

    pub fn toggle_shopping_item(
        &mut self,
        name: impl Into<String>,
    ) -> plateplan_shared::Result<()> {
        self.dispatch(Action::ToggleShoppingItem(name.into())).map(|_| ())
    }

    pub fn set_budget(&mut self, amount: f64) -> plateplan_shared::Result<()> {
        self.dispatch(Action::SetBudget(amount)).map(|_| ())
    }
}
