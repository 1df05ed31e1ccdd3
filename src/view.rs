use askama::Template;
use plateplan_budget::Bar;
use plateplan_recipe::Recipe;
use plateplan_shared::mealplan::{Day, MealType};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::planner::PlannerState;

const GAUGE_WIDTH: usize = 20;

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum View {
    #[default]
    Planner,
    Shopping,
    Budget,
    Recipes,
}

impl View {
    pub fn parse(value: &str) -> plateplan_shared::Result<Self> {
        Self::from_str(value.trim())
            .map_err(|_| plateplan_shared::Error::InvalidInput(format!("unknown view '{value}'")))
    }
}

/// Presentation-only state. None of it feeds a derivation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub view: View,
    pub search: String,
    pub expanded: Option<Day>,
    pub picker: Option<(Day, MealType)>,
}

impl UiState {
    /// Expands `day`, or collapses it when it is already expanded.
    pub fn toggle_day(&mut self, day: Day) {
        self.expanded = if self.expanded == Some(day) {
            None
        } else {
            Some(day)
        };
    }
}

fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

fn blocks(percent: u8) -> String {
    let filled = usize::from(percent).min(100) * GAUGE_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(GAUGE_WIDTH - filled))
}

struct RecipeRow {
    id: String,
    name: String,
    meal_type: String,
    cost: String,
    heart: &'static str,
}

impl From<&Recipe> for RecipeRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name.to_owned(),
            meal_type: recipe.meal_type.to_string(),
            cost: money(recipe.cost),
            heart: if recipe.favorite { "♥" } else { " " },
        }
    }
}

struct SlotRow {
    meal_type: String,
    label: String,
}

struct DayRow {
    name: String,
    marker: &'static str,
    expanded: bool,
    planned: usize,
    slots: Vec<SlotRow>,
}

#[derive(Template)]
#[template(path = "planner.txt")]
pub struct PlannerTemplate {
    searching: bool,
    query: String,
    results: Vec<RecipeRow>,
    days: Vec<DayRow>,
    has_picker: bool,
    picker_title: String,
    picker: Vec<RecipeRow>,
}

impl PlannerTemplate {
    pub fn new(state: &PlannerState, ui: &UiState) -> Self {
        let days = Day::VARIANTS
            .iter()
            .map(|&day| {
                let slots = MealType::VARIANTS
                    .iter()
                    .map(|&meal_type| SlotRow {
                        meal_type: meal_type.to_string(),
                        label: match state.planned_recipe(day, meal_type) {
                            Some(recipe) => format!("{} ({})", recipe.name, money(recipe.cost)),
                            None => format!("-- add {meal_type} --"),
                        },
                    })
                    .collect();
                let expanded = ui.expanded == Some(day);

                DayRow {
                    name: day.to_string(),
                    marker: if expanded { "v" } else { ">" },
                    expanded,
                    planned: state.plan().day(day).filter(|s| s.recipe_id.is_some()).count(),
                    slots,
                }
            })
            .collect();

        let (has_picker, picker_title, picker) = match ui.picker {
            Some((day, meal_type)) => (
                true,
                format!("{day} {meal_type}"),
                state
                    .catalog()
                    .by_meal_type(meal_type)
                    .map(RecipeRow::from)
                    .collect(),
            ),
            None => (false, String::new(), Vec::new()),
        };

        let query = ui.search.trim().to_owned();

        Self {
            searching: !query.is_empty(),
            results: state
                .catalog()
                .search(&query)
                .into_iter()
                .map(RecipeRow::from)
                .collect(),
            query,
            days,
            has_picker,
            picker_title,
            picker,
        }
    }
}

struct ShoppingRow {
    name: String,
    checked: bool,
}

#[derive(Template)]
#[template(path = "shopping.txt")]
pub struct ShoppingTemplate {
    items: Vec<ShoppingRow>,
    pantry: String,
}

impl ShoppingTemplate {
    pub fn new(state: &PlannerState) -> Self {
        Self {
            items: state
                .shopping_list()
                .iter()
                .map(|i| ShoppingRow {
                    name: i.name.to_owned(),
                    checked: i.checked,
                })
                .collect(),
            pantry: state
                .pantry()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

struct BarRow {
    week: u32,
    graph: String,
    amount: String,
}

impl From<Bar> for BarRow {
    fn from(bar: Bar) -> Self {
        Self {
            week: bar.week,
            graph: blocks(bar.height_percent),
            amount: money(bar.amount),
        }
    }
}

#[derive(Template)]
#[template(path = "budget.txt")]
pub struct BudgetTemplate {
    budget: String,
    expenses: String,
    remaining: String,
    over_budget: bool,
    percent_used: u8,
    gauge: String,
    axis: String,
    bars: Vec<BarRow>,
}

impl BudgetTemplate {
    pub fn new(state: &PlannerState) -> Self {
        let summary = state.budget_summary();

        Self {
            budget: money(summary.budget),
            expenses: money(summary.expenses),
            remaining: money(summary.remaining),
            over_budget: summary.over_budget,
            percent_used: summary.percent_used,
            gauge: blocks(summary.percent_used),
            axis: state
                .history()
                .axis_labels()
                .iter()
                .map(|&label| money(label))
                .collect::<Vec<_>>()
                .join(" | "),
            bars: state.history().bars().into_iter().map(BarRow::from).collect(),
        }
    }
}

struct SuggestionRow {
    recipe: RecipeRow,
    owned: usize,
    total: usize,
}

#[derive(Template)]
#[template(path = "recipes.txt")]
pub struct RecipesTemplate {
    searching: bool,
    query: String,
    results: Vec<RecipeRow>,
    favorites: Vec<RecipeRow>,
    suggestions: Vec<SuggestionRow>,
}

impl RecipesTemplate {
    pub fn new(state: &PlannerState, ui: &UiState) -> Self {
        let query = ui.search.trim().to_owned();

        Self {
            searching: !query.is_empty(),
            results: state
                .catalog()
                .search(&query)
                .into_iter()
                .map(RecipeRow::from)
                .collect(),
            query,
            favorites: state.catalog().favorites().map(RecipeRow::from).collect(),
            suggestions: state
                .suggestions()
                .into_iter()
                .map(|s| SuggestionRow {
                    recipe: s.recipe.into(),
                    owned: s.owned,
                    total: s.total,
                })
                .collect(),
        }
    }
}

pub fn render(state: &PlannerState, ui: &UiState) -> Result<String, askama::Error> {
    match ui.view {
        View::Planner => PlannerTemplate::new(state, ui).render(),
        View::Shopping => ShoppingTemplate::new(state).render(),
        View::Budget => BudgetTemplate::new(state).render(),
        View::Recipes => RecipesTemplate::new(state, ui).render(),
    }
}
