use plateplan_shared::{mealplan::MealType, recipe::RecipeId};
use serde::Deserialize;
use std::collections::HashSet;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
pub struct Recipe {
    pub id: RecipeId,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[validate(custom(function = "plateplan_shared::validate_amount"))]
    pub cost: f64,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    pub fn new(
        id: impl Into<RecipeId>,
        name: impl Into<String>,
        meal_type: MealType,
        ingredients: &[&str],
        cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            meal_type,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            cost,
            favorite: false,
            image: String::new(),
        }
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// The fixed set of recipes known to the planner.
///
/// Recipes are never added or removed after construction; only their
/// favorite flag changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> plateplan_shared::Result<Self> {
        let mut ids = HashSet::new();
        for recipe in &recipes {
            if !ids.insert(recipe.id) {
                plateplan_shared::invalid_input!("duplicate recipe id {}", recipe.id);
            }
        }

        Ok(Self { recipes })
    }

    pub fn sample() -> Self {
        Self {
            recipes: sample_recipes(),
        }
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn find(&self, id: RecipeId) -> plateplan_shared::Result<&Recipe> {
        match self.get(id) {
            Some(recipe) => Ok(recipe),
            None => plateplan_shared::not_found!("recipe {}", id),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes offered when filling a slot of the given meal type.
    pub fn by_meal_type(&self, meal_type: MealType) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(move |r| r.meal_type == meal_type)
    }

    pub(crate) fn get_mut(&mut self, id: RecipeId) -> Option<&mut Recipe> {
        self.recipes.iter_mut().find(|r| r.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            1,
            "Avocado Toast",
            MealType::Breakfast,
            &["bread", "avocado", "salt", "pepper", "eggs"],
            5.50,
        )
        .favorite(true)
        .image("images/Avocado-Toast.jpg"),
        Recipe::new(
            2,
            "Chicken Salad",
            MealType::Lunch,
            &["chicken breast", "lettuce", "tomato", "cucumber", "olive oil"],
            8.75,
        )
        .image("images/Chicken-Salad.jpg"),
        Recipe::new(
            3,
            "Spaghetti Bolognese",
            MealType::Dinner,
            &["spaghetti", "ground beef", "tomato sauce", "onion", "garlic"],
            12.30,
        )
        .favorite(true)
        .image("images/spaghetti-bolognese.jpeg"),
        Recipe::new(
            4,
            "Greek Yogurt with Berries",
            MealType::Breakfast,
            &["greek yogurt", "mixed berries", "honey"],
            4.20,
        )
        .image("images/yogurt-berries.jpg"),
        Recipe::new(
            5,
            "Tuna Sandwich",
            MealType::Lunch,
            &["bread", "tuna", "mayonnaise", "lettuce"],
            6.80,
        )
        .image("images/tuna-sandwich.jpg"),
        Recipe::new(
            6,
            "Vegetable Stir Fry",
            MealType::Dinner,
            &["rice", "broccoli", "carrot", "bell pepper", "soy sauce"],
            9.50,
        )
        .favorite(true)
        .image("images/Vegetable-Stir-Fry.jpg"),
    ]
}
