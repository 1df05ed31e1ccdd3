use plateplan_shared::recipe::RecipeId;

use crate::{Catalog, Recipe};

impl Catalog {
    /// Flips the favorite flag of a recipe and returns the new value.
    ///
    /// An unknown id leaves the catalog untouched.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> plateplan_shared::Result<bool> {
        let Some(recipe) = self.get_mut(id) else {
            plateplan_shared::not_found!("recipe {}", id);
        };

        recipe.favorite = !recipe.favorite;
        tracing::info!(recipe_id = %id, favorite = recipe.favorite, "favorite toggled");

        Ok(recipe.favorite)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &Recipe> {
        self.iter().filter(|r| r.favorite)
    }
}
