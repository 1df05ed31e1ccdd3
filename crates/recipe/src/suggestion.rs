use plateplan_shared::shopping::Stock;

use crate::{Catalog, Recipe};

/// A recipe partially covered by the pantry.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion<'a> {
    pub recipe: &'a Recipe,
    pub owned: usize,
    pub total: usize,
}

impl Recipe {
    /// Number of ingredient entries already in stock.
    pub fn coverage<S: Stock + ?Sized>(&self, stock: &S) -> usize {
        self.ingredients.iter().filter(|i| stock.has(i)).count()
    }
}

impl Catalog {
    /// Recipes sharing at least one ingredient with the stock that still need
    /// shopping. Fully stocked recipes and recipes with no overlap are left out.
    pub fn suggestions<S: Stock + ?Sized>(&self, stock: &S) -> Vec<Suggestion<'_>> {
        self.iter()
            .filter_map(|recipe| {
                let owned = recipe.coverage(stock);
                let total = recipe.ingredients.len();

                (owned > 0 && owned < total).then_some(Suggestion {
                    recipe,
                    owned,
                    total,
                })
            })
            .collect()
    }
}
