use crate::{Catalog, Recipe};

impl Recipe {
    /// `query` must already be lower-cased.
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(query))
    }
}

impl Catalog {
    /// Case-insensitive substring search over recipe names and ingredients.
    /// A blank query returns the whole catalog.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.iter().collect();
        }

        self.iter().filter(|r| r.matches(&query)).collect()
    }
}
