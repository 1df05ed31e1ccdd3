use plateplan_shared::shopping::Stock;

pub const STARTER_PANTRY: &[&str] = &[
    "bread",
    "eggs",
    "rice",
    "pasta",
    "olive oil",
    "salt",
    "pepper",
    "garlic",
];

/// Ingredients already owned, kept in insertion order.
///
/// Names are stored exactly as entered and compared case-sensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    /// Builds a pantry, dropping blanks and duplicates.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pantry = Self::default();
        for item in items {
            let _ = pantry.add(item);
        }

        pantry
    }

    pub fn starter() -> Self {
        Self::new(STARTER_PANTRY.iter().copied())
    }

    /// Returns `Ok(false)` when the item is already present.
    pub fn add(&mut self, item: impl Into<String>) -> plateplan_shared::Result<bool> {
        let item = item.into();
        if item.trim().is_empty() {
            plateplan_shared::invalid_input!("pantry item must not be blank");
        }

        if self.contains(&item) {
            return Ok(false);
        }

        self.items.push(item);

        Ok(true)
    }

    /// Returns `false` when nothing matched.
    pub fn remove(&mut self, item: &str) -> bool {
        let len = self.items.len();
        self.items.retain(|i| i != item);

        self.items.len() != len
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Stock for Pantry {
    fn has(&self, ingredient: &str) -> bool {
        self.contains(ingredient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_pantry() {
        let pantry = Pantry::starter();

        assert_eq!(pantry.len(), 8);
        assert!(pantry.contains("olive oil"));
    }

    #[test]
    fn test_add_appends_new_item() {
        let mut pantry = Pantry::starter();

        assert!(pantry.add("tomato").unwrap());
        assert_eq!(pantry.iter().last().unwrap(), "tomato");
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut pantry = Pantry::starter();

        assert!(!pantry.add("bread").unwrap());
        assert_eq!(pantry, Pantry::starter());
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut pantry = Pantry::starter();

        assert!(pantry.add("Bread").unwrap());
        assert!(pantry.contains("Bread"));
        assert!(pantry.contains("bread"));
        assert_eq!(pantry.len(), 9);
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut pantry = Pantry::starter();

        assert!(pantry.add("").unwrap_err().is_invalid_input());
        assert!(pantry.add("   ").unwrap_err().is_invalid_input());
        assert_eq!(pantry, Pantry::starter());
    }

    #[test]
    fn test_remove() {
        let mut pantry = Pantry::starter();

        assert!(pantry.remove("rice"));
        assert!(!pantry.contains("rice"));
        assert!(!pantry.remove("rice"));
        assert!(!pantry.remove("Salt"));
        assert_eq!(pantry.len(), 7);
    }

    #[test]
    fn test_new_drops_blanks_and_duplicates() {
        let pantry = Pantry::new(["salt", "", "salt", "sugar"]);

        assert_eq!(pantry.iter().collect::<Vec<_>>(), vec!["salt", "sugar"]);
    }
}
