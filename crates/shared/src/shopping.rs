/// Anything that can answer "is this ingredient already owned".
///
/// Matching is exact and case-sensitive.
pub trait Stock {
    fn has(&self, ingredient: &str) -> bool;
}

impl Stock for [String] {
    fn has(&self, ingredient: &str) -> bool {
        self.iter().any(|i| i == ingredient)
    }
}

impl Stock for Vec<String> {
    fn has(&self, ingredient: &str) -> bool {
        self.as_slice().has(ingredient)
    }
}
