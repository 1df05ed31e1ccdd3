use serde::Deserialize;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn parse(value: &str) -> crate::Result<Self> {
        Self::from_str(value.trim())
            .map_err(|_| crate::Error::InvalidSlot(format!("unknown day '{value}'")))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn parse(value: &str) -> crate::Result<Self> {
        Self::from_str(value.trim())
            .map_err(|_| crate::Error::InvalidSlot(format!("unknown meal type '{value}'")))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_parse_is_case_insensitive() {
        assert_eq!(Day::parse("Monday").unwrap(), Day::Monday);
        assert_eq!(Day::parse("sunday").unwrap(), Day::Sunday);
        assert_eq!(Day::parse(" FRIDAY ").unwrap(), Day::Friday);
    }

    #[test]
    fn test_out_of_range_slot_is_invalid_slot() {
        assert!(Day::parse("Funday").unwrap_err().is_invalid_slot());
        assert!(MealType::parse("brunch").unwrap_err().is_invalid_slot());
    }

    #[test]
    fn test_meal_type_display_is_lowercase() {
        assert_eq!(MealType::Breakfast.to_string(), "breakfast");
        assert_eq!(MealType::parse("Dinner").unwrap(), MealType::Dinner);
    }

    #[test]
    fn test_variants_are_ordered() {
        assert_eq!(Day::VARIANTS.len(), 7);
        assert_eq!(Day::VARIANTS[0], Day::Monday);
        assert_eq!(Day::Sunday.index(), 6);
        assert_eq!(
            MealType::VARIANTS,
            &[MealType::Breakfast, MealType::Lunch, MealType::Dinner]
        );
    }
}
