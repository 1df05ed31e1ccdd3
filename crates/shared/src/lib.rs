mod command;
pub mod mealplan;
pub mod recipe;
pub mod shopping;

pub use command::*;
