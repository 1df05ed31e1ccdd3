mod catalog;
mod favorite;
mod search;
mod suggestion;

pub use catalog::*;
pub use suggestion::*;
