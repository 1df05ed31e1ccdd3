mod history;
mod summary;

pub use history::*;
pub use summary::*;
