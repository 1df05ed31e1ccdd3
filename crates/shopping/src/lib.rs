mod list;
mod pantry;

pub use list::*;
pub use pantry::*;
