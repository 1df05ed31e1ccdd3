mod expense;
mod week;

pub use expense::*;
pub use week::*;
