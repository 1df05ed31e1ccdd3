pub mod config;
pub mod observability;
pub mod planner;
pub mod shell;
pub mod view;

pub use config::Config;
pub use planner::{Action, Planner, PlannerState};
pub use shell::{Mode, Outcome, Session, ShellError};
pub use view::{UiState, View};
