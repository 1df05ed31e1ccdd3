use clap::{Parser, Subcommand};
use plateplan_shared::{
    mealplan::{Day, MealType},
    recipe::RecipeId,
};
use std::io::{BufRead, Write};

use crate::{
    planner::Planner,
    view::{self, UiState, View},
};

pub const HELP: &str = "\
Commands:
  view <planner|shopping|budget|recipes>   switch view
  expand <day>                             expand or collapse a day
  pick <day> <meal>                        list recipes for a slot
  assign <day> <meal> <recipe-id>          plan a recipe
  clear <day> <meal>                       empty a slot
  pantry add <item>                        add a pantry item
  pantry remove <item>                     remove a pantry item
  check <item>                             check or uncheck a shopping item
  favorite <recipe-id>                     toggle a favorite
  search [text]                            filter recipes, blank clears
  budget <amount>                          set the monthly budget
  help                                     show this help
  quit                                     leave the shell
";

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Planner(#[from] plateplan_shared::Error),

    #[error("failed to render view: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompt before each line.
    Interactive,
    /// Echo each line before its output.
    Script,
}

#[derive(Parser, Debug)]
#[command(
    name = "plateplan",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    View {
        view: String,
    },
    Expand {
        day: String,
    },
    Pick {
        day: String,
        meal_type: String,
    },
    Assign {
        day: String,
        meal_type: String,
        recipe_id: String,
    },
    Clear {
        day: String,
        meal_type: String,
    },
    Pantry {
        #[command(subcommand)]
        command: PantryCommand,
    },
    Check {
        #[arg(required = true)]
        item: Vec<String>,
    },
    Favorite {
        recipe_id: String,
    },
    Search {
        query: Vec<String>,
    },
    Budget {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    Help,
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq)]
enum PantryCommand {
    Add {
        #[arg(required = true)]
        item: Vec<String>,
    },
    Remove {
        #[arg(required = true)]
        item: Vec<String>,
    },
}

/// Splits a command line on whitespace. Double quotes group words.
fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if quoted {
        return Err(ShellError::Parse("unterminated quote".to_owned()));
    }

    if pending {
        tokens.push(current);
    }

    Ok(tokens)
}

fn parse_slot(day: &str, meal_type: &str) -> plateplan_shared::Result<(Day, MealType)> {
    Ok((Day::parse(day)?, MealType::parse(meal_type)?))
}

fn parse_amount(amount: &str) -> plateplan_shared::Result<f64> {
    match amount.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => plateplan_shared::invalid_input!("'{}' is not an amount", amount),
    }
}

/// A planner plus the presentation state of one shell.
#[derive(Debug, Default)]
pub struct Session {
    planner: Planner,
    ui: UiState,
}

impl Session {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            ui: UiState::default(),
        }
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn render(&self) -> Result<String, ShellError> {
        Ok(view::render(self.planner.state(), &self.ui)?)
    }

    /// Runs one command line and returns the text to show.
    ///
    /// A rejected command leaves both the planner and the view untouched.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let tokens = tokenize(line)?;
        if tokens.is_empty() {
            return Ok(Outcome::Continue(String::new()));
        }

        let line = Line::try_parse_from(tokens).map_err(|e| ShellError::Parse(e.to_string()))?;

        match line.command {
            ShellCommand::View { view } => {
                self.ui.view = View::parse(&view)?;
            }
            ShellCommand::Expand { day } => {
                self.ui.toggle_day(Day::parse(&day)?);
                self.ui.view = View::Planner;
            }
            ShellCommand::Pick { day, meal_type } => {
                let (day, meal_type) = parse_slot(&day, &meal_type)?;
                self.ui.picker = Some((day, meal_type));
                self.ui.expanded = Some(day);
                self.ui.view = View::Planner;
            }
            ShellCommand::Assign {
                day,
                meal_type,
                recipe_id,
            } => {
                let (day, meal_type) = parse_slot(&day, &meal_type)?;
                let recipe_id = recipe_id.parse::<RecipeId>()?;
                self.planner.assign(day, meal_type, recipe_id)?;
                self.ui.picker = None;
                self.ui.expanded = Some(day);
                self.ui.view = View::Planner;
            }
            ShellCommand::Clear { day, meal_type } => {
                let (day, meal_type) = parse_slot(&day, &meal_type)?;
                self.planner.clear(day, meal_type)?;
                self.ui.view = View::Planner;
            }
            ShellCommand::Pantry { command } => {
                match command {
                    PantryCommand::Add { item } => self.planner.add_pantry_item(item.join(" "))?,
                    PantryCommand::Remove { item } => {
                        self.planner.remove_pantry_item(item.join(" "))?
                    }
                }
                self.ui.view = View::Shopping;
            }
            ShellCommand::Check { item } => {
                self.planner.toggle_shopping_item(item.join(" "))?;
                self.ui.view = View::Shopping;
            }
            ShellCommand::Favorite { recipe_id } => {
                self.planner.toggle_favorite(recipe_id.parse::<RecipeId>()?)?;
            }
            ShellCommand::Search { query } => {
                self.ui.search = query.join(" ");
                if !matches!(self.ui.view, View::Planner | View::Recipes) {
                    self.ui.view = View::Recipes;
                }
            }
            ShellCommand::Budget { amount } => {
                self.planner.set_budget(parse_amount(&amount)?)?;
                self.ui.view = View::Budget;
            }
            ShellCommand::Help => return Ok(Outcome::Continue(HELP.to_owned())),
            ShellCommand::Quit => return Ok(Outcome::Quit),
        }

        self.render().map(Outcome::Continue)
    }

    /// Feeds every line of `input` through [`Session::execute`].
    ///
    /// Errors are reported to `output` and do not stop the loop. Blank lines
    /// and lines starting with `#` are skipped.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        mode: Mode,
    ) -> anyhow::Result<()> {
        write!(output, "{}", self.render()?)?;

        let mut lines = input.lines();
        loop {
            if mode == Mode::Interactive {
                write!(output, "plateplan> ")?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if mode == Mode::Script {
                writeln!(output, "> {trimmed}")?;
            }

            match self.execute(trimmed) {
                Ok(Outcome::Continue(text)) => write!(output, "{text}")?,
                Ok(Outcome::Quit) => break,
                Err(ShellError::Parse(message)) => {
                    tracing::debug!(line = trimmed, "unparsable command");
                    writeln!(output, "{}", message.trim_end())?;
                }
                Err(err) => writeln!(output, "error: {err}")?,
            }
        }

        output.flush()?;

        Ok(())
    }
}
