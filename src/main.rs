use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plateplan::{Mode, Planner, Session};
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

/// plateplan - Weekly Meal Planning
#[derive(Parser)]
#[command(name = "plateplan")]
#[command(about = "Weekly meal plan, shopping list and grocery budget", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Run the commands of a script file, one per line
    Run {
        /// Script to execute
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = plateplan::Config::load(cli.config.clone())?;
    config.validate()?;

    plateplan::observability::init_observability(
        "plateplan",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    let planner = Planner::from_config(&config.planner)?;
    let mut session = Session::new(planner);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell_command(&mut session),
        Commands::Run { script } => run_command(&mut session, &script),
    }
}

#[tracing::instrument(skip(session))]
fn shell_command(session: &mut Session) -> Result<()> {
    tracing::info!("Starting plateplan shell...");

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock(), Mode::Interactive)
}

#[tracing::instrument(skip(session))]
fn run_command(session: &mut Session, script: &Path) -> Result<()> {
    tracing::info!("Running script");

    let file = File::open(script)
        .with_context(|| format!("failed to open script {}", script.display()))?;

    session.run(BufReader::new(file), io::stdout().lock(), Mode::Script)
}
