use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use persona_kit::commands::{self, TodoCommand};
use persona_kit::config::Config;
use persona_kit::todo::LogReminders;
use persona_kit::{Catalog, JsonStore, QuizApp, TodoList, load_catalog_from_json, logging};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file to load the quizzes from instead of the bundled ones
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take a personality quiz (default)
    Quiz,
    /// Show completed quiz results
    History {
        #[arg(long)]
        clear: bool,
    },
    /// Manage the to-do list
    Todo {
        #[command(subcommand)]
        action: TodoCommand,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let data_dir = config.data_dir();
    logging::init(&data_dir, config.log_level())?;

    let store = JsonStore::new(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(Command::Quiz) {
        Command::Quiz => {
            let catalog_path = cli
                .catalog
                .or_else(|| config.catalog_path.as_ref().map(PathBuf::from));
            let catalog = match catalog_path {
                Some(path) => load_catalog_from_json(&path)?,
                None => Catalog::builtin()?,
            };
            info!(categories = catalog.len(), "starting quiz");
            QuizApp::new(catalog, Box::new(store), config.question_seconds)
                .run()
                .await?;
        }
        Command::History { clear } => {
            commands::run_history(&mut stdout, &store, clear)?;
        }
        Command::Todo { action } => {
            let now = Utc::now();
            let mut list = TodoList::open(store, LogReminders, now)?;
            commands::run_todo(&mut stdout, &mut list, action, now)?;
        }
    }
    Ok(())
}
