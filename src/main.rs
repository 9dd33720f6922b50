mod app;
mod cli;

use app::MistakesApp;
use clap::{Parser, Subcommand};
use mistake_practice::config::Config;
use mistake_practice::storage::{MistakeStore, load_question_bank_or_empty};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mistakes", about = "Review and practice quiz mistakes", version)]
struct Cli {
    /// Config file (default: mistakes.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Question bank JSON file
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    /// Mistake store JSON file
    #[arg(long, global = true)]
    mistakes: Option<PathBuf>,

    /// Questions per day in the bank
    #[arg(long, global = true)]
    per_day: Option<usize>,

    /// Rows in the top mistaken questions table
    #[arg(long, global = true)]
    top: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop app (default)
    Gui,
    /// List every recorded mistake with its correct answers
    Review,
    /// Show mistake statistics
    Stats,
    /// Practice recorded mistakes in the terminal
    Practice,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config, Box<dyn Error>> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(path) = &self.questions {
            config.questions_path = path.clone();
        }
        if let Some(path) = &self.mistakes {
            config.mistakes_path = path.clone();
        }
        if let Some(per_day) = self.per_day {
            config.questions_per_day = per_day;
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let bank = load_question_bank_or_empty(&config.questions_path, config.questions_per_day);
    let store = MistakeStore::new(config.mistakes_path.clone());

    match cli.command.unwrap_or(Command::Gui) {
        Command::Review => cli::print_review(&store, &bank),
        Command::Stats => cli::print_stats(&store, &bank, config.top_n),
        Command::Practice => cli::run_practice(&store, &bank)?,
        Command::Gui => {
            log::info!(
                "Starting with {} questions, mistakes in {:?}",
                bank.len(),
                store.path()
            );
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 760.0]),
                ..Default::default()
            };
            eframe::run_native(
                "Mistake Practice",
                options,
                Box::new(|_cc| Ok(Box::new(MistakesApp::new(config, bank)))),
            )?;
        }
    }

    Ok(())
}
