use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glossa_types::AppEvent;

#[derive(Parser, Debug)]
#[command(
    name = "glossa",
    version,
    about = "Find the words in a book that are hard for your reading level."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a book and make it the active book
    Process {
        /// Plain text file, pages separated by form feeds
        path: PathBuf,

        /// Proficiency level: Low, Medium or High
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Look up a word among the active book's difficult words
    Search { query: String },

    /// Complete a partial word from the active book's difficult words
    Suggest { partial: String },

    /// Restore the common words to the shipped baseline and clear the active book
    Reset,

    /// Show the active book
    Status,
}

impl Command {
    /// The event this command asks the event loop to handle
    pub fn into_event(self, default_level: &str) -> AppEvent {
        match self {
            Command::Process { path, level } => AppEvent::ProcessBook {
                path: path.display().to_string(),
                level: level.unwrap_or_else(|| default_level.to_string()),
            },
            Command::Search { query } => AppEvent::Search(query),
            Command::Suggest { partial } => AppEvent::Suggest(partial),
            Command::Reset => AppEvent::ResetStore,
            Command::Status => AppEvent::ShowStatus,
        }
    }
}
