use super::App;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the configuration and the resolved database path
    Show,
    /// Use another Bible database file
    SetDb { path: PathBuf },
    /// Change search and history settings
    Set {
        /// Minimum characters before a search runs
        #[arg(long)]
        min_chars: Option<usize>,
        /// Maximum number of search results
        #[arg(long)]
        search_limit: Option<usize>,
        /// Entries shown by `history list`
        #[arg(long)]
        recent_history: Option<usize>,
    },
}

pub fn cmd(app: &App, args: ConfigArgs) -> Result<()> {
    match args.command.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(&app.config)?);
            println!("database: {}", app.config.database_path(&app.storage)?.display());
            println!("data directory: {}", app.storage.base_path().display());
        }
        ConfigCommand::SetDb { path } => {
            let mut config = app.config.clone();
            config.database = Some(path.clone());
            config.save_to(&app.storage)?;
            msg_success!(Message::ConfigDatabaseSet(path.display().to_string()));
        }
        ConfigCommand::Set {
            min_chars,
            search_limit,
            recent_history,
        } => {
            let mut config = app.config.clone();
            if let Some(min_chars) = min_chars {
                config.search.min_chars = min_chars;
            }
            if let Some(limit) = search_limit {
                config.search.limit = limit;
            }
            if let Some(recent) = recent_history {
                config.recent_history = recent;
            }
            config.save_to(&app.storage)?;
            msg_success!(Message::ConfigSaved);
        }
    }
    Ok(())
}
