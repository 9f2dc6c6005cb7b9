pub mod books;
pub mod config;
pub mod favorite;
pub mod history;
pub mod navigate;
pub mod note;
pub mod plan;
pub mod read;
pub mod search;
pub mod stats;

use crate::db::db::VerseStore;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::kv::{FileStore, SharedStore};
use crate::libs::messages::Message;
use crate::libs::navigation::Direction;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "List the books of the Bible")]
    Books(books::BooksArgs),
    #[command(about = "Read a chapter, paging with next/previous")]
    Read(read::ReadArgs),
    #[command(about = "Read the chapter after the last one read")]
    Next,
    #[command(about = "Read the chapter before the last one read")]
    Prev,
    #[command(about = "Search verse text", arg_required_else_help = true)]
    Search(search::SearchArgs),
    #[command(about = "Manage favorite verses")]
    Favorite(favorite::FavoriteArgs),
    #[command(about = "Manage notes")]
    Note(note::NoteArgs),
    #[command(about = "Manage reading plans")]
    Plan(plan::PlanArgs),
    #[command(about = "Show or edit the reading history")]
    History(history::HistoryArgs),
    #[command(about = "Show reading statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Show or change the configuration")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let app = App::load()?;

        match cli.command {
            Commands::Books(args) => books::cmd(&app, args),
            Commands::Read(args) => read::cmd(&app, args).await,
            Commands::Next => navigate::cmd(&app, Direction::Next).await,
            Commands::Prev => navigate::cmd(&app, Direction::Previous).await,
            Commands::Search(args) => search::cmd(&app, args),
            Commands::Favorite(args) => favorite::cmd(&app, args),
            Commands::Note(args) => note::cmd(&app, args),
            Commands::Plan(args) => plan::cmd(&app, args),
            Commands::History(args) => history::cmd(&app, args),
            Commands::Stats(args) => stats::cmd(&app, args),
            Commands::Config(args) => config::cmd(&app, args),
        }
    }
}

/// Everything a command needs: where data lives, the configuration and
/// the user-data store.
pub struct App {
    pub storage: DataStorage,
    pub config: Config,
    pub kv: SharedStore,
}

impl App {
    pub fn load() -> Result<Self> {
        Self::with_storage(DataStorage::new())
    }

    pub fn with_storage(storage: DataStorage) -> Result<Self> {
        let config = Config::read_from(&storage).map_err(|e| {
            msg_debug!(format!("config error: {}", e));
            msg_error_anyhow!(Message::ConfigParseError)
        })?;
        let kv = FileStore::shared(storage.base_path());

        Ok(App { storage, config, kv })
    }

    /// Opens the Bible database. Failure is fatal for the command.
    pub fn open_store(&self) -> Result<VerseStore> {
        let path = self.config.database_path(&self.storage)?;
        let store = VerseStore::open(&path).map_err(|e| msg_error_anyhow!(Message::DatabaseUnavailable(e.to_string())))?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));
        Ok(store)
    }
}

/// Asks before a destructive action unless `yes` was passed.
pub(crate) fn confirm(message: Message, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}
