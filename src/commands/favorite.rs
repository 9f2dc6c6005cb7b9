use super::{confirm, App};
use crate::db::books::Books;
use crate::db::verses::Verses;
use crate::libs::favorites::{FavoriteVerse, Favorites};
use crate::libs::formatter::verse_reference;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct FavoriteArgs {
    #[command(subcommand)]
    command: Option<FavoriteCommand>,
}

#[derive(Debug, Subcommand)]
enum FavoriteCommand {
    /// Save a verse
    Add {
        /// Book id, name or abbreviation
        book: String,
        chapter: u32,
        verse: u32,
        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// List saved verses
    List {
        /// Only verses carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Remove a saved verse by id
    Remove { id: String },
    /// Replace the tags of a saved verse
    Tags {
        id: String,
        #[arg(value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Remove every saved verse
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(app: &App, args: FavoriteArgs) -> Result<()> {
    let mut favorites = Favorites::new(app.kv.clone())?;

    match args.command {
        Some(FavoriteCommand::Add { book, chapter, verse, tags }) => add(app, &mut favorites, &book, chapter, verse, tags)?,
        Some(FavoriteCommand::List { tag }) => list(&favorites, tag.as_deref()),
        Some(FavoriteCommand::Remove { id }) => match favorites.remove(&id) {
            Ok(true) => msg_success!(Message::FavoriteRemoved),
            Ok(false) => msg_warning!(Message::FavoriteNotFound(id)),
            Err(e) => msg_error!(Message::FavoriteSaveFailed(e.to_string())),
        },
        Some(FavoriteCommand::Tags { id, tags }) => match favorites.update_tags(&id, clean_tags(tags)) {
            Ok(true) => msg_success!(Message::FavoriteTagsUpdated),
            Ok(false) => msg_warning!(Message::FavoriteNotFound(id)),
            Err(e) => msg_error!(Message::FavoriteSaveFailed(e.to_string())),
        },
        Some(FavoriteCommand::Clear { yes }) => {
            if !confirm(Message::ConfirmClearFavorites, yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            match favorites.clear() {
                Ok(()) => msg_success!(Message::FavoritesCleared),
                Err(e) => msg_error!(Message::FavoriteSaveFailed(e.to_string())),
            }
        }
        None => list(&favorites, None),
    }
    Ok(())
}

fn add(app: &App, favorites: &mut Favorites, query: &str, chapter: u32, verse: u32, tags: Vec<String>) -> Result<()> {
    let store = app.open_store()?;
    let Some(book) = Books::new(&store).find(query)? else {
        msg_bail_anyhow!(Message::BookNotFound(query.to_string()));
    };
    let reference = verse_reference(&book.name, chapter, verse);
    let Some(found) = Verses::new(&store).get(book.id, chapter, verse)? else {
        msg_bail_anyhow!(Message::VerseNotFound(reference));
    };

    let mut favorite = FavoriteVerse::new(&book.name, chapter, verse, &found.text);
    let tags = clean_tags(tags);
    if !tags.is_empty() {
        favorite.tags = Some(tags);
    }

    match favorites.add(favorite) {
        Ok(true) => msg_success!(Message::FavoriteAdded(reference)),
        Ok(false) => msg_info!(Message::FavoriteAlreadyExists(reference)),
        Err(e) => msg_error!(Message::FavoriteSaveFailed(e.to_string())),
    }
    Ok(())
}

fn list(favorites: &Favorites, tag: Option<&str>) {
    let shown: Vec<FavoriteVerse> = match tag {
        Some(tag) => favorites.by_tag(tag).into_iter().cloned().collect(),
        None => favorites.all().to_vec(),
    };
    if shown.is_empty() {
        msg_info!(Message::NoFavorites);
        return;
    }
    View::favorites(&shown);
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
