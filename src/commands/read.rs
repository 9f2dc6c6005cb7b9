use super::App;
use crate::db::books::Books;
use crate::db::db::VerseStore;
use crate::db::error::StoreError;
use crate::libs::bible::{ChapterPayload, ChapterPosition};
use crate::libs::formatter::chapter_title;
use crate::libs::history::ReadingHistory;
use crate::libs::messages::Message;
use crate::libs::reader::{Navigation, ReadingSession};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Book id, name or abbreviation. Without it the last chapter read is reopened
    book: Option<String>,
    /// Chapter number
    #[arg(default_value_t = 1)]
    chapter: u32,
    /// Print the chapter and exit instead of paging
    #[arg(long)]
    no_pager: bool,
}

pub async fn cmd(app: &App, args: ReadArgs) -> Result<()> {
    let store = app.open_store()?;
    let history = ReadingHistory::new(app.kv.clone())?;

    let session = match args.book {
        Some(query) => {
            let position = resolve(&store, &query, args.chapter)?;
            open_at(store, history, position).await?
        }
        None => ReadingSession::resume(store, history).await?,
    };

    if args.no_pager {
        show(session.current());
        return Ok(());
    }
    pager(session).await
}

/// Resolves a book query and chapter number to a position.
pub(crate) fn resolve(store: &VerseStore, query: &str, chapter: u32) -> Result<ChapterPosition> {
    match Books::new(store).find(query)? {
        Some(book) => Ok(ChapterPosition::new(book.id, chapter)),
        None => msg_bail_anyhow!(Message::BookNotFound(query.to_string())),
    }
}

pub(crate) async fn open_at(store: VerseStore, history: ReadingHistory, position: ChapterPosition) -> Result<ReadingSession> {
    match ReadingSession::open(store, history, position).await {
        Ok(session) => Ok(session),
        Err(StoreError::NotFound(_)) => msg_bail_anyhow!(Message::ChapterNotFound(position.to_string())),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn show(payload: &ChapterPayload) {
    msg_print!(Message::ChapterHeader(chapter_title(&payload.book.name, payload.position.chapter)), true);
    View::chapter(payload);
}

async fn pager(mut session: ReadingSession) -> Result<()> {
    show(session.current());

    loop {
        let key: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PagerPrompt.to_string())
            .default("n".to_string())
            .interact_text()?;

        let result = match key.trim().to_lowercase().as_str() {
            "n" | "next" => session.next().await,
            "p" | "prev" | "previous" => session.previous().await,
            "q" | "quit" => break,
            other => {
                msg_warning!(Message::PagerUnknownKey(other.to_string()));
                continue;
            }
        };

        match result {
            Ok(Navigation::Displayed(_)) => show(session.current()),
            Ok(Navigation::AtStart) => msg_info!(Message::AtFirstChapter),
            Ok(Navigation::AtEnd) => msg_info!(Message::AtLastChapter),
            Err(e) => msg_error!(Message::LoadChapterFailed(e.to_string())),
        }
    }

    session.prefetch_settled().await;
    Ok(())
}
