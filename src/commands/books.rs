use super::App;
use crate::db::books::Books;
use crate::libs::bible::Testament;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BooksArgs {
    /// Show the chapters of one book (id, name or abbreviation)
    #[arg(conflicts_with = "testament")]
    pub book: Option<String>,
    /// Only list the books of one testament
    #[arg(short, long, value_enum)]
    pub testament: Option<Testament>,
}

pub fn cmd(app: &App, args: BooksArgs) -> Result<()> {
    let store = app.open_store()?;
    let books = Books::new(&store);

    if let Some(query) = args.book {
        let Some(book) = books.find(&query)? else {
            msg_bail_anyhow!(Message::BookNotFound(query));
        };
        let chapters = books.chapters(book.id)?;
        msg_print!(Message::BookChaptersHeader(book.name, chapters.len()), true);
        View::chapters(&chapters);
        return Ok(());
    }

    let list = match args.testament {
        Some(testament) => books.by_testament(testament)?,
        None => books.list()?,
    };

    msg_print!(Message::BooksHeader, true);
    View::books(&list);
    Ok(())
}
