use super::App;
use crate::libs::messages::Message;
use crate::libs::search::{is_searchable, search, SearchOutcome};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Words to look for; joined with spaces
    #[arg(required = true)]
    pub term: Vec<String>,
    /// Maximum number of verses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn cmd(app: &App, args: SearchArgs) -> Result<()> {
    let term = args.term.join(" ");
    let mut config = app.config.search.clone();
    if let Some(limit) = args.limit {
        config.limit = limit;
    }

    // a short term never needs the database
    if !is_searchable(&term, &config) {
        msg_warning!(Message::SearchTooShort(config.min_chars));
        return Ok(());
    }

    let store = app.open_store()?;
    match search(&store, &term, &config)? {
        SearchOutcome::NotSearched => msg_warning!(Message::SearchTooShort(config.min_chars)),
        SearchOutcome::Results(results) if results.is_empty() => msg_info!(Message::SearchNoResults(term)),
        SearchOutcome::Results(results) => {
            msg_print!(Message::SearchResultsCount(results.len()), true);
            View::search_results(&results);
        }
    }
    Ok(())
}
