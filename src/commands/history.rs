use super::{confirm, App};
use crate::libs::history::ReadingHistory;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: Option<HistoryCommand>,
}

#[derive(Debug, Subcommand)]
enum HistoryCommand {
    /// Show the most recent readings
    List {
        /// Number of entries; defaults to the configured `recent_history`
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Show the whole history
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },
    /// Delete one entry by id
    Remove { id: String },
    /// Delete the whole history and reset the statistics
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(app: &App, args: HistoryArgs) -> Result<()> {
    let mut history = ReadingHistory::new(app.kv.clone())?;

    match args.command.unwrap_or(HistoryCommand::List { limit: None, all: false }) {
        HistoryCommand::List { limit, all } => {
            let items = if all {
                history.list()
            } else {
                history.recent(limit.unwrap_or(app.config.recent_history))
            };
            if items.is_empty() {
                msg_info!(Message::NoHistory);
                return Ok(());
            }
            msg_print!(Message::HistoryHeader, true);
            View::history(items);
        }
        HistoryCommand::Remove { id } => match history.remove(&id) {
            Ok(true) => msg_success!(Message::HistoryItemRemoved),
            Ok(false) => msg_warning!(Message::HistoryItemNotFound(id)),
            Err(e) => msg_error!(Message::HistoryRecordFailed(e.to_string())),
        },
        HistoryCommand::Clear { yes } => {
            if !confirm(Message::ConfirmClearHistory, yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            history.clear()?;
            msg_success!(Message::HistoryCleared);
        }
    }
    Ok(())
}
