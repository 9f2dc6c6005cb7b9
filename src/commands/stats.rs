use super::{confirm, App};
use crate::libs::history::ReadingHistory;
use crate::libs::messages::Message;
use crate::libs::stats::motivation;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Reset the statistics snapshot. The history is kept
    #[arg(long)]
    reset: bool,
    #[arg(short, long, requires = "reset")]
    yes: bool,
}

pub fn cmd(app: &App, args: StatsArgs) -> Result<()> {
    let history = ReadingHistory::new(app.kv.clone())?;

    if args.reset {
        if !confirm(Message::ConfirmResetStats, args.yes)? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
        history.reset_stats()?;
        msg_success!(Message::StatsReset);
        return Ok(());
    }

    let stats = history.stats();
    if stats.is_empty() {
        msg_info!(Message::NoStats);
        return Ok(());
    }
    msg_print!(Message::StatsHeader, true);
    View::stats(&stats);
    msg_print!(motivation(&stats), true);
    Ok(())
}
