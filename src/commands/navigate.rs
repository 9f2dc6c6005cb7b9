use super::read::{open_at, show};
use super::App;
use crate::libs::history::ReadingHistory;
use crate::libs::messages::Message;
use crate::libs::navigation::{step, Direction};
use crate::libs::reader::last_position;
use crate::msg_info;
use anyhow::Result;

/// Moves one chapter from the last reading in the history and prints it.
pub async fn cmd(app: &App, direction: Direction) -> Result<()> {
    let store = app.open_store()?;
    let history = ReadingHistory::new(app.kv.clone())?;

    let Some(from) = last_position(&history) else {
        msg_info!(Message::NothingReadYet);
        return Ok(());
    };

    let Some(target) = step(&store, from, direction)? else {
        match direction {
            Direction::Previous => msg_info!(Message::AtFirstChapter),
            Direction::Next => msg_info!(Message::AtLastChapter),
        }
        return Ok(());
    };

    let session = open_at(store, history, target).await?;
    show(session.current());
    Ok(())
}
