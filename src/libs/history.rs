//! Reading history log and its cached statistics snapshot.
//!
//! The history is the 100 most recent chapter readings, newest first, stored
//! as one JSON array. Each recorded reading recomputes [`ReadingStats`] from
//! the whole list and stores the snapshot under its own key so it can be
//! read without scanning the history.

use crate::libs::kv::{read_json, write_json, JsonCollection, SharedStore, StorageError};
use crate::libs::stats::{self, ReadingStats};
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const HISTORY_KEY: &str = "@biblia_history";
pub const STATS_KEY: &str = "@biblia_stats";
pub const MAX_HISTORY_ITEMS: usize = 100;
pub const DEFAULT_RECENT_ITEMS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingHistoryItem {
    pub id: String,
    pub book_id: u32,
    /// Book name as it was when the chapter was read.
    pub book_name: String,
    pub chapter: u32,
    /// Epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_verse: Option<u32>,
}

pub struct ReadingHistory {
    items: JsonCollection<ReadingHistoryItem>,
    store: SharedStore,
}

impl ReadingHistory {
    pub fn new(store: SharedStore) -> Result<Self> {
        let items = JsonCollection::load(store.clone(), HISTORY_KEY)?;
        Ok(ReadingHistory { items, store })
    }

    /// Records a reading now. See [`ReadingHistory::record_at`].
    pub fn record(&mut self, book_id: u32, book_name: &str, chapter: u32, last_verse: Option<u32>) -> Result<ReadingHistoryItem> {
        self.record_at(book_id, book_name, chapter, last_verse, Local::now())
    }

    /// Prepends a new reading, keeps the newest [`MAX_HISTORY_ITEMS`],
    /// persists the list and refreshes the statistics snapshot. If either
    /// write fails the reading is not recorded.
    pub fn record_at(
        &mut self,
        book_id: u32,
        book_name: &str,
        chapter: u32,
        last_verse: Option<u32>,
        now: DateTime<Local>,
    ) -> Result<ReadingHistoryItem> {
        let timestamp = now.timestamp_millis();
        let item = ReadingHistoryItem {
            id: self.unique_id(book_id, chapter, timestamp),
            book_id,
            book_name: book_name.to_string(),
            chapter,
            timestamp,
            last_verse,
        };

        let previous = self.items.items().to_vec();
        let mut next = previous.clone();
        next.insert(0, item.clone());
        next.truncate(MAX_HISTORY_ITEMS);
        let updated = stats::recompute(&next, &self.stats(), now.date_naive());

        self.items.replace(next)?;
        if let Err(e) = write_json(self.store.as_ref(), STATS_KEY, &updated) {
            // the list and the snapshot describe the same readings or neither changes
            if let Err(rollback) = self.items.replace(previous) {
                tracing::warn!(error = %rollback, "failed to roll back reading history");
            }
            return Err(e.into());
        }
        tracing::debug!(id = %item.id, len = self.items.len(), "recorded reading");

        Ok(item)
    }

    fn unique_id(&self, book_id: u32, chapter: u32, timestamp: i64) -> String {
        let base = format!("{}_{}_{}", book_id, chapter, timestamp);
        let taken = |id: &str| self.items.items().iter().any(|item| item.id == id);
        if !taken(&base) {
            return base;
        }
        (1..)
            .map(|n| format!("{}_{}", base, n))
            .find(|id| !taken(id))
            .unwrap_or(base)
    }

    /// Newest first.
    pub fn list(&self) -> &[ReadingHistoryItem] {
        self.items.items()
    }

    /// At most `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> &[ReadingHistoryItem] {
        let items = self.items.items();
        &items[..limit.min(items.len())]
    }

    pub fn latest(&self) -> Option<&ReadingHistoryItem> {
        self.items.items().first()
    }

    /// Removes one entry. Returns `false` when no entry has that id.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if !self.items.items().iter().any(|item| item.id == id) {
            return Ok(false);
        }
        self.items.commit(|items| items.retain(|item| item.id != id))?;
        Ok(true)
    }

    /// Empties the history and resets the statistics snapshot.
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear()?;
        self.reset_stats()?;
        Ok(())
    }

    /// Cached statistics snapshot; the empty snapshot when none is stored
    /// or it cannot be read.
    pub fn stats(&self) -> ReadingStats {
        match read_json::<ReadingStats>(self.store.as_ref(), STATS_KEY) {
            Ok(stats) => stats.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read reading stats");
                ReadingStats::default()
            }
        }
    }

    pub fn reset_stats(&self) -> Result<(), StorageError> {
        write_json(self.store.as_ref(), STATS_KEY, &ReadingStats::default())
    }
}
