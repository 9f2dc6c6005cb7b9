//! The reading flow: locate a chapter, load it, prefetch its neighbors and
//! record the reading.
//!
//! ```rust,no_run
//! use biblia::db::db::VerseStore;
//! use biblia::libs::bible::ChapterPosition;
//! use biblia::libs::history::ReadingHistory;
//! use biblia::libs::kv::FileStore;
//! use biblia::libs::reader::{Navigation, ReadingSession};
//! use std::path::Path;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = VerseStore::open(Path::new("biblia-rv-1960.db"))?;
//! let history = ReadingHistory::new(FileStore::shared("data"))?;
//! let mut session = ReadingSession::open(store, history, ChapterPosition::new(43, 3)).await?;
//! if let Navigation::Displayed(position) = session.next().await? {
//!     println!("now at {}", position);
//! }
//! # Ok(())
//! # }
//! ```

use crate::db::db::VerseStore;
use crate::db::error::StoreError;
use crate::libs::bible::{ChapterPayload, ChapterPosition};
use crate::libs::history::ReadingHistory;
use crate::libs::messages::Message;
use crate::libs::navigation::{step, Direction};
use crate::libs::prefetch::{load_neighbors, load_payload, PrefetchCache};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Displayed(ChapterPosition),
    /// Already at Genesis 1.
    AtStart,
    /// Already at the last chapter of Revelation.
    AtEnd,
}

/// Where the displayed chapter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterSource {
    Prefetch,
    Store,
}

pub struct ReadingSession {
    store: VerseStore,
    history: ReadingHistory,
    prefetch: Arc<Mutex<PrefetchCache>>,
    pending: Option<JoinHandle<()>>,
    current: ChapterPayload,
    source: ChapterSource,
}

impl ReadingSession {
    /// Displays `position`. Fails with [`StoreError::NotFound`] if the
    /// chapter does not exist.
    pub async fn open(store: VerseStore, history: ReadingHistory, position: ChapterPosition) -> Result<Self, StoreError> {
        let current = load_payload(&store, position)?;
        let mut session = ReadingSession {
            store,
            history,
            prefetch: Arc::new(Mutex::new(PrefetchCache::new())),
            pending: None,
            current,
            source: ChapterSource::Store,
        };
        session.after_display();
        Ok(session)
    }

    /// Reopens the most recently read chapter, or Genesis 1.
    pub async fn resume(store: VerseStore, history: ReadingHistory) -> Result<Self, StoreError> {
        let position = last_position(&history).unwrap_or_else(ChapterPosition::start);
        Self::open(store, history, position).await
    }

    pub fn current(&self) -> &ChapterPayload {
        &self.current
    }

    pub fn position(&self) -> ChapterPosition {
        self.current.position
    }

    pub fn source(&self) -> ChapterSource {
        self.source
    }

    pub fn history(&self) -> &ReadingHistory {
        &self.history
    }

    /// Jumps to any chapter (book/chapter picker). Never uses prefetched
    /// data.
    pub async fn jump(&mut self, position: ChapterPosition) -> Result<&ChapterPayload, StoreError> {
        self.display(position, None)?;
        Ok(&self.current)
    }

    pub async fn next(&mut self) -> Result<Navigation, StoreError> {
        self.navigate(Direction::Next)
    }

    pub async fn previous(&mut self) -> Result<Navigation, StoreError> {
        self.navigate(Direction::Previous)
    }

    /// Waits for the in-flight prefetch, if any.
    pub async fn prefetch_settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "prefetch task did not finish");
            }
        }
    }

    /// The prefetched chapter held for `direction`, if loaded.
    pub fn prefetched(&self, direction: Direction) -> Option<ChapterPosition> {
        self.prefetch.lock().slot(direction).map(|payload| payload.position)
    }

    fn navigate(&mut self, direction: Direction) -> Result<Navigation, StoreError> {
        let target = match step(&self.store, self.current.position, direction)? {
            Some(target) => target,
            None => {
                return Ok(match direction {
                    Direction::Previous => Navigation::AtStart,
                    Direction::Next => Navigation::AtEnd,
                })
            }
        };

        self.display(target, Some(direction))?;
        Ok(Navigation::Displayed(target))
    }

    fn display(&mut self, position: ChapterPosition, sequential: Option<Direction>) -> Result<(), StoreError> {
        let prefetched = sequential.and_then(|direction| self.prefetch.lock().lookup(direction, position, true));

        let (payload, source) = match prefetched {
            Some(payload) => (payload, ChapterSource::Prefetch),
            None => (load_payload(&self.store, position)?, ChapterSource::Store),
        };
        tracing::debug!(%position, ?source, "displaying chapter");

        self.current = payload;
        self.source = source;
        self.after_display();
        Ok(())
    }

    fn after_display(&mut self) {
        self.spawn_prefetch();
        self.record_reading();
    }

    fn spawn_prefetch(&mut self) {
        let anchor = self.current.position;
        self.prefetch.lock().refresh(anchor);

        let cache = Arc::clone(&self.prefetch);
        let store = self.store.clone();
        // an older prefetch keeps running; its result is dropped by `fill`
        self.pending = Some(tokio::spawn(async move {
            let (previous, next) = load_neighbors(store, anchor).await;
            cache.lock().fill(anchor, previous, next);
        }));
    }

    fn record_reading(&mut self) {
        let current = &self.current;
        if let Err(e) = self
            .history
            .record(current.book.id, &current.book.name, current.position.chapter, current.last_verse())
        {
            tracing::warn!("{}", Message::HistoryRecordFailed(e.to_string()));
        }
    }
}

/// Position of the most recent reading.
pub fn last_position(history: &ReadingHistory) -> Option<ChapterPosition> {
    history
        .latest()
        .map(|item| ChapterPosition::new(item.book_id, item.chapter))
}
