//! Adjacent-chapter prefetching.
//!
//! While a chapter is displayed, the chapters before and after it are loaded
//! in the background so that paging with next/previous can show them without
//! querying the verse store. The cache belongs to the displayed chapter: it
//! is emptied whenever another chapter is displayed, and a load that
//! finishes after the reader has moved on is dropped.

use crate::db::books::Books;
use crate::db::db::VerseStore;
use crate::db::error::StoreError;
use crate::db::verses::Verses;
use crate::libs::bible::{ChapterPayload, ChapterPosition};
use crate::libs::navigation::{step, Direction};
use tokio::task::{self, JoinError};

#[derive(Debug, Default)]
pub struct PrefetchCache {
    anchor: Option<ChapterPosition>,
    previous: Option<ChapterPayload>,
    next: Option<ChapterPayload>,
}

impl PrefetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed chapter the slots belong to.
    pub fn anchor(&self) -> Option<ChapterPosition> {
        self.anchor
    }

    /// Starts over for a newly displayed chapter; both slots are emptied.
    pub fn refresh(&mut self, anchor: ChapterPosition) {
        self.anchor = Some(anchor);
        self.previous = None;
        self.next = None;
    }

    /// Replaces both slots with a finished load for `anchor`. Returns
    /// `false`, leaving the cache untouched, when `anchor` is no longer the
    /// displayed chapter.
    pub fn fill(&mut self, anchor: ChapterPosition, previous: Option<ChapterPayload>, next: Option<ChapterPayload>) -> bool {
        if self.anchor != Some(anchor) {
            tracing::debug!(%anchor, "dropping stale prefetch");
            return false;
        }
        self.previous = previous;
        self.next = next;
        true
    }

    pub fn slot(&self, direction: Direction) -> Option<&ChapterPayload> {
        match direction {
            Direction::Previous => self.previous.as_ref(),
            Direction::Next => self.next.as_ref(),
        }
    }

    /// The prefetched payload for `target`, only for sequential navigation
    /// and only when the slot holds exactly that chapter.
    pub fn lookup(&self, direction: Direction, target: ChapterPosition, sequential: bool) -> Option<ChapterPayload> {
        if !sequential {
            return None;
        }
        self.slot(direction).filter(|payload| payload.position == target).cloned()
    }
}

/// Book and verses of one chapter. A chapter without verses is
/// [`StoreError::NotFound`].
pub fn load_payload(store: &VerseStore, position: ChapterPosition) -> Result<ChapterPayload, StoreError> {
    let book = Books::new(store).require(position.book_id)?;
    let verses = Verses::new(store).by_chapter(position.book_id, position.chapter)?;
    if verses.is_empty() {
        return Err(StoreError::NotFound(format!("chapter {} {}", book.name, position.chapter)));
    }

    Ok(ChapterPayload { position, book, verses })
}

fn load_adjacent(store: &VerseStore, anchor: ChapterPosition, direction: Direction) -> Result<Option<ChapterPayload>, StoreError> {
    match step(store, anchor, direction)? {
        Some(position) => load_payload(store, position).map(Some),
        None => Ok(None),
    }
}

fn settle(result: Result<Result<Option<ChapterPayload>, StoreError>, JoinError>, direction: Direction) -> Option<ChapterPayload> {
    match result {
        Ok(Ok(payload)) => payload,
        Ok(Err(e)) => {
            tracing::warn!(?direction, error = %e, "prefetch failed");
            None
        }
        Err(e) => {
            tracing::warn!(?direction, error = %e, "prefetch task failed");
            None
        }
    }
}

/// Loads the chapters before and after `anchor` concurrently. Failures are
/// logged and leave the corresponding slot empty.
pub async fn load_neighbors(store: VerseStore, anchor: ChapterPosition) -> (Option<ChapterPayload>, Option<ChapterPayload>) {
    let previous_store = store.clone();
    let (previous, next) = tokio::join!(
        task::spawn_blocking(move || load_adjacent(&previous_store, anchor, Direction::Previous)),
        task::spawn_blocking(move || load_adjacent(&store, anchor, Direction::Next)),
    );

    (settle(previous, Direction::Previous), settle(next, Direction::Next))
}
