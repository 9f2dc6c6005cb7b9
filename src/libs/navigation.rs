//! Chapter-to-chapter navigation across the canon.
//!
//! Chapters are totally ordered by `(book_id, chapter)`. Moving past the last
//! chapter of a book lands on chapter 1 of the next book, moving before
//! chapter 1 lands on the last chapter of the previous book. Genesis 1 and
//! the last chapter of Revelation are hard stops: navigation past them
//! returns `None` and never wraps around.

use crate::db::db::VerseStore;
use crate::db::error::StoreError;
use crate::db::verses::Verses;
use crate::libs::bible::{Book, ChapterPosition, FIRST_BOOK, LAST_BOOK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Source of per-book chapter counts.
pub trait ChapterCounts {
    /// Number of chapters of `book_id`. Fails with [`StoreError::NotFound`]
    /// for ids outside the canon or books without verses.
    fn chapter_count(&self, book_id: u32) -> Result<u32, StoreError>;
}

impl ChapterCounts for Verses {
    fn chapter_count(&self, book_id: u32) -> Result<u32, StoreError> {
        Verses::chapter_count(self, book_id)
    }
}

impl ChapterCounts for VerseStore {
    fn chapter_count(&self, book_id: u32) -> Result<u32, StoreError> {
        Verses::new(self).chapter_count(book_id)
    }
}

/// Chapter counts held in memory, indexed by book id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable {
    counts: Vec<u32>,
}

impl CountTable {
    /// `counts[0]` is the chapter count of book 1.
    pub fn new(counts: Vec<u32>) -> Self {
        CountTable { counts }
    }

    pub fn from_books(books: &[Book]) -> Self {
        let mut counts = vec![0; LAST_BOOK as usize];
        for book in books {
            if let Some(slot) = book.id.checked_sub(1).and_then(|i| counts.get_mut(i as usize)) {
                *slot = book.chapter_count;
            }
        }
        CountTable { counts }
    }

    /// Total number of chapters in the canon.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl ChapterCounts for CountTable {
    fn chapter_count(&self, book_id: u32) -> Result<u32, StoreError> {
        if !(FIRST_BOOK..=LAST_BOOK).contains(&book_id) {
            return Err(StoreError::NotFound(format!("book {}", book_id)));
        }
        match self.counts.get(book_id as usize - 1) {
            Some(&count) if count > 0 => Ok(count),
            _ => Err(StoreError::NotFound(format!("chapters of book {}", book_id))),
        }
    }
}

/// The chapter before `pos`, or `None` at Genesis 1.
pub fn previous_chapter<C>(counts: &C, pos: ChapterPosition) -> Result<Option<ChapterPosition>, StoreError>
where
    C: ChapterCounts + ?Sized,
{
    if pos.chapter > 1 {
        return Ok(Some(ChapterPosition::new(pos.book_id, pos.chapter - 1)));
    }
    if pos.book_id > FIRST_BOOK {
        let book_id = pos.book_id - 1;
        return Ok(Some(ChapterPosition::new(book_id, counts.chapter_count(book_id)?)));
    }

    Ok(None)
}

/// The chapter after `pos`, or `None` at the last chapter of Revelation.
pub fn next_chapter<C>(counts: &C, pos: ChapterPosition) -> Result<Option<ChapterPosition>, StoreError>
where
    C: ChapterCounts + ?Sized,
{
    if pos.chapter < counts.chapter_count(pos.book_id)? {
        return Ok(Some(ChapterPosition::new(pos.book_id, pos.chapter + 1)));
    }
    if pos.book_id < LAST_BOOK {
        return Ok(Some(ChapterPosition::new(pos.book_id + 1, 1)));
    }

    Ok(None)
}

pub fn step<C>(counts: &C, pos: ChapterPosition, direction: Direction) -> Result<Option<ChapterPosition>, StoreError>
where
    C: ChapterCounts + ?Sized,
{
    match direction {
        Direction::Previous => previous_chapter(counts, pos),
        Direction::Next => next_chapter(counts, pos),
    }
}
