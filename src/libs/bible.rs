//! Core value types of the Bible dataset.
//!
//! Books and verses are immutable rows of the read-only verse store. A
//! [`ChapterPosition`] identifies one chapter of the canon and orders
//! chapters by `(book_id, chapter)`, which is the reading order of the
//! whole Bible.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the first book of the canon (Genesis).
pub const FIRST_BOOK: u32 = 1;
/// Id of the last book of the canon (Revelation).
pub const LAST_BOOK: u32 = 66;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    /// Maps the store's `testament_id` column; `1` is the Old Testament.
    pub fn from_id(testament_id: i64) -> Self {
        if testament_id == 1 {
            Testament::Old
        } else {
            Testament::New
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Testament::Old => 1,
            Testament::New => 2,
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => write!(f, "OT"),
            Testament::New => write!(f, "NT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
    pub testament: Testament,
    pub chapter_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub id: i64,
    pub book_id: u32,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChapterPosition {
    pub book_id: u32,
    pub chapter: u32,
}

impl ChapterPosition {
    pub fn new(book_id: u32, chapter: u32) -> Self {
        Self { book_id, chapter }
    }

    /// Genesis 1.
    pub fn start() -> Self {
        Self::new(FIRST_BOOK, 1)
    }
}

impl fmt::Display for ChapterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.book_id, self.chapter)
    }
}

/// A decoded chapter ready for display: its book and ordered verses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterPayload {
    pub position: ChapterPosition,
    pub book: Book,
    pub verses: Vec<Verse>,
}

impl ChapterPayload {
    /// Number of the last verse of the chapter, if it has any.
    pub fn last_verse(&self) -> Option<u32> {
        self.verses.last().map(|v| v.verse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub book_id: u32,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}
