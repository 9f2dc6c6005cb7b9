use super::db::VerseStore;
use super::error::StoreError;
use crate::libs::bible::{SearchResult, Verse, FIRST_BOOK, LAST_BOOK};
use rusqlite::{params, OptionalExtension, Row};

const SELECT_VERSES_BY_CHAPTER: &str = "
    SELECT id, book_id, chapter, verse, text
    FROM verse
    WHERE book_id = ?1 AND chapter = ?2
    ORDER BY verse
";
const SELECT_VERSE: &str = "
    SELECT id, book_id, chapter, verse, text
    FROM verse
    WHERE book_id = ?1 AND chapter = ?2 AND verse = ?3
";
const SEARCH_VERSES: &str = "
    SELECT v.book_id, b.name, v.chapter, v.verse, v.text
    FROM verse v
    JOIN book b ON v.book_id = b.id
    WHERE LOWER(v.text) LIKE LOWER(?1)
    ORDER BY LENGTH(v.text) ASC, v.book_id, v.chapter, v.verse
    LIMIT ?2
";
const SELECT_MAX_CHAPTER: &str = "SELECT MAX(chapter) FROM verse WHERE book_id = ?1";

/// Verse queries against the verse store.
pub struct Verses {
    store: VerseStore,
}

impl Verses {
    pub fn new(store: &VerseStore) -> Self {
        Verses { store: store.clone() }
    }

    /// Verses of one chapter ordered by verse number. Empty if the chapter
    /// does not exist.
    pub fn by_chapter(&self, book_id: u32, chapter: u32) -> Result<Vec<Verse>, StoreError> {
        self.store.with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_VERSES_BY_CHAPTER)?;
            let verses = stmt
                .query_map(params![book_id, chapter], verse_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(verses)
        })
    }

    pub fn get(&self, book_id: u32, chapter: u32, verse: u32) -> Result<Option<Verse>, StoreError> {
        self.store.with_conn(|conn| {
            conn.query_row(SELECT_VERSE, params![book_id, chapter, verse], verse_from_row)
                .optional()
        })
    }

    /// Case-insensitive substring search, shortest verses first.
    pub fn search(&self, term: &str, limit: usize) -> Result<Vec<SearchResult>, StoreError> {
        let pattern = format!("%{}%", term);
        tracing::debug!(term, limit, "searching verses");

        self.store.with_conn(|conn| {
            let mut stmt = conn.prepare(SEARCH_VERSES)?;
            let results = stmt
                .query_map(params![pattern, limit as i64], |row| {
                    Ok(SearchResult {
                        book_id: row.get(0)?,
                        book: row.get(1)?,
                        chapter: row.get(2)?,
                        verse: row.get(3)?,
                        text: row.get(4)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(results)
        })
    }

    /// Highest chapter number among the verses of a book.
    pub fn chapter_count(&self, book_id: u32) -> Result<u32, StoreError> {
        if !(FIRST_BOOK..=LAST_BOOK).contains(&book_id) {
            return Err(StoreError::NotFound(format!("book {}", book_id)));
        }

        let max: Option<u32> = self
            .store
            .with_conn(|conn| conn.query_row(SELECT_MAX_CHAPTER, params![book_id], |row| row.get(0)))?;

        match max {
            Some(count) if count > 0 => Ok(count),
            _ => Err(StoreError::NotFound(format!("chapters of book {}", book_id))),
        }
    }
}

fn verse_from_row(row: &Row<'_>) -> rusqlite::Result<Verse> {
    Ok(Verse {
        id: row.get(0)?,
        book_id: row.get(1)?,
        chapter: row.get(2)?,
        verse: row.get(3)?,
        text: row.get(4)?,
    })
}
