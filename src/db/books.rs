use super::db::VerseStore;
use super::error::StoreError;
use crate::libs::bible::{Book, Testament};
use rusqlite::{params, OptionalExtension, Row};

const SELECT_BOOKS: &str = "
    SELECT b.id, b.name, b.abbreviation, b.testament_id, COUNT(DISTINCT v.chapter) AS chapters
    FROM book b
    LEFT JOIN verse v ON b.id = v.book_id
    GROUP BY b.id, b.name, b.abbreviation, b.testament_id
    ORDER BY b.id
";
const SELECT_BOOK_BY_ID: &str = "
    SELECT b.id, b.name, b.abbreviation, b.testament_id, COUNT(DISTINCT v.chapter) AS chapters
    FROM book b
    LEFT JOIN verse v ON b.id = v.book_id
    WHERE b.id = ?1
    GROUP BY b.id, b.name, b.abbreviation, b.testament_id
";
const SELECT_BOOKS_BY_TESTAMENT: &str = "
    SELECT b.id, b.name, b.abbreviation, b.testament_id, COUNT(DISTINCT v.chapter) AS chapters
    FROM book b
    LEFT JOIN verse v ON b.id = v.book_id
    WHERE (b.testament_id = 1) = (?1 = 1)
    GROUP BY b.id, b.name, b.abbreviation, b.testament_id
    ORDER BY b.id
";
const SELECT_CHAPTERS: &str = "SELECT DISTINCT chapter FROM verse WHERE book_id = ?1 ORDER BY chapter";

/// Book queries against the verse store.
pub struct Books {
    store: VerseStore,
}

impl Books {
    /// Shares `store`'s connection; nothing is queried until a method runs.
    pub fn new(store: &VerseStore) -> Self {
        Books { store: store.clone() }
    }

    /// All books in canon order, with chapter counts.
    pub fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.store.with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_BOOKS)?;
            let books = stmt.query_map([], book_from_row)?.collect::<Result<Vec<_>, _>>()?;
            Ok(books)
        })
    }

    /// Books of one testament, in canon order.
    pub fn by_testament(&self, testament: Testament) -> Result<Vec<Book>, StoreError> {
        self.store.with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_BOOKS_BY_TESTAMENT)?;
            let books = stmt
                .query_map(params![testament.id()], book_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(books)
        })
    }

    /// The book with `book_id`, or `None` outside 1..=66.
    pub fn get(&self, book_id: u32) -> Result<Option<Book>, StoreError> {
        self.store
            .with_conn(|conn| conn.query_row(SELECT_BOOK_BY_ID, params![book_id], book_from_row).optional())
    }

    /// Like [`Books::get`], but a missing book is a [`StoreError::NotFound`].
    pub fn require(&self, book_id: u32) -> Result<Book, StoreError> {
        self.get(book_id)?.ok_or_else(|| StoreError::NotFound(format!("book {}", book_id)))
    }

    /// Finds a book by id, name or abbreviation, ignoring case. Accents are
    /// significant: `genesis` does not match `Génesis`, `gn` does.
    pub fn find(&self, query: &str) -> Result<Option<Book>, StoreError> {
        let query = query.trim();
        if let Ok(id) = query.parse::<u32>() {
            return self.get(id);
        }
        let wanted = query.to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .find(|book| book.name.to_lowercase() == wanted || book.abbreviation.to_lowercase() == wanted))
    }

    /// Distinct chapter numbers of a book, ascending. Empty for an unknown
    /// book; chapters with no verses are not listed.
    pub fn chapters(&self, book_id: u32) -> Result<Vec<u32>, StoreError> {
        self.store.with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_CHAPTERS)?;
            let chapters = stmt
                .query_map(params![book_id], |row| row.get(0))?
                .collect::<Result<Vec<u32>, _>>()?;
            Ok(chapters)
        })
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        name: row.get(1)?,
        abbreviation: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        testament: Testament::from_id(row.get(3)?),
        chapter_count: row.get(4)?,
    })
}
