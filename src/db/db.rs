use super::error::StoreError;
use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::sync::Arc;

pub const DB_FILE_NAME: &str = "biblia-rv-1960.db";

const SELECT_TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'";
const COUNT_BOOKS: &str = "SELECT COUNT(*) FROM book";
const REQUIRED_TABLES: &[&str] = &["book", "verse"];

/// Handle to the bundled Bible dataset.
///
/// The connection is opened once and shared by every clone of the handle,
/// so background prefetch work can run its queries on blocking threads.
/// After [`VerseStore::close`] every query fails with [`StoreError::Closed`].
#[derive(Clone)]
pub struct VerseStore {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl VerseStore {
    /// Opens the dataset at `path` read-only and verifies its structure.
    pub fn open(path: &Path) -> Result<VerseStore, StoreError> {
        if !path.exists() {
            return Err(StoreError::Unavailable(format!("database file {} does not exist", path.display())));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tracing::debug!(path = %path.display(), "opened verse store");

        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<VerseStore, StoreError> {
        verify_structure(&conn)?;

        Ok(VerseStore {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    pub fn is_open(&self) -> bool {
        self.conn.lock().is_some()
    }

    pub fn close(&self) -> Result<(), StoreError> {
        if let Some(conn) = self.conn.lock().take() {
            conn.close().map_err(|(_, e)| StoreError::Sql(e))?;
            tracing::debug!("closed verse store");
        }
        Ok(())
    }

    pub(crate) fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<T>) -> Result<T, StoreError> {
        let guard = self.conn.lock();
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(f(conn)?)
    }
}

fn verify_structure(conn: &Connection) -> Result<(), StoreError> {
    let unavailable = |e: rusqlite::Error| StoreError::Unavailable(e.to_string());

    let mut stmt = conn.prepare(SELECT_TABLES).map_err(unavailable)?;
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(unavailable)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(unavailable)?;

    if tables.is_empty() {
        return Err(StoreError::Unavailable("no tables found".to_string()));
    }
    for table in REQUIRED_TABLES {
        if !tables.iter().any(|t| t == table) {
            return Err(StoreError::Unavailable(format!("table {} not found", table)));
        }
    }

    let books: i64 = conn.query_row(COUNT_BOOKS, [], |row| row.get(0)).map_err(unavailable)?;
    tracing::info!(books, "verse store structure verified");

    Ok(())
}
