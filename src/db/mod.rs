//! Read-only access to the bundled Bible dataset.
//!
//! The dataset is a SQLite file with a fixed schema:
//!
//! - `book (id, name, abbreviation, testament_id)`, ids 1..=66 in canon order,
//!   `testament_id = 1` for the Old Testament
//! - `verse (id, book_id, chapter, verse, text)`
//!
//! All queries are fixed, parameterized SQL strings executed against the one
//! connection held by [`db::VerseStore`]. Nothing here writes to the dataset.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use biblia::db::{books::Books, db::VerseStore, verses::Verses};
//! use std::path::Path;
//!
//! let store = VerseStore::open(Path::new("biblia-rv-1960.db"))?;
//! let genesis = Books::new(&store).require(1)?;
//! let verses = Verses::new(&store).by_chapter(genesis.id, 1)?;
//! store.close()?;
//! # Ok::<(), biblia::db::error::StoreError>(())
//! ```

/// Connection handle with an explicit open/verify/close lifecycle.
pub mod db;

/// Typed failures of the verse store.
pub mod error;

/// Book listing and lookup, chapter listings.
pub mod books;

/// Chapter contents, single verses, text search and chapter counts.
pub mod verses;
