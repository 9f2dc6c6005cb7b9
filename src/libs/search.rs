//! Verse text search with the minimum-length gate.
//!
//! Terms are trimmed before both the length check and the query. A term
//! shorter than [`SearchConfig::min_chars`] characters is never sent to the
//! verse store; callers get [`SearchOutcome::NotSearched`] and can tell it
//! apart from a search that found nothing.
//!
//! ```rust
//! use biblia::libs::config::SearchConfig;
//! use biblia::libs::search::is_searchable;
//!
//! let config = SearchConfig::default();
//! assert!(!is_searchable(" fe ", &config));
//! assert!(is_searchable("amor", &config));
//! ```

use crate::db::db::VerseStore;
use crate::db::error::StoreError;
use crate::db::verses::Verses;
use crate::libs::bible::SearchResult;
use crate::libs::config::SearchConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term was too short; the store was not queried.
    NotSearched,
    Results(Vec<SearchResult>),
}

impl SearchOutcome {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::NotSearched => &[],
            SearchOutcome::Results(results) => results,
        }
    }
}

/// `true` when the trimmed term is long enough to be searched.
pub fn is_searchable(term: &str, config: &SearchConfig) -> bool {
    term.trim().chars().count() >= config.min_chars
}

/// Case-insensitive substring search over verse text, shortest verses
/// first and capped at `config.limit` hits.
pub fn search(store: &VerseStore, term: &str, config: &SearchConfig) -> Result<SearchOutcome, StoreError> {
    if !is_searchable(term, config) {
        return Ok(SearchOutcome::NotSearched);
    }
    let results = Verses::new(store).search(term.trim(), config.limit)?;
    Ok(SearchOutcome::Results(results))
}
