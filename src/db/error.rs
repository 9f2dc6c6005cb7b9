use thiserror::Error;

/// Failures of the read-only verse store.
///
/// `Unavailable` is fatal at startup; `NotFound` is raised for book or
/// chapter ids that do not exist and is expected to be shown to the user
/// with a retry option.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("verse store unavailable: {0}")]
    Unavailable(String),
    #[error("verse store is closed")]
    Closed,
    #[error("{0} not found")]
    NotFound(String),
    #[error("verse store query failed: {0}")]
    Sql(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
