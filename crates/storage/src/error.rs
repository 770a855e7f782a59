use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// For stores not backed by sqlx, e.g. test doubles that simulate an outage.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
