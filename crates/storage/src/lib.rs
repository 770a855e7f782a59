use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    Pool, Sqlite,
};
use std::{fs, path::Path, str::FromStr};

mod error;
mod memory;
mod models;
mod repo;
mod store;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use store::CommentStore;

#[derive(Clone)]
pub struct Db {
    pub(crate) pool: Pool<Sqlite>,
}

impl Db {
    pub async fn new(db_url: &str) -> anyhow::Result<Self> {
        let in_memory = db_url.contains(":memory:");
        if db_url.starts_with("sqlite://") && !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://");
            let path = Path::new(path_str);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
        }

        // applied to every pooled connection, not just the first one
        let connect_options = SqliteConnectOptions::from_str(db_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        // every connection to :memory: is its own database
        let options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = options.connect_with(connect_options).await?;

        sqlx::migrate!("../../migrations").run(&pool).await?;
        tracing::info!(url = %db_url, "database ready");
        Ok(Self { pool })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
