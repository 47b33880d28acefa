//! Application state

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::config::Config;
use crate::slots::Schedule;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Migration set for this crate (schema + room seed)
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Facility slot schedule (timezone + opening-hours window)
    pub schedule: Schedule,
}

impl AppState {
    /// Create a new AppState: open the pool and run migrations
    ///
    /// Pragmas match the original deployment: foreign keys on, WAL
    /// journal, 3 s busy timeout for writer contention.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(3));

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        MIGRATOR.run(&pool).await?;

        Ok(Self {
            pool,
            schedule: Schedule::default(),
        })
    }
}
