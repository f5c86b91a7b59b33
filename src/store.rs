//! SQLite connection and `memos` table DDL.

use crate::config::{is_in_memory, DatabaseSettings};
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub const MEMOS_TABLE: &str = "memos";

const CREATE_MEMOS: &str = r#"
    CREATE TABLE IF NOT EXISTS memos (
        memo_id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL CHECK (length(title) BETWEEN 1 AND 50),
        description TEXT NOT NULL DEFAULT '' CHECK (length(description) <= 255),
        created_at DATETIME NOT NULL,
        updated_at DATETIME
    )
"#;

/// Open a pool on `settings.url`, creating the database file if missing.
/// An in-memory database is held on one connection that is never recycled, so the table
/// created at startup stays visible to every request.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);
    let pool = if is_in_memory(&settings.url) {
        if settings.max_connections > 1 {
            tracing::warn!(
                requested = settings.max_connections,
                "in-memory database limited to a single connection"
            );
        }
        tracing::info!(url = %settings.url, "opening in-memory sqlite pool");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        tracing::info!(url = %settings.url, max_connections = settings.max_connections, "opening sqlite pool");
        SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options.journal_mode(SqliteJournalMode::Wal))
            .await?
    };
    Ok(pool)
}

/// Create the memos table if it does not exist. Leaves existing rows alone.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_MEMOS).execute(pool).await?;
    Ok(())
}

/// Drop and recreate the memos table. Destroys all data; development use only.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), AppError> {
    tracing::debug!("resetting schema");
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", MEMOS_TABLE))
        .execute(pool)
        .await?;
    tracing::debug!(table = MEMOS_TABLE, "dropped existing table");
    sqlx::query(CREATE_MEMOS).execute(pool).await?;
    tracing::debug!(table = MEMOS_TABLE, "created table");
    Ok(())
}
