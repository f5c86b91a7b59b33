//! Memo data access: one SQL statement per operation on the caller's connection.
//!
//! `Ok(None)` means no row has the id; `Err` means the store failed.

use crate::error::AppError;
use crate::model::Memo;
use crate::service::MemoWrite;
use chrono::Utc;
use sqlx::SqliteConnection;

const COLUMNS: &str = "memo_id, title, description, created_at, updated_at";

pub struct MemoService;

impl MemoService {
    /// Insert one memo. The store assigns `memo_id`; `created_at` is now.
    pub async fn insert(conn: &mut SqliteConnection, write: &MemoWrite) -> Result<Memo, AppError> {
        tracing::debug!(title = %write.title, "insert memo: start");
        let sql = format!(
            "INSERT INTO memos (title, description, created_at) VALUES (?, ?, ?) RETURNING {}",
            COLUMNS
        );
        let memo = sqlx::query_as::<_, Memo>(&sql)
            .bind(&write.title)
            .bind(&write.description)
            .bind(Utc::now())
            .fetch_one(&mut *conn)
            .await?;
        tracing::debug!(memo_id = memo.memo_id, "insert memo: done");
        Ok(memo)
    }

    /// Every memo, in insertion order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Memo>, AppError> {
        tracing::debug!("list memos: start");
        let sql = format!("SELECT {} FROM memos ORDER BY memo_id", COLUMNS);
        let memos = sqlx::query_as::<_, Memo>(&sql).fetch_all(&mut *conn).await?;
        tracing::debug!(count = memos.len(), "list memos: done");
        Ok(memos)
    }

    pub async fn get_by_id(conn: &mut SqliteConnection, memo_id: i64) -> Result<Option<Memo>, AppError> {
        tracing::debug!(memo_id, "get memo: start");
        let sql = format!("SELECT {} FROM memos WHERE memo_id = ?", COLUMNS);
        let memo = sqlx::query_as::<_, Memo>(&sql)
            .bind(memo_id)
            .fetch_optional(&mut *conn)
            .await?;
        tracing::debug!(memo_id, found = memo.is_some(), "get memo: done");
        Ok(memo)
    }

    /// Overwrite title and description and stamp `updated_at`. Concurrent updates to the
    /// same id are last-write-wins.
    pub async fn update(
        conn: &mut SqliteConnection,
        memo_id: i64,
        write: &MemoWrite,
    ) -> Result<Option<Memo>, AppError> {
        tracing::debug!(memo_id, "update memo: start");
        let sql = format!(
            "UPDATE memos SET title = ?, description = ?, updated_at = ? WHERE memo_id = ? RETURNING {}",
            COLUMNS
        );
        let memo = sqlx::query_as::<_, Memo>(&sql)
            .bind(&write.title)
            .bind(&write.description)
            .bind(Utc::now())
            .bind(memo_id)
            .fetch_optional(&mut *conn)
            .await?;
        tracing::debug!(memo_id, found = memo.is_some(), "update memo: done");
        Ok(memo)
    }

    /// Remove one memo, returning it as it was before removal.
    pub async fn delete(conn: &mut SqliteConnection, memo_id: i64) -> Result<Option<Memo>, AppError> {
        tracing::debug!(memo_id, "delete memo: start");
        let sql = format!("DELETE FROM memos WHERE memo_id = ? RETURNING {}", COLUMNS);
        let memo = sqlx::query_as::<_, Memo>(&sql)
            .bind(memo_id)
            .fetch_optional(&mut *conn)
            .await?;
        tracing::debug!(memo_id, found = memo.is_some(), "delete memo: done");
        Ok(memo)
    }
}
