//! Integration tests for [`memo_api::MemoService`] against an in-memory SQLite database.

mod common;

use common::memory_pool;
use memo_api::config::DatabaseSettings;
use memo_api::{connect, ensure_schema, AppError, MemoService, MemoWrite};
use std::time::Duration;

#[tokio::test]
async fn test_insert_then_get_returns_same_fields() {
    let pool = memory_pool().await;
    let mut conn = pool.acquire().await.expect("acquire");

    let created = MemoService::insert(&mut conn, &MemoWrite::new("Agenda", "status review"))
        .await
        .expect("insert");
    assert!(created.memo_id > 0);
    assert!(created.updated_at.is_none());

    let fetched = MemoService::get_by_id(&mut conn, created.memo_id)
        .await
        .expect("get")
        .expect("memo should exist");
    assert_eq!(fetched.title, "Agenda");
    assert_eq!(fetched.description, "status review");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_counts_every_insert() {
    let pool = memory_pool().await;
    let mut conn = pool.acquire().await.expect("acquire");

    assert!(MemoService::list(&mut conn).await.expect("list").is_empty());
    for i in 0..4 {
        MemoService::insert(&mut conn, &MemoWrite::new(format!("memo {i}"), ""))
            .await
            .expect("insert");
    }
    let memos = MemoService::list(&mut conn).await.expect("list");
    assert_eq!(memos.len(), 4);
    assert!(memos.windows(2).all(|w| w[0].memo_id < w[1].memo_id));
}

#[tokio::test]
async fn test_get_missing_id_is_none_not_error() {
    let pool = memory_pool().await;
    let mut conn = pool.acquire().await.expect("acquire");

    let found = MemoService::get_by_id(&mut conn, 999).await.expect("lookup must not fail");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_missing_id_writes_nothing() {
    let pool = memory_pool().await;
    let mut conn = pool.acquire().await.expect("acquire");
    let kept = MemoService::insert(&mut conn, &MemoWrite::new("keep", "me"))
        .await
        .expect("insert");

    let updated = MemoService::update(&mut conn, kept.memo_id + 100, &MemoWrite::new("x", "y"))
        .await
        .expect("update");
    assert!(updated.is_none());

    let memos = MemoService::list(&mut conn).await.expect("list");
    assert_eq!(memos, vec![kept]);
}

#[tokio::test]
async fn test_update_sets_fields_and_later_timestamp() {
    let pool = memory_pool().await;
    let mut conn = pool.acquire().await.expect("acquire");
    let created = MemoService::insert(&mut conn, &MemoWrite::new("old", "old text"))
        .await
        .expect("insert");

    tokio::time::sleep(Duration::from_millis(20)).await;
    let updated = MemoService::update(&mut conn, created.memo_id, &MemoWrite::new("new", ""))
        .await
        .expect("update")
        .expect("memo should exist");

    assert_eq!(updated.memo_id, created.memo_id);
    assert_eq!(updated.title, "new");
    assert_eq!(updated.description, "");
    assert_eq!(updated.created_at, created.created_at);
    let stamped = updated.updated_at.expect("updated_at should be set");
    assert!(stamped > created.created_at);
}

#[tokio::test]
async fn test_delete_then_delete_again_is_none() {
    let pool = memory_pool().await;
    let mut conn = pool.acquire().await.expect("acquire");
    let created = MemoService::insert(&mut conn, &MemoWrite::new("gone", "soon"))
        .await
        .expect("insert");

    let removed = MemoService::delete(&mut conn, created.memo_id)
        .await
        .expect("delete")
        .expect("memo should exist");
    assert_eq!(removed, created);

    assert!(MemoService::get_by_id(&mut conn, created.memo_id).await.expect("get").is_none());
    assert!(MemoService::delete(&mut conn, created.memo_id).await.expect("delete").is_none());
}

#[tokio::test]
async fn test_store_rejects_rows_that_break_constraints() {
    let pool = memory_pool().await;
    let mut conn = pool.acquire().await.expect("acquire");

    let empty = MemoService::insert(&mut conn, &MemoWrite::new("", "")).await;
    assert!(matches!(empty, Err(AppError::Db(_))));
    let long = MemoService::insert(&mut conn, &MemoWrite::new("t", "d".repeat(256))).await;
    assert!(matches!(long, Err(AppError::Db(_))));

    assert!(MemoService::list(&mut conn).await.expect("list").is_empty());
}

#[tokio::test]
async fn test_reset_schema_drops_rows() {
    let pool = memory_pool().await;
    {
        let mut conn = pool.acquire().await.expect("acquire");
        MemoService::insert(&mut conn, &MemoWrite::new("a", "")).await.expect("insert");
    }
    memo_api::reset_schema(&pool).await.expect("reset");

    let mut conn = pool.acquire().await.expect("acquire");
    assert!(MemoService::list(&mut conn).await.expect("list").is_empty());
}

#[tokio::test]
async fn test_in_memory_pool_is_capped_at_one_shared_connection() {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".into(),
        max_connections: 4,
    };
    let pool = connect(&settings).await.expect("connect");
    ensure_schema(&pool).await.expect("schema");

    let mut first = pool.acquire().await.expect("acquire");
    MemoService::insert(&mut first, &MemoWrite::new("shared", "")).await.expect("insert");
    let second = tokio::time::timeout(Duration::from_millis(200), pool.acquire()).await;
    assert!(second.is_err(), "pool must not open a second in-memory database");
    drop(first);

    let mut again = pool.acquire().await.expect("acquire");
    let memos = MemoService::list(&mut again).await.expect("list");
    assert_eq!(memos.len(), 1);
}
