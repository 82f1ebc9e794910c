use author_api::domain::repositories::TokenRepository;
use author_api::error::AppError;
use author_api::infrastructure::persistence::PgTokenRepository;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token("test-token", "hash123", false).await.unwrap();

    assert_eq!(token.name, "test-token");
    assert_eq!(token.token_hash, "hash123");
    assert!(!token.is_superuser);
    assert!(token.revoked_at.is_none());
    assert!(token.last_used_at.is_none());
}

#[sqlx::test]
async fn test_create_superuser_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token("root", "roothash", true).await.unwrap();

    assert!(token.is_superuser);
}

#[sqlx::test]
async fn test_create_token_duplicate_name_is_conflict(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("dup", "hash-a", false).await.unwrap();
    let result = repo.create_token("dup", "hash-b", false).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_find_active_by_hash(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let created = repo.create_token("valid-token", "validhash", false).await.unwrap();

    let found = repo.find_active_by_hash("validhash").await.unwrap();

    assert_eq!(found.map(|t| t.id), Some(created.id));
}

#[sqlx::test]
async fn test_find_active_by_hash_unknown(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let found = repo.find_active_by_hash("nonexistent").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_find_active_by_hash_skips_revoked(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token("revoked-token", "revokedhash", false)
        .await
        .unwrap();
    repo.revoke_token(token.id).await.unwrap();

    let found = repo.find_active_by_hash("revokedhash").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_update_last_used(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool.clone()));

    let token = repo
        .create_token("update-token", "updatehash", false)
        .await
        .unwrap();

    repo.update_last_used(token.id).await.unwrap();

    let last_used: Option<DateTime<Utc>> =
        sqlx::query_scalar("SELECT last_used_at FROM api_tokens WHERE id = $1")
            .bind(token.id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(last_used.is_some());
}

#[sqlx::test]
async fn test_list_tokens_newest_first(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("token1", "hash1", false).await.unwrap();
    repo.create_token("token2", "hash2", false).await.unwrap();
    repo.create_token("token3", "hash3", true).await.unwrap();

    let tokens = repo.list_tokens().await.unwrap();

    let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["token3", "token2", "token1"]);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let created = repo.create_token("find-by-id", "findhash", false).await.unwrap();

    let token = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(token.unwrap().name, "find-by-id");
}

#[sqlx::test]
async fn test_find_by_name(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token("unique-name", "namehash", false).await.unwrap();

    let token = repo.find_by_name("unique-name").await.unwrap();
    assert_eq!(token.unwrap().token_hash, "namehash");

    assert!(repo.find_by_name("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_revoke_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token("revoke-test", "revokehash", false)
        .await
        .unwrap();

    assert!(repo.revoke_token(token.id).await.unwrap());

    let revoked = repo.find_by_id(token.id).await.unwrap().unwrap();
    assert!(revoked.is_revoked());
}

#[sqlx::test]
async fn test_revoke_token_twice(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token("twice", "twicehash", false).await.unwrap();

    assert!(repo.revoke_token(token.id).await.unwrap());
    assert!(!repo.revoke_token(token.id).await.unwrap());
}

#[sqlx::test]
async fn test_revoke_unknown_token(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    assert!(!repo.revoke_token(999_999).await.unwrap());
}
