#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use url::Url;
use author_api::application::services::hash_token;
use author_api::routes::router_without_rate_limit;
use author_api::state::AppState;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const BASE_URL: &str = "http://testserver";

pub const USER_TOKEN: &str = "user-token-value";
pub const SUPERUSER_TOKEN: &str = "superuser-token-value";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        SIGNING_SECRET.to_string(),
        Url::parse(BASE_URL).unwrap(),
    )
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router_without_rate_limit(create_test_state(pool))).unwrap()
}

pub async fn create_test_author(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO authors (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_authors(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Stores a token hashed the way the server expects.
pub async fn create_token(pool: &PgPool, name: &str, token: &str, is_superuser: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO api_tokens (name, token_hash, is_superuser) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(hash_token(SIGNING_SECRET, token))
    .bind(is_superuser)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Creates the standard user and superuser tokens.
pub async fn create_tokens(pool: &PgPool) {
    create_token(pool, "user", USER_TOKEN, false).await;
    create_token(pool, "admin", SUPERUSER_TOKEN, true).await;
}
