//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;
use url::Url;

use crate::application::services::{AuthService, AuthorService};
use crate::infrastructure::persistence::{PgAuthorRepository, PgTokenRepository};

#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService<PgAuthorRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    /// Public base URL used to build absolute pagination links.
    pub base_url: Arc<Url>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String, base_url: Url) -> Self {
        let author_repository = Arc::new(PgAuthorRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool));

        Self {
            author_service: Arc::new(AuthorService::new(author_repository)),
            auth_service: Arc::new(AuthService::new(token_repository, token_signing_secret)),
            base_url: Arc::new(base_url),
        }
    }
}
