//! Business logic services for the application layer.

pub mod auth_service;
pub mod author_service;

pub use auth_service::{AuthService, hash_token};
pub use author_service::AuthorService;
