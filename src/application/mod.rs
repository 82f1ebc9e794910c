//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Author CRUD and uniqueness rules
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
