//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAuthorRepository`] - Author storage, filtering and ordering
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_author_repository;
pub mod pg_token_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_token_repository::PgTokenRepository;
