//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`AuthorRepository`] - Author CRUD and filtered listings
//! - [`TokenRepository`] - API token authentication
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod author_repository;
pub mod token_repository;

pub use author_repository::{
    AuthorFilter, AuthorOrdering, AuthorRepository, OrderingError, OrderingField,
};
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
