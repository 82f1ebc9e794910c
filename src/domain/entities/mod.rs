//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation and
//! modification use separate input types:
//!
//! - [`Author`] - A persisted author record
//! - [`NewAuthor`] - Full set of writable fields (create or replace)
//! - [`AuthorPatch`] - Partial update
//! - [`Principal`] - The identity a request acts as

pub mod author;
pub mod principal;

pub use author::{Author, AuthorPatch, NewAuthor};
pub use principal::Principal;
