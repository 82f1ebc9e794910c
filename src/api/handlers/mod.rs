//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod authors;
pub mod health;
pub mod viewset;

pub use authors::{
    create_author_handler, delete_author_handler, get_author_handler, list_authors_handler,
    patch_author_handler, replace_author_handler,
};
pub use health::health_handler;
pub use viewset::{list_authors_page_handler, my_action_handler};
