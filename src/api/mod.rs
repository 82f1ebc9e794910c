//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors rejecting with [`crate::error::AppError`]
//! - [`generic`] - Resource trait and mixin-composed generic views
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, rate limiting and tracing middleware
//! - [`permissions`] - Permission classes
//! - [`resources`] - Resources served by the generic views
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod generic;
pub mod handlers;
pub mod middleware;
pub mod permissions;
pub mod resources;
pub mod routes;
