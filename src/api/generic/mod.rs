//! Generic resource views assembled from reusable behaviors.
//!
//! A resource implements [`GenericResource`]: it names its model, its JSON
//! representation and its write payload, and supplies the storage hooks.
//! The behavior traits in [`mixins`] are implemented for every resource and
//! turn those hooks into complete request/response flows; [`views`] exposes
//! them as axum handlers.
//!
//! ```rust,ignore
//! let router = Router::new().nest("/authors", generic::views::routes::<AuthorResource>());
//! ```

pub mod mixins;
pub mod views;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;
use crate::state::AppState;

pub use mixins::{
    CreateModelMixin, DestroyModelMixin, ListModelMixin, RetrieveModelMixin, UpdateModelMixin,
};

/// Definition of a resource served by the generic views.
#[async_trait]
pub trait GenericResource: Send + Sync + 'static {
    /// Stored entity.
    type Model: Send + Sync + 'static;

    /// Response body for one entity.
    type Representation: Serialize + From<Self::Model> + Send + 'static;

    /// Request body accepted by `POST`, `PUT` and `PATCH`.
    type Payload: DeserializeOwned + Send + 'static;

    /// Validated full input.
    type Input: Send + 'static;

    /// Validated partial input.
    type PartialInput: Send + 'static;

    /// Validates a payload that must carry every writable field.
    fn validate(payload: Self::Payload) -> Result<Self::Input, AppError>;

    /// Validates a payload in which every field is optional.
    fn validate_partial(payload: Self::Payload) -> Result<Self::PartialInput, AppError>;

    /// Entities exposed by the collection.
    async fn get_queryset(state: &AppState) -> Result<Vec<Self::Model>, AppError>;

    /// Looks up one entity, failing with `404` when it does not exist.
    async fn get_object(state: &AppState, id: i64) -> Result<Self::Model, AppError>;

    async fn perform_create(state: &AppState, input: Self::Input)
    -> Result<Self::Model, AppError>;

    async fn perform_update(
        state: &AppState,
        instance: Self::Model,
        input: Self::Input,
    ) -> Result<Self::Model, AppError>;

    async fn perform_partial_update(
        state: &AppState,
        instance: Self::Model,
        input: Self::PartialInput,
    ) -> Result<Self::Model, AppError>;

    async fn perform_destroy(state: &AppState, instance: Self::Model) -> Result<(), AppError>;
}
