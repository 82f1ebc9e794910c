//! Resources served through the generic views.

use async_trait::async_trait;

use crate::api::dto::author::{AuthorPayload, AuthorResponse};
use crate::api::generic::GenericResource;
use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::repositories::AuthorFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Authors, backed by [`crate::application::services::AuthorService`].
pub struct AuthorResource;

#[async_trait]
impl GenericResource for AuthorResource {
    type Model = Author;
    type Representation = AuthorResponse;
    type Payload = AuthorPayload;
    type Input = NewAuthor;
    type PartialInput = AuthorPatch;

    fn validate(payload: AuthorPayload) -> Result<NewAuthor, AppError> {
        payload.into_new_author()
    }

    fn validate_partial(payload: AuthorPayload) -> Result<AuthorPatch, AppError> {
        payload.into_patch()
    }

    async fn get_queryset(state: &AppState) -> Result<Vec<Author>, AppError> {
        state.author_service.list_authors(AuthorFilter::new()).await
    }

    async fn get_object(state: &AppState, id: i64) -> Result<Author, AppError> {
        state.author_service.get_author(id).await
    }

    async fn perform_create(state: &AppState, input: NewAuthor) -> Result<Author, AppError> {
        state.author_service.create_author(input).await
    }

    async fn perform_update(
        state: &AppState,
        instance: Author,
        input: NewAuthor,
    ) -> Result<Author, AppError> {
        state.author_service.replace_author(&instance, input).await
    }

    async fn perform_partial_update(
        state: &AppState,
        instance: Author,
        input: AuthorPatch,
    ) -> Result<Author, AppError> {
        state.author_service.patch_author(&instance, input).await
    }

    async fn perform_destroy(state: &AppState, instance: Author) -> Result<(), AppError> {
        state.author_service.delete_author(instance.id).await
    }
}
