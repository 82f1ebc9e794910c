//! Hand-written handlers for the author endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::author::{AuthorPayload, AuthorResponse};
use crate::api::extract::{AppJson, AppPath};
use crate::domain::repositories::AuthorFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every author ordered by id.
///
/// # Endpoint
///
/// `GET /api/authors`
pub async fn list_authors_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    let authors = state.author_service.list_authors(AuthorFilter::new()).await?;

    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// Returns one author.
///
/// # Endpoint
///
/// `GET /api/authors/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist.
pub async fn get_author_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state.author_service.get_author(id).await?;

    Ok(Json(author.into()))
}

/// Creates an author.
///
/// # Endpoint
///
/// `POST /api/authors`
///
/// # Errors
///
/// Returns 400 if a field is missing or invalid, or the e-mail is taken.
pub async fn create_author_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AuthorPayload>,
) -> Result<(StatusCode, Json<AuthorResponse>), AppError> {
    let new_author = payload.into_new_author()?;
    let author = state.author_service.create_author(new_author).await?;

    Ok((StatusCode::CREATED, Json(author.into())))
}

/// Replaces every writable field of an author.
///
/// # Endpoint
///
/// `PUT /api/authors/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist (checked before the body).
/// Returns 400 if a field is missing or invalid.
pub async fn replace_author_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<AuthorPayload>,
) -> Result<Json<AuthorResponse>, AppError> {
    let current = state.author_service.get_author(id).await?;
    let replacement = payload.into_new_author()?;

    let author = state
        .author_service
        .replace_author(&current, replacement)
        .await?;

    Ok(Json(author.into()))
}

/// Updates only the supplied fields of an author.
///
/// # Endpoint
///
/// `PATCH /api/authors/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist (checked before the body).
/// Returns 400 if a supplied field is invalid.
pub async fn patch_author_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<AuthorPayload>,
) -> Result<Json<AuthorResponse>, AppError> {
    let current = state.author_service.get_author(id).await?;
    let patch = payload.into_patch()?;

    let author = state.author_service.patch_author(&current, patch).await?;

    Ok(Json(author.into()))
}

/// Deletes an author.
///
/// # Endpoint
///
/// `DELETE /api/authors/{id}`
///
/// # Errors
///
/// Returns 404 if the author does not exist.
pub async fn delete_author_handler(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    let author = state.author_service.get_author(id).await?;
    state.author_service.delete_author(author.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
