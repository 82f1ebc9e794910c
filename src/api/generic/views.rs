//! Axum handlers over the generic mixins.

use axum::{
    Router,
    extract::State,
    response::Response,
    routing::get,
};

use super::{
    CreateModelMixin, DestroyModelMixin, GenericResource, ListModelMixin, RetrieveModelMixin,
    UpdateModelMixin,
};
use crate::api::extract::{AppJson, AppPath};
use crate::error::AppError;
use crate::state::AppState;

/// Answers `GET`: retrieve when an id was captured, list otherwise.
pub async fn dispatch_get<R>(state: &AppState, id: Option<i64>) -> Result<Response, AppError>
where
    R: ListModelMixin + RetrieveModelMixin,
{
    match id {
        Some(id) => R::retrieve(state, id).await,
        None => R::list(state).await,
    }
}

pub async fn get_collection<R>(State(state): State<AppState>) -> Result<Response, AppError>
where
    R: ListModelMixin + RetrieveModelMixin,
{
    dispatch_get::<R>(&state, None).await
}

pub async fn get_member<R>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Response, AppError>
where
    R: ListModelMixin + RetrieveModelMixin,
{
    dispatch_get::<R>(&state, Some(id)).await
}

pub async fn post<R: CreateModelMixin>(
    State(state): State<AppState>,
    AppJson(payload): AppJson<R::Payload>,
) -> Result<Response, AppError> {
    R::create(&state, payload).await
}

pub async fn put<R: UpdateModelMixin>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<R::Payload>,
) -> Result<Response, AppError> {
    R::update(&state, id, payload).await
}

pub async fn patch<R: UpdateModelMixin>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<R::Payload>,
) -> Result<Response, AppError> {
    R::partial_update(&state, id, payload).await
}

pub async fn delete<R: DestroyModelMixin>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Response, AppError> {
    R::destroy(&state, id).await
}

/// Collection and member routes of resource `R`.
///
/// # Endpoints
///
/// - `GET    /`     - list
/// - `POST   /`     - create (`201`)
/// - `GET    /{id}` - retrieve
/// - `PUT    /{id}` - replace
/// - `PATCH  /{id}` - partial update
/// - `DELETE /{id}` - destroy (`204`)
pub fn routes<R: GenericResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(get_collection::<R>).post(post::<R>))
        .route(
            "/{id}",
            get(get_member::<R>)
                .put(put::<R>)
                .patch(patch::<R>)
                .delete(delete::<R>),
        )
}
