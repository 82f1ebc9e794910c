//! Reusable request flows over a [`GenericResource`].
//!
//! Each trait carries one behavior as a default method and is implemented
//! for every resource. Update and destroy look the entity up before the
//! payload is validated, so a missing entity is always reported as `404`.

use async_trait::async_trait;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::GenericResource;
use crate::error::AppError;
use crate::state::AppState;

#[async_trait]
pub trait ListModelMixin: GenericResource {
    /// `200` with every entity of the queryset.
    async fn list(state: &AppState) -> Result<Response, AppError> {
        let items: Vec<Self::Representation> = Self::get_queryset(state)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Json(items).into_response())
    }
}

#[async_trait]
pub trait RetrieveModelMixin: GenericResource {
    /// `200` with one entity.
    async fn retrieve(state: &AppState, id: i64) -> Result<Response, AppError> {
        let instance = Self::get_object(state, id).await?;

        Ok(Json(Self::Representation::from(instance)).into_response())
    }
}

#[async_trait]
pub trait CreateModelMixin: GenericResource {
    /// `201` with the created entity.
    async fn create(state: &AppState, payload: Self::Payload) -> Result<Response, AppError> {
        let input = Self::validate(payload)?;
        let instance = Self::perform_create(state, input).await?;

        Ok((
            StatusCode::CREATED,
            Json(Self::Representation::from(instance)),
        )
            .into_response())
    }
}

#[async_trait]
pub trait UpdateModelMixin: GenericResource {
    /// `200` after replacing every writable field.
    async fn update(state: &AppState, id: i64, payload: Self::Payload) -> Result<Response, AppError> {
        let instance = Self::get_object(state, id).await?;
        let input = Self::validate(payload)?;
        let updated = Self::perform_update(state, instance, input).await?;

        Ok(Json(Self::Representation::from(updated)).into_response())
    }

    /// `200` after changing only the supplied fields.
    async fn partial_update(
        state: &AppState,
        id: i64,
        payload: Self::Payload,
    ) -> Result<Response, AppError> {
        let instance = Self::get_object(state, id).await?;
        let input = Self::validate_partial(payload)?;
        let updated = Self::perform_partial_update(state, instance, input).await?;

        Ok(Json(Self::Representation::from(updated)).into_response())
    }
}

#[async_trait]
pub trait DestroyModelMixin: GenericResource {
    /// `204` with an empty body.
    async fn destroy(state: &AppState, id: i64) -> Result<Response, AppError> {
        let instance = Self::get_object(state, id).await?;
        Self::perform_destroy(state, instance).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

impl<R: GenericResource> ListModelMixin for R {}
impl<R: GenericResource> RetrieveModelMixin for R {}
impl<R: GenericResource> CreateModelMixin for R {}
impl<R: GenericResource> UpdateModelMixin for R {}
impl<R: GenericResource> DestroyModelMixin for R {}
