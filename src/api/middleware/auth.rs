//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{domain::entities::Principal, error::AppError, state::AppState};

/// Resolves the request's [`Principal`] and stores it in request extensions.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. No `Authorization` header: the request continues as [`Principal::Anonymous`]
/// 2. Extract token from `Authorization` header
/// 3. Validate token hash against database (revoked tokens never match)
/// 4. Update `last_used_at` timestamp
/// 5. Continue with [`Principal::Token`]
///
/// Whether the principal may perform the request is decided afterwards by
/// [`crate::api::permissions::require`].
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is present but:
/// - it is not a `Bearer` credential
/// - the token is not found or revoked
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let principal = if req.headers().contains_key(header::AUTHORIZATION) {
        let (mut parts, body) = req.into_parts();

        let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "Authorization header is invalid"}),
                )
            })?;

        req = Request::from_parts(parts, body);
        st.auth_service.authenticate(&token).await?
    } else {
        Principal::Anonymous
    };

    super::tracing::record_principal(principal.label());
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
