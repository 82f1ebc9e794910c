//! Permission classes deciding whether a principal may issue a request.
//!
//! A permission is a pure predicate over the HTTP method and the request's
//! [`Principal`]. It is attached to a router with [`require`]:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/", get(list))
//!     .route_layer(middleware::from_fn(require::<IsAuthenticated>));
//! ```
//!
//! The principal must already be in request extensions, so the
//! authentication middleware has to run first.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::domain::entities::Principal;
use crate::error::AppError;

pub const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";
pub const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

/// Allow/deny predicate for a request.
pub trait Permission: Send + Sync + 'static {
    fn has_permission(method: &Method, principal: &Principal) -> bool;
}

/// `GET`, `HEAD` and `OPTIONS`.
pub fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

pub struct AllowAny;

impl Permission for AllowAny {
    fn has_permission(_: &Method, _: &Principal) -> bool {
        true
    }
}

pub struct IsAuthenticated;

impl Permission for IsAuthenticated {
    fn has_permission(_: &Method, principal: &Principal) -> bool {
        principal.is_authenticated()
    }
}

/// Safe methods for everyone, everything else for authenticated callers.
pub struct IsAuthenticatedOrReadOnly;

impl Permission for IsAuthenticatedOrReadOnly {
    fn has_permission(method: &Method, principal: &Principal) -> bool {
        is_safe_method(method) || principal.is_authenticated()
    }
}

/// Role-based access.
///
/// Rules, first match wins:
///
/// 1. anonymous `GET` is allowed
/// 2. authenticated `GET` and `POST` are allowed
/// 3. a superuser may do anything
/// 4. everything else is denied
///
/// `HEAD` is answered by the `GET` route and is treated as `GET`.
pub struct RoleBasedPermission;

impl Permission for RoleBasedPermission {
    fn has_permission(method: &Method, principal: &Principal) -> bool {
        let read = matches!(*method, Method::GET | Method::HEAD);

        if read {
            return true;
        }
        if principal.is_authenticated() && *method == Method::POST {
            return true;
        }
        principal.is_superuser()
    }
}

/// Middleware enforcing permission `P`.
///
/// # Errors
///
/// - `401 Unauthorized` when an anonymous caller is denied
/// - `403 Forbidden` when an authenticated caller is denied
pub async fn require<P: Permission>(req: Request, next: Next) -> Result<Response, AppError> {
    let principal = req
        .extensions()
        .get::<Principal>()
        .cloned()
        .unwrap_or_default();

    if !P::has_permission(req.method(), &principal) {
        tracing::info!(
            method = %req.method(),
            principal = principal.label(),
            "Permission denied"
        );

        return Err(if principal.is_authenticated() {
            AppError::forbidden(PERMISSION_DENIED, json!({}))
        } else {
            AppError::unauthorized(NOT_AUTHENTICATED, json!({}))
        });
    }

    Ok(next.run(req).await)
}
