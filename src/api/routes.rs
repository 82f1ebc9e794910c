//! API route configuration.
//!
//! Every surface serves the same author table under its own permission
//! class. The principal is resolved by [`crate::api::middleware::auth`],
//! which the caller layers over these routes.

use crate::api::generic::views;
use crate::api::handlers::{
    create_author_handler, delete_author_handler, get_author_handler, list_authors_handler,
    list_authors_page_handler, my_action_handler, patch_author_handler, replace_author_handler,
};
use crate::api::permissions::{
    IsAuthenticated, IsAuthenticatedOrReadOnly, RoleBasedPermission, require,
};
use crate::api::resources::AuthorResource;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `/authors`          - hand-written handlers, [`IsAuthenticated`]
/// - `/generic/authors`  - generic mixin views, [`RoleBasedPermission`]
/// - `/viewset/authors`  - paginated viewset, [`IsAuthenticatedOrReadOnly`]
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/authors", manual_routes())
        .nest("/generic/authors", generic_routes())
        .nest("/viewset/authors", viewset_routes())
}

/// - `GET    /`     - list all authors
/// - `POST   /`     - create an author
/// - `GET    /{id}` - retrieve
/// - `PUT    /{id}` - replace
/// - `PATCH  /{id}` - partial update
/// - `DELETE /{id}` - delete
fn manual_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors_handler).post(create_author_handler))
        .route(
            "/{id}",
            get(get_author_handler)
                .put(replace_author_handler)
                .patch(patch_author_handler)
                .delete(delete_author_handler),
        )
        .route_layer(middleware::from_fn(require::<IsAuthenticated>))
}

fn generic_routes() -> Router<AppState> {
    views::routes::<AuthorResource>()
        .route_layer(middleware::from_fn(require::<RoleBasedPermission>))
}

/// Generic views plus the paginated listing and the custom action.
///
/// - `GET  /`                - paginated, filtered, searched, ordered list
/// - `POST /{id}/my-action`  - custom action echoing the id
fn viewset_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_authors_page_handler).post(views::post::<AuthorResource>),
        )
        .route(
            "/{id}",
            get(views::get_member::<AuthorResource>)
                .put(views::put::<AuthorResource>)
                .patch(views::patch::<AuthorResource>)
                .delete(views::delete::<AuthorResource>),
        )
        .route("/{id}/my-action", post(my_action_handler))
        .route_layer(middleware::from_fn(require::<IsAuthenticatedOrReadOnly>))
}
