//! Viewset-only handlers: the paginated listing and the custom action.
//!
//! Retrieve, create, update and destroy are served by the generic views.

use axum::{
    Json,
    extract::{OriginalUri, State},
};

use crate::api::dto::author::{AuthorListParams, AuthorResponse, MessageResponse};
use crate::api::dto::pagination::{Paginated, page_link};
use crate::api::extract::{AppPath, AppQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists authors one page at a time.
///
/// # Endpoint
///
/// `GET /api/viewset/authors`
///
/// # Query Parameters
///
/// - `page` - page number or `last` (default: 1)
/// - `page_size` - rows per page (default: 5, max: 1000)
/// - `name` - exact name
/// - `email` - exact e-mail
/// - `search` - terms that must all occur in the e-mail, case-insensitively
/// - `ordering` - e.g. `name,-email`; ties are broken by id
///
/// # Response
///
/// ```json
/// {
///   "count": 12,
///   "next": "http://localhost:3000/api/viewset/authors?page=2",
///   "previous": null,
///   "results": [{ "id": 1, "name": "Leo Tolstoy", "email": "leo@example.com", ... }]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 `"Invalid page."` if `page` is not a page of the result.
pub async fn list_authors_page_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    AppQuery(params): AppQuery<AuthorListParams>,
) -> Result<Json<Paginated<AuthorResponse>>, AppError> {
    let filter = params.to_filter();

    let count = state.author_service.count_authors(filter.clone()).await?;
    let window = params.pagination.resolve(count)?;

    let authors = state
        .author_service
        .list_authors(filter.paginate(window.offset(), window.limit()))
        .await?;

    let next = window
        .next_page()
        .map(|page| page_link(&state.base_url, &uri, Some(page)));
    let previous = window
        .previous_page()
        .map(|page| page_link(&state.base_url, &uri, (page > 1).then_some(page)));

    Ok(Json(Paginated {
        count,
        next,
        previous,
        results: authors.into_iter().map(AuthorResponse::from).collect(),
    }))
}

/// Custom action on a single author. The id is echoed without a lookup.
///
/// # Endpoint
///
/// `POST /api/viewset/authors/{id}/my-action`
pub async fn my_action_handler(AppPath(id): AppPath<i64>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("Custom action for author with pk={id}"),
    })
}
