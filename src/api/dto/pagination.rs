//! Page-number pagination for list endpoints.

use axum::http::Uri;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use url::{Url, form_urlencoded};

use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: i64 = 5;
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Keyword accepted in place of a page number.
pub const LAST_PAGE: &str = "last";

pub const INVALID_PAGE: &str = "Invalid page.";

/// Pagination query parameters.
///
/// Values are kept as raw strings: an unparsable `page` is a 404 while an
/// unparsable `page_size` silently falls back to the default, so neither
/// may fail query extraction.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page_size: Option<String>,
}

impl PaginationParams {
    /// Effective page size.
    ///
    /// # Defaults
    ///
    /// - missing, non-numeric or non-positive: [`DEFAULT_PAGE_SIZE`]
    /// - above [`MAX_PAGE_SIZE`]: clamped to the maximum
    pub fn page_size(&self) -> i64 {
        self.page_size
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|size| *size > 0)
            .map_or(DEFAULT_PAGE_SIZE, |size| size.min(MAX_PAGE_SIZE))
    }

    /// Resolves the requested page against the number of matching rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `"Invalid page."` if the page is not
    /// a positive integer (or `last`) or lies past the last page.
    pub fn resolve(&self, count: i64) -> Result<PageWindow, AppError> {
        let page_size = self.page_size();
        let num_pages = (count.max(0) + page_size - 1) / page_size;
        let num_pages = num_pages.max(1);

        let page = match self.page.as_deref().map(str::trim) {
            None => 1,
            Some(LAST_PAGE) => num_pages,
            Some(raw) => raw.parse::<i64>().map_err(|_| invalid_page(raw))?,
        };

        if page < 1 || page > num_pages {
            return Err(invalid_page(&page.to_string()));
        }

        Ok(PageWindow {
            page,
            page_size,
            num_pages,
        })
    }
}

fn invalid_page(raw: &str) -> AppError {
    AppError::not_found(INVALID_PAGE, json!({ "page": raw }))
}

/// A resolved page within a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub page_size: i64,
    pub num_pages: i64,
}

impl PageWindow {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn next_page(&self) -> Option<i64> {
        (self.page < self.num_pages).then_some(self.page + 1)
    }

    pub fn previous_page(&self) -> Option<i64> {
        (self.page > 1).then_some(self.page - 1)
    }
}

/// Paginated list envelope.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Builds an absolute link to another page of the current request.
///
/// The request path is appended to the path of `base`, so a base URL such as
/// `http://host/prefix` yields `http://host/prefix/api/...`. Every query
/// parameter except `page` is preserved. With `page` set to `None` the
/// parameter is dropped entirely, which is how links back to the first page
/// are rendered.
pub fn page_link(base: &Url, uri: &Uri, page: Option<i64>) -> String {
    let mut url = base.clone();
    url.set_path(&format!(
        "{}{}",
        base.path().trim_end_matches('/'),
        uri.path()
    ));

    let pairs: Vec<(String, String)> = uri
        .query()
        .map(|query| {
            form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .filter(|(key, _)| key != "page")
                .collect()
        })
        .unwrap_or_default();

    url.set_query(None);
    if !pairs.is_empty() || page.is_some() {
        let mut query = url.query_pairs_mut();
        query.extend_pairs(pairs);
        if let Some(page) = page {
            query.append_pair("page", &page.to_string());
        }
    }

    url.to_string()
}
