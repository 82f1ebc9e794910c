//! Repository trait for author storage, plus list filtering and ordering.

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::error::AppError;
use async_trait::async_trait;

/// Column an author listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingField {
    Name,
    Email,
}

impl OrderingField {
    /// SQL column backing this field.
    pub fn column(self) -> &'static str {
        match self {
            OrderingField::Name => "name",
            OrderingField::Email => "email",
        }
    }
}

/// One ordering term, e.g. `-email`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorOrdering {
    pub field: OrderingField,
    pub descending: bool,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OrderingError {
    #[error("Empty ordering term")]
    Empty,

    #[error("Ordering by '{0}' is not allowed")]
    UnknownField(String),
}

impl FromStr for AuthorOrdering {
    type Err = OrderingError;

    fn from_str(term: &str) -> Result<Self, Self::Err> {
        let term = term.trim();
        let (descending, name) = match term.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, term),
        };

        let field = match name {
            "" => return Err(OrderingError::Empty),
            "name" => OrderingField::Name,
            "email" => OrderingField::Email,
            other => return Err(OrderingError::UnknownField(other.to_string())),
        };

        Ok(Self { field, descending })
    }
}

impl fmt::Display for AuthorOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-")?;
        }
        write!(f, "{}", self.field.column())
    }
}

/// Parses a comma-separated ordering expression. Unknown fields are dropped.
pub fn parse_ordering(raw: &str) -> Vec<AuthorOrdering> {
    raw.split(',')
        .filter(|term| !term.trim().is_empty())
        .filter_map(|term| match term.parse() {
            Ok(ordering) => Some(ordering),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring ordering term");
                None
            }
        })
        .collect()
}

/// Splits a search expression into terms on whitespace and commas.
pub fn split_search_terms(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Filter criteria for author listings.
///
/// With no criteria set, every author is returned ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFilter {
    /// Exact `name`.
    pub name: Option<String>,
    /// Exact `email`.
    pub email: Option<String>,
    /// Every term must occur case-insensitively in `email`.
    pub search_terms: Vec<String>,
    pub ordering: Vec<AuthorOrdering>,
    pub offset: i64,
    /// `None` means unbounded.
    pub limit: Option<i64>,
}

impl AuthorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search_terms = search.map(split_search_terms).unwrap_or_default();
        self
    }

    pub fn with_ordering(mut self, ordering: Option<&str>) -> Self {
        self.ordering = ordering.map(parse_ordering).unwrap_or_default();
        self
    }

    /// Restricts the result window.
    pub fn paginate(mut self, offset: i64, limit: i64) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }
}

/// Repository interface for author records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_author.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Inserts a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the e-mail is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Finds an author by exact e-mail.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Author>, AppError>;

    /// Lists authors matching the filter, honoring its ordering and window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: AuthorFilter) -> Result<Vec<Author>, AppError>;

    /// Counts authors matching the filter. Ordering and window are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, filter: AuthorFilter) -> Result<i64, AppError>;

    /// Applies a patch and returns the updated row, or `None` if no row has
    /// this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new e-mail is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<Option<Author>, AppError>;

    /// Deletes an author. Returns `false` if no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_parse_ascending() {
        let ordering: AuthorOrdering = "name".parse().unwrap();
        assert_eq!(ordering.field, OrderingField::Name);
        assert!(!ordering.descending);
    }

    #[test]
    fn test_ordering_parse_descending() {
        let ordering: AuthorOrdering = " -email ".parse().unwrap();
        assert_eq!(ordering.field, OrderingField::Email);
        assert!(ordering.descending);
        assert_eq!(ordering.to_string(), "-email");
    }

    #[test]
    fn test_ordering_rejects_unknown_fields() {
        assert_eq!(
            "id".parse::<AuthorOrdering>(),
            Err(OrderingError::UnknownField("id".to_string()))
        );
        assert_eq!("-".parse::<AuthorOrdering>(), Err(OrderingError::Empty));
    }

    #[test]
    fn test_parse_ordering_drops_invalid_terms() {
        let ordering = parse_ordering("-name,created_at,,email");
        assert_eq!(
            ordering,
            vec![
                AuthorOrdering {
                    field: OrderingField::Name,
                    descending: true
                },
                AuthorOrdering {
                    field: OrderingField::Email,
                    descending: false
                },
            ]
        );
    }

    #[test]
    fn test_split_search_terms() {
        assert_eq!(
            split_search_terms(" leo, example.com  ru"),
            vec!["leo", "example.com", "ru"]
        );
        assert!(split_search_terms(" , ").is_empty());
    }

    #[test]
    fn test_filter_builder() {
        let filter = AuthorFilter::new()
            .with_name(Some("Leo".to_string()))
            .with_email(None)
            .with_search(Some("tolstoy"))
            .with_ordering(Some("-name"))
            .paginate(10, 5);

        assert_eq!(filter.name.as_deref(), Some("Leo"));
        assert!(filter.email.is_none());
        assert_eq!(filter.search_terms, vec!["tolstoy"]);
        assert_eq!(filter.ordering.len(), 1);
        assert_eq!(filter.offset, 10);
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn test_filter_default_is_unbounded() {
        let filter = AuthorFilter::default();
        assert_eq!(filter.offset, 0);
        assert!(filter.limit.is_none());
        assert!(filter.ordering.is_empty());
    }
}
