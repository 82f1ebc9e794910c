//! Domain entity representing an author.

use chrono::{DateTime, Utc};

/// A persisted author record.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Creates a new Author instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let author = Author::new(
    ///     1,
    ///     "Leo Tolstoy".to_string(),
    ///     "leo@example.com".to_string(),
    ///     Utc::now(),
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        id: i64,
        name: String,
        email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating an author, or for replacing every writable field
/// of an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
}

/// Partial update of an author. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl From<NewAuthor> for AuthorPatch {
    fn from(new_author: NewAuthor) -> Self {
        Self {
            name: Some(new_author.name),
            email: Some(new_author.email),
        }
    }
}
