//! DTOs for the author resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use super::pagination::PaginationParams;
use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::repositories::AuthorFilter;
use crate::error::{AppError, field_messages};

pub const NAME_MAX_LENGTH: u64 = 100;
pub const EMAIL_MAX_LENGTH: u64 = 254;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NULL_CHARACTER: &str = "Null characters are not allowed.";

/// JSON representation of an author.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            email: author.email,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}

/// Request body for `POST`, `PUT` and `PATCH` on authors.
///
/// Each field distinguishes three states:
///
/// - **Absent** → `None` (required for create/replace, unchanged for patch)
/// - **`null`** → `Some(None)` (always rejected)
/// - **String** → `Some(Some(trimmed))`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AuthorPayload {
    #[serde(default, with = "trimmed")]
    #[validate(length(
        max = NAME_MAX_LENGTH,
        message = "Ensure this field has no more than 100 characters."
    ))]
    pub name: Option<Option<String>>,

    #[serde(default, with = "trimmed")]
    #[validate(
        email(message = "Enter a valid email address."),
        length(
            max = EMAIL_MAX_LENGTH,
            message = "Ensure this field has no more than 254 characters."
        )
    )]
    pub email: Option<Option<String>>,
}

impl AuthorPayload {
    /// Validates a full payload for create or replace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every invalid field.
    pub fn into_new_author(self) -> Result<NewAuthor, AppError> {
        self.check(false)?;

        Ok(NewAuthor {
            name: self.name.flatten().unwrap_or_default(),
            email: self.email.flatten().unwrap_or_default(),
        })
    }

    /// Validates a partial payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every invalid field.
    pub fn into_patch(self) -> Result<AuthorPatch, AppError> {
        self.check(true)?;

        Ok(AuthorPatch {
            name: self.name.flatten(),
            email: self.email.flatten(),
        })
    }

    fn check(&self, partial: bool) -> Result<(), AppError> {
        let mut errors = std::collections::BTreeMap::new();

        for (field, value) in [("name", &self.name), ("email", &self.email)] {
            let message = match value {
                None if !partial => REQUIRED,
                Some(None) => NOT_NULL,
                Some(Some(v)) if v.is_empty() => NOT_BLANK,
                Some(Some(v)) if v.contains('\0') => NULL_CHARACTER,
                _ => continue,
            };
            errors.insert(field.to_string(), vec![message.to_string()]);
        }

        // Presence errors take precedence over format errors on the same field.
        if let Err(validation) = self.validate() {
            for (field, messages) in field_messages(&validation) {
                errors.entry(field).or_insert(messages);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::field_errors(errors))
        }
    }
}

/// Body of simple acknowledgement responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters of the paginated author listing.
///
/// Empty values (`?name=`) count as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct AuthorListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub email: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub search: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub ordering: Option<String>,
}

impl AuthorListParams {
    /// Filter without a result window; pagination is applied once the
    /// total count is known.
    pub fn to_filter(&self) -> AuthorFilter {
        AuthorFilter::new()
            .with_name(self.name.clone())
            .with_email(self.email.clone())
            .with_search(self.search.as_deref())
            .with_ordering(self.ordering.as_deref())
    }
}

/// Deserializes an optional, nullable string and trims surrounding whitespace.
///
/// Paired with `#[serde(default)]` so an absent field stays `None`.
mod trimmed {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(Some(value.map(|s| s.trim().to_string())))
    }
}
